//! # Inline Markup
//!
//! Paragraph blocks carry a small HTML-like markup subset. This module turns
//! that text into a tree the renderer can write out safely.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` tree (Text, Bold, Italic, Underline, Link, LineBreak)
//! - **`kinds`**: tag names and link target rules
//! - **`cursor`**: byte `Cursor` with backtracking via `Clone`
//! - **`parser`**: `parse_inline()` entry point and the tag/tree builders
//!
//! ## Sanitization boundary
//!
//! Only the tags listed in `kinds` are interpreted. Any other markup is kept as
//! literal text, so writing the tree out with escaping can never inject
//! elements that were not in the recognized set.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;
