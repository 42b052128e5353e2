//! Content pipeline for the Midcentury Labs blog.
//!
//! Stored JSON flows through [`schema`] (validation, once, at the boundary)
//! into typed [`schema::Post`]s, which [`render`] turns into a [`render::Document`].
//! [`io`] loads and saves post files; [`editing`] applies editor actions.

pub mod editing;
pub mod inline;
pub mod io;
pub mod render;
pub mod schema;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{EditAction, EditError, apply, revalidate};
pub use io::{IoError, Library, LoadIssue, load_posts, load_posts_with_drafts};
pub use render::{Document, Region, RegionKind, render_block, render_post};
pub use schema::{
    BlockKind, ContentBlock, Post, PostBatch, PostMetadata, ValidationError, parse_post,
    parse_post_list, parse_post_str,
};
