//! # Inline Kinds
//!
//! The recognized paragraph tags and the syntax they own. The parser asks these
//! types what a tag name means; it never hardcodes tag names itself.
//!
//! - **`TagKind`**: tag name to formatting kind (`b`/`strong`, `i`/`em`, `u`, `a`, `br`)
//! - **`Link`**: which `href` targets survive sanitization

pub mod link;

pub use link::Link;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Bold,
    Italic,
    Underline,
    Link,
    LineBreak,
}

impl TagKind {
    pub const OPEN: u8 = b'<';
    pub const CLOSE: u8 = b'>';
    pub const END_MARK: u8 = b'/';

    /// Maps a tag name (any case) to its kind, or `None` for unrecognized tags.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "b" | "strong" => Some(TagKind::Bold),
            "i" | "em" => Some(TagKind::Italic),
            "u" => Some(TagKind::Underline),
            "a" => Some(TagKind::Link),
            "br" => Some(TagKind::LineBreak),
            _ => None,
        }
    }

    /// Void tags never take children or a closing tag.
    pub fn is_void(self) -> bool {
        matches!(self, TagKind::LineBreak)
    }
}
