//! # Content Schema
//!
//! Converts untyped stored post data (`serde_json::Value`) into a typed [`Post`]
//! exactly once, at the storage boundary. Everything downstream (renderer,
//! editor) trusts the result.
//!
//! ## Validation order
//!
//! 1. top-level fields (`id`, `slug`, `published`, `featured`)
//! 2. the `metadata` object
//! 3. `content` is an array
//! 4. each block: the `type` tag first, then that variant's fields
//!
//! The first violation wins and is reported with its [`FieldPath`]. Nothing is
//! coerced and no block is silently dropped.

mod block;
mod error;
mod fields;
mod path;
mod post;
mod slug;
mod url;

use serde_json::Value;

pub use block::{Author, BlockKind, ContentBlock, DEFAULT_CODE_LANGUAGE, SpaceHeight};
pub use error::{PostSourceError, Shape, ValidationError, ValidationErrorKind};
pub use path::FieldPath;
pub use post::{Post, PostMetadata};
pub use slug::is_valid_slug;
pub use url::is_absolute_url;

/// Validates one raw post document.
pub fn parse_post(raw: &Value) -> Result<Post, ValidationError> {
    post::parse_post_value(raw)
}

/// Parses JSON text and validates it as a post.
pub fn parse_post_str(json: &str) -> Result<Post, PostSourceError> {
    let raw: Value = serde_json::from_str(json)?;
    Ok(parse_post(&raw)?)
}

/// A raw item excluded from a batch, by its position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedPost {
    pub index: usize,
    pub error: ValidationError,
}

/// Outcome of validating many posts at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostBatch {
    /// Valid posts in input order.
    pub posts: Vec<Post>,
    pub rejected: Vec<RejectedPost>,
}

/// Validates each item independently. A bad item is reported and excluded; it
/// never stops the rest of the batch.
pub fn parse_post_list(raw: &[Value]) -> PostBatch {
    let mut batch = PostBatch::default();
    for (index, item) in raw.iter().enumerate() {
        match parse_post(item) {
            Ok(post) => batch.posts.push(post),
            Err(error) => {
                log::warn!("Skipping post #{index}: {error}");
                batch.rejected.push(RejectedPost { index, error });
            }
        }
    }
    batch
}
