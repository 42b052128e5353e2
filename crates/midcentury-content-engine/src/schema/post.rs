use serde::Serialize;
use serde_json::Value;

use super::block::{ContentBlock, parse_block};
use super::error::{Shape, ValidationError};
use super::fields::Fields;
use super::path::FieldPath;

/// A blog post: metadata plus an ordered body of content blocks.
///
/// `content` order is the render order; there is no separate position field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: String,
    /// URL-unique key.
    pub slug: String,
    pub published: bool,
    pub featured: bool,
    pub metadata: PostMetadata,
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostMetadata {
    pub title: String,
    pub description: String,
    pub date: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

pub(crate) fn parse_post_value(raw: &Value) -> Result<Post, ValidationError> {
    let root = FieldPath::root();
    let fields = Fields::object(raw, root)?;

    let id = fields.string("id")?;
    let slug = fields.slug("slug")?;
    let published = fields.bool_or("published", true)?;
    let featured = fields.bool_or("featured", false)?;

    let metadata = parse_metadata(&fields)?;

    let content_path = fields.field_path("content");
    let content = fields
        .array("content")?
        .iter()
        .enumerate()
        .map(|(i, block)| parse_block(block, content_path.index(i)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Post {
        id,
        slug,
        published,
        featured,
        metadata,
        content,
    })
}

fn parse_metadata(post: &Fields<'_>) -> Result<PostMetadata, ValidationError> {
    let raw = post.required("metadata", Shape::Object)?;
    let fields = Fields::object(raw, post.field_path("metadata"))?;
    Ok(PostMetadata {
        title: fields.string("title")?,
        description: fields.string("description")?,
        date: fields.string("date")?,
        author: fields.string("author")?,
        image: fields.optional_string("image")?,
    })
}
