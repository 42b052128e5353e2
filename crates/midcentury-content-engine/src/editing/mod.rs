/*!
 * # Editing
 *
 * Post editing as a reducer: `old post + EditAction -> new post`. There is no
 * "currently edited post" held anywhere in this crate; the caller owns the
 * post and passes it in on every edit.
 *
 * ## Module Structure
 *
 * - **`commands`**: `EditAction` and `apply`
 * - **`ids`**: block id generation (UUID v4) for blocks created in the editor
 *
 * ## Usage Pattern
 *
 * ```rust
 * use midcentury_content_engine::editing::{EditAction, apply, revalidate};
 * use midcentury_content_engine::schema::{BlockKind, ContentBlock, parse_post};
 * use midcentury_content_engine::render::render_block;
 *
 * let raw = serde_json::json!({
 *     "id": "p1",
 *     "slug": "hello",
 *     "metadata": { "title": "T", "description": "", "date": "2025-01-01", "author": "A" },
 *     "content": []
 * });
 * let post = parse_post(&raw).unwrap();
 *
 * // 1. Apply an edit; `post` is unchanged
 * let block = ContentBlock::new(BlockKind::Title { text: "Hello".into() });
 * let edited = apply(&post, EditAction::InsertBlock { index: 0, block }).unwrap();
 *
 * // 2. Re-render only the block that changed
 * let region = render_block(&edited.content[0]);
 * assert_eq!(region.tag(), "title");
 *
 * // 3. Run editor output back through the schema before saving
 * let checked = revalidate(&edited).unwrap();
 * assert_eq!(checked, edited);
 * ```
 */

pub mod commands;
pub mod ids;

pub use commands::{EditAction, EditError, apply};
pub use ids::{assign_block_ids, new_block_id};

use crate::schema::{Post, PostSourceError, parse_post};

/// Serializes a post to its stored form and validates it again.
///
/// Editor-built posts can hold values the schema would refuse (an empty title,
/// a relative banner URL); this is the gate before they are saved.
pub fn revalidate(post: &Post) -> Result<Post, PostSourceError> {
    let raw = serde_json::to_value(post)?;
    Ok(parse_post(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{BlockKind, ContentBlock, PostMetadata, ValidationErrorKind};

    fn post(content: Vec<ContentBlock>) -> Post {
        Post {
            id: "p1".into(),
            slug: "hello".into(),
            published: true,
            featured: false,
            metadata: PostMetadata {
                title: "T".into(),
                description: "D".into(),
                date: "2025-01-01".into(),
                author: "A".into(),
                image: None,
            },
            content,
        }
    }

    #[test]
    fn revalidate_accepts_valid_post() {
        let post = post(vec![ContentBlock::new(BlockKind::Banner {
            url: "https://midcentury.xyz/hero.png".into(),
        })]);
        assert_eq!(revalidate(&post).unwrap(), post);
    }

    #[test]
    fn revalidate_rejects_bad_editor_output() {
        let post = post(vec![
            ContentBlock::new(BlockKind::Title { text: "ok".into() }),
            ContentBlock::new(BlockKind::Banner {
                url: "hero.png".into(),
            }),
        ]);
        let Err(PostSourceError::Invalid(err)) = revalidate(&post) else {
            panic!("expected a validation error");
        };
        assert_eq!(err.path.to_string(), "content[1].url");
        assert!(matches!(err.kind, ValidationErrorKind::InvalidUrl { .. }));
    }
}
