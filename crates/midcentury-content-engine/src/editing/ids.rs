use uuid::Uuid;

use crate::schema::{ContentBlock, Post};

pub fn new_block_id() -> String {
    Uuid::new_v4().to_string()
}

/// Returns the block with an id, generating one if it had none.
pub fn with_block_id(mut block: ContentBlock) -> ContentBlock {
    if block.id.is_none() {
        block.id = Some(new_block_id());
    }
    block
}

/// Gives every id-less block in the post a fresh id. Existing ids are kept.
pub fn assign_block_ids(post: &Post) -> Post {
    let mut next = post.clone();
    next.content = next.content.into_iter().map(with_block_id).collect();
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{BlockKind, PostMetadata};
    use std::collections::HashSet;

    #[test]
    fn fills_only_missing_ids() {
        let post = Post {
            id: "p".into(),
            slug: "p".into(),
            published: true,
            featured: false,
            metadata: PostMetadata {
                title: "t".into(),
                description: String::new(),
                date: String::new(),
                author: String::new(),
                image: None,
            },
            content: vec![
                ContentBlock::with_id("keep", BlockKind::Date { text: "x".into() }),
                ContentBlock::new(BlockKind::Date { text: "y".into() }),
                ContentBlock::new(BlockKind::Date { text: "z".into() }),
            ],
        };

        let with_ids = assign_block_ids(&post);

        assert_eq!(with_ids.content[0].id.as_deref(), Some("keep"));
        let unique: HashSet<_> = with_ids
            .content
            .iter()
            .map(|b| b.id.clone().unwrap())
            .collect();
        assert_eq!(unique.len(), 3);
        assert!(post.content[1].id.is_none());
    }

    #[test]
    fn generated_ids_are_uuids() {
        let id = new_block_id();
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
