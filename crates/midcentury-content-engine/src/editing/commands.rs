use crate::schema::{ContentBlock, Post, PostMetadata};

use super::ids::with_block_id;

/// An edit to a post. Blocks are only ever inserted, replaced, moved or
/// removed whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    ReplacePost(Post),
    ReplaceMetadata(PostMetadata),
    SetPublished(bool),
    SetFeatured(bool),
    /// `index == len` appends.
    InsertBlock {
        index: usize,
        block: ContentBlock,
    },
    ReplaceBlock {
        index: usize,
        block: ContentBlock,
    },
    RemoveBlock {
        index: usize,
    },
    /// Removes the block at `from` and reinserts it so it ends up at `to`.
    MoveBlock {
        from: usize,
        to: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("block index {index} out of bounds for post with {len} blocks")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Applies one action and returns the resulting post; `post` is left as it was.
///
/// Inserted and replacing blocks without an id get a fresh one.
pub fn apply(post: &Post, action: EditAction) -> Result<Post, EditError> {
    let mut next = post.clone();
    let len = next.content.len();

    match action {
        EditAction::ReplacePost(replacement) => return Ok(replacement),
        EditAction::ReplaceMetadata(metadata) => next.metadata = metadata,
        EditAction::SetPublished(published) => next.published = published,
        EditAction::SetFeatured(featured) => next.featured = featured,
        EditAction::InsertBlock { index, block } => {
            if index > len {
                return Err(EditError::IndexOutOfBounds { index, len });
            }
            next.content.insert(index, with_block_id(block));
        }
        EditAction::ReplaceBlock { index, block } => {
            let slot = next
                .content
                .get_mut(index)
                .ok_or(EditError::IndexOutOfBounds { index, len })?;
            *slot = with_block_id(block);
        }
        EditAction::RemoveBlock { index } => {
            check_index(index, len)?;
            next.content.remove(index);
        }
        EditAction::MoveBlock { from, to } => {
            check_index(from, len)?;
            check_index(to, len)?;
            let block = next.content.remove(from);
            next.content.insert(to, block);
        }
    }

    Ok(next)
}

fn check_index(index: usize, len: usize) -> Result<(), EditError> {
    if index < len {
        Ok(())
    } else {
        Err(EditError::IndexOutOfBounds { index, len })
    }
}
