//! # Block Renderer
//!
//! Maps a validated [`Post`] to a [`Document`]: a header built from the
//! metadata, then exactly one [`Region`] per content block in body order.
//!
//! Rendering is a pure function of its input. A region depends only on its own
//! block, so an editor can re-render one block with [`render_block`] and splice
//! the result in place. Dispatch is an exhaustive match on [`BlockKind`]: a new
//! block variant does not compile until it has a rendering rule here.
//!
//! [`html`] writes a `Document` out as escaped HTML.

pub mod html;
pub mod table;

use crate::inline::{InlineNode, kinds::Link, parse_inline};
use crate::schema::{Author, BlockKind, ContentBlock, Post, SpaceHeight};

pub use table::TableGrid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub header: Header,
    pub regions: Vec<Region>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub description: String,
    pub date: String,
    pub author: String,
    pub image: Option<String>,
}

/// The rendered form of one content block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub block_id: Option<String>,
    pub kind: RegionKind,
}

impl Region {
    /// The tag of the block variant this region was rendered from.
    pub fn tag(&self) -> &'static str {
        match &self.kind {
            RegionKind::Banner { .. } => "banner",
            RegionKind::Title { .. } => "title",
            RegionKind::Subtitle { .. } => "subtitle",
            RegionKind::Paragraph { .. } => "paragraph",
            RegionKind::Image { .. } => "image",
            RegionKind::Space { .. } => "space",
            RegionKind::Code { .. } => "code",
            RegionKind::Table(_) => "table",
            RegionKind::Authors { .. } => "authors",
            RegionKind::Date { .. } => "date",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionKind {
    /// The renderer never fetches `src`; a broken image is a display concern.
    Banner {
        src: String,
    },
    Title {
        text: String,
    },
    Subtitle {
        text: String,
    },
    Paragraph {
        inlines: Vec<InlineNode>,
    },
    Image {
        src: String,
        caption: Option<String>,
    },
    Space {
        height: SpaceHeight,
    },
    Code {
        code: String,
        language: String,
        file_name: Option<String>,
    },
    Table(TableGrid),
    Authors {
        authors: Vec<AuthorLink>,
    },
    Date {
        text: String,
    },
}

/// An author line with its external profile link, if the link is safe to follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorLink {
    pub name: String,
    pub profile_url: Option<String>,
    pub avatar: Option<String>,
}

impl From<&Author> for AuthorLink {
    fn from(author: &Author) -> Self {
        Self {
            name: author.name.clone(),
            profile_url: author.x_profile.as_deref().and_then(Link::sanitize_href),
            avatar: author.avatar.as_deref().and_then(Link::sanitize_href),
        }
    }
}

pub fn render_post(post: &Post) -> Document {
    let metadata = &post.metadata;
    Document {
        header: Header {
            title: metadata.title.clone(),
            description: metadata.description.clone(),
            date: metadata.date.clone(),
            author: metadata.author.clone(),
            image: metadata.image.clone(),
        },
        regions: post.content.iter().map(render_block).collect(),
    }
}

pub fn render_block(block: &ContentBlock) -> Region {
    let kind = match &block.kind {
        BlockKind::Banner { url } => RegionKind::Banner { src: url.clone() },
        BlockKind::Title { text } => RegionKind::Title { text: text.clone() },
        BlockKind::Subtitle { text } => RegionKind::Subtitle { text: text.clone() },
        BlockKind::Paragraph { text } => RegionKind::Paragraph {
            inlines: parse_inline(text),
        },
        BlockKind::Image { url, caption } => RegionKind::Image {
            src: url.clone(),
            caption: caption.clone(),
        },
        BlockKind::Space { height } => RegionKind::Space { height: *height },
        BlockKind::Code {
            code,
            language,
            file_name,
        } => RegionKind::Code {
            code: code.clone(),
            language: language.clone(),
            file_name: file_name.clone(),
        },
        BlockKind::Table { headers, rows } => {
            RegionKind::Table(TableGrid::reconcile(headers, rows))
        }
        BlockKind::Authors { list } => RegionKind::Authors {
            authors: list.iter().map(AuthorLink::from).collect(),
        },
        BlockKind::Date { text } => RegionKind::Date { text: text.clone() },
    };

    Region {
        block_id: block.id.clone(),
        kind,
    }
}
