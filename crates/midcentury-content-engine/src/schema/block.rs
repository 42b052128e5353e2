use serde::Serialize;
use serde_json::Value;

use super::error::{Shape, ValidationError, ValidationErrorKind};
use super::fields::{Fields, as_array, string_items};
use super::path::FieldPath;

/// Language recorded for a code block stored without one.
pub const DEFAULT_CODE_LANGUAGE: &str = "plaintext";

/// One element of a post body.
///
/// The `id` is only used for stable list operations in an editor; the variant in
/// `kind` is fixed for the life of the block. Editing a block means replacing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub kind: BlockKind,
}

impl ContentBlock {
    pub fn new(kind: BlockKind) -> Self {
        Self { id: None, kind }
    }

    pub fn with_id(id: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            id: Some(id.into()),
            kind,
        }
    }

    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }
}

/// The closed set of block shapes, discriminated by the `type` tag on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlockKind {
    Banner {
        url: String,
    },
    Title {
        text: String,
    },
    Subtitle {
        text: String,
    },
    /// `text` may carry the inline markup understood by [`crate::inline`].
    Paragraph {
        text: String,
    },
    Image {
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    Space {
        height: SpaceHeight,
    },
    Code {
        code: String,
        language: String,
        #[serde(rename = "fileName", skip_serializing_if = "Option::is_none")]
        file_name: Option<String>,
    },
    /// Row widths are not checked against the header; the renderer reconciles them.
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Authors {
        list: Vec<Author>,
    },
    /// Free-form display text, never parsed as a date.
    Date {
        text: String,
    },
}

impl BlockKind {
    /// Every tag accepted by the schema, in declaration order.
    pub const TAGS: [&'static str; 10] = [
        "banner", "title", "subtitle", "paragraph", "image", "space", "code", "table", "authors",
        "date",
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            BlockKind::Banner { .. } => "banner",
            BlockKind::Title { .. } => "title",
            BlockKind::Subtitle { .. } => "subtitle",
            BlockKind::Paragraph { .. } => "paragraph",
            BlockKind::Image { .. } => "image",
            BlockKind::Space { .. } => "space",
            BlockKind::Code { .. } => "code",
            BlockKind::Table { .. } => "table",
            BlockKind::Authors { .. } => "authors",
            BlockKind::Date { .. } => "date",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceHeight {
    Small,
    #[default]
    Medium,
    Large,
}

impl SpaceHeight {
    pub const NAMES: &'static [&'static str] = &["small", "medium", "large"];

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "small" => Some(SpaceHeight::Small),
            "medium" => Some(SpaceHeight::Medium),
            "large" => Some(SpaceHeight::Large),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SpaceHeight::Small => "small",
            SpaceHeight::Medium => "medium",
            SpaceHeight::Large => "large",
        }
    }

    pub fn pixels(self) -> u16 {
        match self {
            SpaceHeight::Small => 16,
            SpaceHeight::Medium => 32,
            SpaceHeight::Large => 64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
    #[serde(rename = "xProfile", skip_serializing_if = "Option::is_none")]
    pub x_profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Validates one raw element of `content`. The `type` tag is checked before any
/// variant field.
pub(crate) fn parse_block(raw: &Value, path: FieldPath) -> Result<ContentBlock, ValidationError> {
    let fields = Fields::object(raw, path)?;

    let tag_value = fields.required("type", Shape::BlockType)?;
    let Value::String(tag) = tag_value else {
        return Err(ValidationError::wrong_type(
            fields.field_path("type"),
            Shape::BlockType,
            tag_value,
        ));
    };

    let kind = match tag.as_str() {
        "banner" => BlockKind::Banner {
            url: fields.absolute_url("url")?,
        },
        "title" => BlockKind::Title {
            text: fields.non_empty_string("text")?,
        },
        "subtitle" => BlockKind::Subtitle {
            text: fields.non_empty_string("text")?,
        },
        "paragraph" => BlockKind::Paragraph {
            text: fields.string("text")?,
        },
        "image" => BlockKind::Image {
            url: fields.absolute_url("url")?,
            caption: fields.optional_string("caption")?,
        },
        "space" => BlockKind::Space {
            height: parse_height(&fields)?,
        },
        "code" => BlockKind::Code {
            code: fields.string("code")?,
            language: fields
                .optional_string("language")?
                .unwrap_or_else(|| DEFAULT_CODE_LANGUAGE.to_string()),
            file_name: fields.optional_string("fileName")?,
        },
        "table" => BlockKind::Table {
            headers: fields.string_array("headers")?,
            rows: parse_rows(&fields)?,
        },
        "authors" => BlockKind::Authors {
            list: parse_authors(&fields)?,
        },
        "date" => BlockKind::Date {
            text: fields.string("text")?,
        },
        unknown => {
            return Err(ValidationError::new(
                fields.field_path("type"),
                ValidationErrorKind::UnknownBlockType {
                    tag: unknown.to_string(),
                },
            ));
        }
    };

    let id = fields.optional_string("id")?;
    Ok(ContentBlock { id, kind })
}

fn parse_height(fields: &Fields<'_>) -> Result<SpaceHeight, ValidationError> {
    let Some(name) = fields.optional_string("height")? else {
        return Ok(SpaceHeight::default());
    };
    SpaceHeight::parse(&name).ok_or_else(|| {
        ValidationError::new(
            fields.field_path("height"),
            ValidationErrorKind::InvalidEnum {
                value: name,
                allowed: SpaceHeight::NAMES,
            },
        )
    })
}

fn parse_rows(fields: &Fields<'_>) -> Result<Vec<Vec<String>>, ValidationError> {
    let rows_path = fields.field_path("rows");
    fields
        .array("rows")?
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let row_path = rows_path.index(i);
            let cells = as_array(row, row_path.clone())?;
            string_items(cells, &row_path)
        })
        .collect()
}

fn parse_authors(fields: &Fields<'_>) -> Result<Vec<Author>, ValidationError> {
    let list_path = fields.field_path("list");
    fields
        .array("list")?
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            let author = Fields::object(raw, list_path.index(i))?;
            Ok(Author {
                name: author.non_empty_string("name")?,
                x_profile: author.optional_string("xProfile")?,
                avatar: author.optional_string("avatar")?,
            })
        })
        .collect()
}
