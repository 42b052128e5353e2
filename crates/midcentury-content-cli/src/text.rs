use midcentury_content_engine::inline::InlineNode;
use midcentury_content_engine::{Document, RegionKind};

/// Lays a rendered document out as plain terminal lines.
pub fn document_lines(document: &Document) -> Vec<String> {
    let header = &document.header;
    let mut lines = vec![header.title.clone()];
    if !header.description.is_empty() {
        lines.push(header.description.clone());
    }
    lines.push(format!("{} · {}", header.author, header.date));
    lines.push(String::new());

    for region in &document.regions {
        match &region.kind {
            RegionKind::Banner { src } => lines.push(format!("[banner] {src}")),
            RegionKind::Title { text } => lines.push(format!("# {text}")),
            RegionKind::Subtitle { text } => lines.push(format!("## {text}")),
            RegionKind::Paragraph { inlines } => {
                lines.extend(InlineNode::plain_text(inlines).lines().map(String::from));
            }
            RegionKind::Image { src, caption } => {
                lines.push(format!("[image] {src}"));
                if let Some(caption) = caption {
                    lines.push(format!("  {caption}"));
                }
            }
            RegionKind::Space { height } => {
                // One blank line per 16px, the gap after the previous region included
                let extra = usize::from(height.pixels() / 16).saturating_sub(1);
                lines.extend(std::iter::repeat_n(String::new(), extra));
                continue;
            }
            RegionKind::Code {
                code,
                language,
                file_name,
            } => {
                match file_name {
                    Some(name) => lines.push(format!("```{language} {name}")),
                    None => lines.push(format!("```{language}")),
                }
                lines.extend(code.lines().map(String::from));
                lines.push("```".to_string());
            }
            RegionKind::Table(grid) => {
                if !grid.headers.is_empty() {
                    lines.push(grid.headers.join(" | "));
                    lines.push(vec!["---"; grid.width].join(" | "));
                }
                lines.extend(grid.rows.iter().map(|row| row.join(" | ")));
            }
            RegionKind::Authors { authors } => {
                let names: Vec<String> = authors
                    .iter()
                    .map(|author| match &author.profile_url {
                        Some(url) => format!("{} ({url})", author.name),
                        None => author.name.clone(),
                    })
                    .collect();
                lines.push(format!("By {}", names.join(", ")));
            }
            RegionKind::Date { text } => lines.push(text.clone()),
        }
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use midcentury_content_engine::schema::{Author, SpaceHeight};
    use midcentury_content_engine::{BlockKind, ContentBlock, Post, PostMetadata, render_post};
    use pretty_assertions::assert_eq;

    fn post(content: Vec<BlockKind>) -> Post {
        Post {
            id: "p1".into(),
            slug: "hello".into(),
            published: true,
            featured: false,
            metadata: PostMetadata {
                title: "Hello".into(),
                description: "".into(),
                date: "2025-01-01".into(),
                author: "Midcentury".into(),
                image: None,
            },
            content: content.into_iter().map(ContentBlock::new).collect(),
        }
    }

    #[test]
    fn header_then_blocks() {
        let doc = render_post(&post(vec![
            BlockKind::Title { text: "Intro".into() },
            BlockKind::Paragraph {
                text: "Line <b>one</b><br>line two".into(),
            },
        ]));

        assert_eq!(
            document_lines(&doc),
            vec![
                "Hello",
                "Midcentury · 2025-01-01",
                "",
                "# Intro",
                "",
                "Line one",
                "line two",
                "",
            ]
        );
    }

    #[test]
    fn space_widens_the_gap() {
        let doc = render_post(&post(vec![
            BlockKind::Date { text: "a".into() },
            BlockKind::Space {
                height: SpaceHeight::Large,
            },
            BlockKind::Date { text: "b".into() },
        ]));

        let lines = document_lines(&doc);

        assert_eq!(&lines[3..], &["a", "", "", "", "", "b", ""]);
    }

    #[test]
    fn code_table_and_authors() {
        let doc = render_post(&post(vec![
            BlockKind::Code {
                code: "fn main() {}\n".into(),
                language: "rust".into(),
                file_name: Some("main.rs".into()),
            },
            BlockKind::Table {
                headers: vec!["Model".into(), "Score".into()],
                rows: vec![vec!["harmoniq".into()]],
            },
            BlockKind::Authors {
                list: vec![
                    Author {
                        name: "Ada".into(),
                        x_profile: Some("https://x.com/ada".into()),
                        avatar: None,
                    },
                    Author {
                        name: "Sam".into(),
                        x_profile: Some("javascript:alert(1)".into()),
                        avatar: None,
                    },
                ],
            },
        ]));

        let lines = document_lines(&doc);

        assert_eq!(
            &lines[3..],
            &[
                "```rust main.rs",
                "fn main() {}",
                "```",
                "",
                "Model | Score",
                "--- | ---",
                "harmoniq | ",
                "",
                "By Ada (https://x.com/ada), Sam",
                "",
            ]
        );
    }
}
