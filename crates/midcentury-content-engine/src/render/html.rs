use html_escape::{encode_double_quoted_attribute, encode_text};

use super::{AuthorLink, Document, Header, Region, RegionKind, TableGrid};
use crate::inline::InlineNode;

/// Attributes added to every link that leaves the page.
const EXTERNAL_REL: &str = r#" rel="noopener noreferrer""#;

impl Document {
    /// Writes the document as an HTML `<article>` fragment, one line per region.
    ///
    /// All text and attribute values are escaped; the only elements produced
    /// are the ones written here.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<article class=\"post\">\n");
        write_header(&mut out, &self.header);
        for region in &self.regions {
            write_region(&mut out, region);
            out.push('\n');
        }
        out.push_str("</article>\n");
        out
    }
}

fn write_header(out: &mut String, header: &Header) {
    out.push_str("<header class=\"post-header\">\n");
    if let Some(image) = &header.image {
        out.push_str(&format!(
            "<img class=\"post-image\" src=\"{}\" alt=\"\">\n",
            encode_double_quoted_attribute(image)
        ));
    }
    out.push_str(&format!(
        "<h1 class=\"post-title\">{}</h1>\n",
        encode_text(&header.title)
    ));
    out.push_str(&format!(
        "<p class=\"post-description\">{}</p>\n",
        encode_text(&header.description)
    ));
    out.push_str(&format!(
        "<p class=\"post-byline\"><span class=\"post-author\">{}</span> <time>{}</time></p>\n",
        encode_text(&header.author),
        encode_text(&header.date)
    ));
    out.push_str("</header>\n");
}

/// Writes a single region. Exposed so an editor preview can refresh one block.
pub fn region_html(region: &Region) -> String {
    let mut out = String::new();
    write_region(&mut out, region);
    out
}

fn write_region(out: &mut String, region: &Region) {
    let id = region
        .block_id
        .as_deref()
        .map(|id| format!(" data-block-id=\"{}\"", encode_double_quoted_attribute(id)))
        .unwrap_or_default();

    match &region.kind {
        RegionKind::Banner { src } => out.push_str(&format!(
            "<figure class=\"block-banner\"{id}><img src=\"{}\" alt=\"\"></figure>",
            encode_double_quoted_attribute(src)
        )),
        RegionKind::Title { text } => out.push_str(&format!(
            "<h2 class=\"block-title\"{id}>{}</h2>",
            encode_text(text)
        )),
        RegionKind::Subtitle { text } => out.push_str(&format!(
            "<h3 class=\"block-subtitle\"{id}>{}</h3>",
            encode_text(text)
        )),
        RegionKind::Paragraph { inlines } => {
            out.push_str(&format!("<p class=\"block-paragraph\"{id}>"));
            write_inlines(out, inlines);
            out.push_str("</p>");
        }
        RegionKind::Image { src, caption } => {
            let alt = caption.as_deref().unwrap_or_default();
            out.push_str(&format!(
                "<figure class=\"block-image\"{id}><img src=\"{}\" alt=\"{}\">",
                encode_double_quoted_attribute(src),
                encode_double_quoted_attribute(alt)
            ));
            if let Some(caption) = caption {
                out.push_str(&format!("<figcaption>{}</figcaption>", encode_text(caption)));
            }
            out.push_str("</figure>");
        }
        RegionKind::Space { height } => out.push_str(&format!(
            "<div class=\"block-space block-space-{}\"{id} style=\"height: {}px\"></div>",
            height.as_str(),
            height.pixels()
        )),
        RegionKind::Code {
            code,
            language,
            file_name,
        } => {
            out.push_str(&format!("<figure class=\"block-code\"{id}>"));
            if let Some(file_name) = file_name {
                out.push_str(&format!(
                    "<figcaption class=\"code-file-name\">{}</figcaption>",
                    encode_text(file_name)
                ));
            }
            out.push_str(&format!(
                "<pre><code class=\"language-{}\">{}</code></pre></figure>",
                encode_double_quoted_attribute(language),
                encode_text(code)
            ));
        }
        RegionKind::Table(grid) => write_table(out, grid, &id),
        RegionKind::Authors { authors } => {
            out.push_str(&format!("<ul class=\"block-authors\"{id}>"));
            for author in authors {
                write_author(out, author);
            }
            out.push_str("</ul>");
        }
        RegionKind::Date { text } => out.push_str(&format!(
            "<p class=\"block-date\"{id}><time>{}</time></p>",
            encode_text(text)
        )),
    }
}

fn write_table(out: &mut String, grid: &TableGrid, id: &str) {
    out.push_str(&format!("<table class=\"block-table\"{id}>"));
    if !grid.headers.is_empty() {
        out.push_str("<thead><tr>");
        for header in &grid.headers {
            out.push_str(&format!("<th>{}</th>", encode_text(header)));
        }
        out.push_str("</tr></thead>");
    }
    out.push_str("<tbody>");
    for row in &grid.rows {
        out.push_str("<tr>");
        for cell in row {
            out.push_str(&format!("<td>{}</td>", encode_text(cell)));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
}

fn write_author(out: &mut String, author: &AuthorLink) {
    out.push_str("<li class=\"author\">");
    if let Some(avatar) = &author.avatar {
        out.push_str(&format!(
            "<img class=\"author-avatar\" src=\"{}\" alt=\"\">",
            encode_double_quoted_attribute(avatar)
        ));
    }
    match &author.profile_url {
        Some(href) => out.push_str(&format!(
            "<a class=\"author-name\" href=\"{}\"{EXTERNAL_REL}>{}</a>",
            encode_double_quoted_attribute(href),
            encode_text(&author.name)
        )),
        None => out.push_str(&format!(
            "<span class=\"author-name\">{}</span>",
            encode_text(&author.name)
        )),
    }
    out.push_str("</li>");
}

fn write_inlines(out: &mut String, nodes: &[InlineNode]) {
    for node in nodes {
        match node {
            InlineNode::Text(text) => out.push_str(&encode_text(text)),
            InlineNode::Bold(children) => wrap(out, "strong", children),
            InlineNode::Italic(children) => wrap(out, "em", children),
            InlineNode::Underline(children) => wrap(out, "u", children),
            InlineNode::Link { href, children } => {
                out.push_str(&format!(
                    "<a href=\"{}\"{EXTERNAL_REL}>",
                    encode_double_quoted_attribute(href)
                ));
                write_inlines(out, children);
                out.push_str("</a>");
            }
            InlineNode::LineBreak => out.push_str("<br>"),
        }
    }
}

fn wrap(out: &mut String, element: &str, children: &[InlineNode]) {
    out.push_str(&format!("<{element}>"));
    write_inlines(out, children);
    out.push_str(&format!("</{element}>"));
}
