use anyhow::{Context, Result, bail};
use html_escape::{encode_double_quoted_attribute, encode_text};
use midcentury_content_engine::{Library, Post, render_post};
use std::fs;
use std::path::{Component, Path};

const INDEX_FILE: &str = "index.html";
/// Post pages live one level down so no slug can collide with the index.
const POSTS_DIR: &str = "posts";

/// Writes `posts/<slug>.html` for every listed post plus an `index.html`
/// linking them, in listing order. Returns the number of post pages written.
///
/// Every slug is checked before anything is written; a slug that is not a
/// plain file name fails the whole render.
pub fn write_site(library: &Library, out_dir: &Path) -> Result<usize> {
    for post in library.listing() {
        if !is_plain_file_stem(&post.slug) {
            bail!(
                "refusing to write post {:?}: slug {:?} is not a plain file name",
                post.id,
                post.slug
            );
        }
    }

    let posts_dir = out_dir.join(POSTS_DIR);
    fs::create_dir_all(&posts_dir)
        .with_context(|| format!("creating output directory {}", posts_dir.display()))?;

    for post in library.listing() {
        let path = posts_dir.join(format!("{}.html", post.slug));
        let body = render_post(post).to_html();
        fs::write(&path, page(&post.metadata.title, &body))
            .with_context(|| format!("writing {}", path.display()))?;
        log::debug!("Wrote {}", path.display());
    }

    let index_path = out_dir.join(INDEX_FILE);
    fs::write(&index_path, page("Blog", &index_body(library)))
        .with_context(|| format!("writing {}", index_path.display()))?;

    log::info!(
        "Rendered {} posts to {}",
        library.len(),
        out_dir.display()
    );
    Ok(library.len())
}

fn is_plain_file_stem(slug: &str) -> bool {
    let mut components = Path::new(slug).components();
    matches!(components.next(), Some(Component::Normal(_)))
        && components.next().is_none()
        && !slug.contains(['/', '\\'])
}

fn page_href(post: &Post) -> String {
    format!("{POSTS_DIR}/{}.html", post.slug)
}

fn index_body(library: &Library) -> String {
    let mut out = String::from("<ul class=\"post-list\">\n");
    for post in library.listing() {
        let class = if post.featured {
            "post-entry featured"
        } else {
            "post-entry"
        };
        out.push_str(&format!(
            "<li class=\"{class}\"><a href=\"{}\">{}</a> <time>{}</time></li>\n",
            encode_double_quoted_attribute(&page_href(post)),
            encode_text(&post.metadata.title),
            encode_text(&post.metadata.date)
        ));
    }
    out.push_str("</ul>\n");
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{body}</body>\n</html>\n",
        encode_text(title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use midcentury_content_engine::{BlockKind, ContentBlock, PostMetadata, load_posts};
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Builds a library directly, skipping the schema's slug check.
    fn library_with_slug(slug: &str) -> Library {
        let post = Post {
            id: "p1".into(),
            slug: slug.into(),
            published: true,
            featured: false,
            metadata: PostMetadata {
                title: "T".into(),
                description: String::new(),
                date: "2025-01-01".into(),
                author: "A".into(),
                image: None,
            },
            content: vec![ContentBlock::new(BlockKind::Paragraph {
                text: "BODY".into(),
            })],
        };
        Library::build(vec![(PathBuf::from("p1.json"), post)], vec![], false)
    }

    fn write_post(dir: &Path, slug: &str, title: &str, date: &str, featured: bool) {
        let json = format!(
            r#"{{
  "id": "{slug}",
  "slug": "{slug}",
  "featured": {featured},
  "metadata": {{ "title": "{title}", "description": "", "date": "{date}", "author": "A" }},
  "content": [{{ "type": "paragraph", "text": "Body of {slug}" }}]
}}"#
        );
        fs::write(dir.join(format!("{slug}.json")), json).unwrap();
    }

    #[test]
    fn writes_one_page_per_post_and_an_index() {
        let posts = TempDir::new().unwrap();
        write_post(posts.path(), "older", "Older", "2024-01-01", false);
        write_post(posts.path(), "newer", "Fish & Chips", "2025-01-01", true);
        let library = load_posts(posts.path()).unwrap();
        let out = TempDir::new().unwrap();
        let site = out.path().join("site");

        let written = write_site(&library, &site).unwrap();

        assert_eq!(written, 2);
        let newer = fs::read_to_string(site.join("posts/newer.html")).unwrap();
        assert!(newer.starts_with("<!DOCTYPE html>"));
        assert!(newer.contains("<title>Fish &amp; Chips</title>"));
        assert!(newer.contains("Body of newer"));
        assert!(site.join("posts/older.html").exists());

        let index = fs::read_to_string(site.join(INDEX_FILE)).unwrap();
        let newer_at = index.find("href=\"posts/newer.html\"").unwrap();
        let older_at = index.find("href=\"posts/older.html\"").unwrap();
        assert!(newer_at < older_at);
        assert!(index.contains("<li class=\"post-entry featured\">"));
    }

    #[test]
    fn post_named_index_does_not_replace_the_listing() {
        let out = TempDir::new().unwrap();

        write_site(&library_with_slug("index"), out.path()).unwrap();

        let post = fs::read_to_string(out.path().join("posts/index.html")).unwrap();
        assert!(post.contains("BODY"));
        let index = fs::read_to_string(out.path().join(INDEX_FILE)).unwrap();
        assert!(index.contains("<ul class=\"post-list\">"));
        assert!(!index.contains("BODY"));
    }

    #[test]
    fn path_like_slug_writes_nothing() {
        let out = TempDir::new().unwrap();
        let site = out.path().join("site");
        let outside = out.path().join("escaped");

        for slug in [
            outside.to_string_lossy().into_owned(),
            "../escaped".to_string(),
            "nested/post".to_string(),
            "..".to_string(),
        ] {
            let err = write_site(&library_with_slug(&slug), &site).unwrap_err();
            assert!(err.to_string().contains("not a plain file name"), "{slug}");
        }

        assert!(!site.exists());
        assert!(!out.path().join("escaped.html").exists());
        assert!(!outside.with_extension("html").exists());
    }

    #[test]
    fn empty_library_still_gets_an_index() {
        let posts = TempDir::new().unwrap();
        let library = load_posts(posts.path()).unwrap();
        let out = TempDir::new().unwrap();

        assert_eq!(write_site(&library, out.path()).unwrap(), 0);
        let index = fs::read_to_string(out.path().join(INDEX_FILE)).unwrap();
        assert!(index.contains("<ul class=\"post-list\">\n</ul>"));
    }
}
