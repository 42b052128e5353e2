//! Storage side of the pipeline: finding post files, reading them through the
//! schema, and writing editor output back.

mod library;

pub use library::{IssueReason, Library, LoadIssue, date_key, sort_newest_first};

use crate::schema::{Post, ValidationError, parse_post};
use relative_path::RelativePath;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid posts directory: {0}")]
    InvalidPostsDir(String),
    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid post in {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

const POST_EXTENSION: &str = "json";

/// Read and validate a single post file
pub fn read_post(relative_path: &RelativePath, posts_root: &Path) -> Result<Post, IoError> {
    let absolute_path = relative_path.to_path(posts_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    let content = fs::read_to_string(&absolute_path)?;
    let raw: Value = serde_json::from_str(&content).map_err(|source| IoError::Json {
        path: absolute_path.clone(),
        source,
    })?;
    parse_post(&raw).map_err(|source| IoError::Invalid {
        path: absolute_path,
        source,
    })
}

/// Write a post as pretty-printed JSON, creating parent directories as needed
pub fn write_post(relative_path: &RelativePath, posts_root: &Path, post: &Post) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(posts_root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut content = serde_json::to_string_pretty(post).map_err(|source| IoError::Json {
        path: absolute_path.clone(),
        source,
    })?;
    content.push('\n');
    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Scan for post files (`*.json`) under the posts directory, sorted by path
pub fn scan_post_files(posts_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !posts_root.exists() {
        return Err(IoError::InvalidPostsDir(
            "posts directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(posts_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == POST_EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_posts_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidPostsDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

/// Load every post under `posts_root` into a published, newest-first [`Library`].
///
/// A file that cannot be read, is not JSON or fails the schema is recorded as a
/// [`LoadIssue`] and skipped; it never prevents the other posts from loading.
pub fn load_posts(posts_root: &Path) -> Result<Library, IoError> {
    load(posts_root, false)
}

/// Like [`load_posts`], but keeps unpublished posts.
pub fn load_posts_with_drafts(posts_root: &Path) -> Result<Library, IoError> {
    load(posts_root, true)
}

fn load(posts_root: &Path, include_drafts: bool) -> Result<Library, IoError> {
    validate_posts_dir(posts_root)?;

    let mut entries = Vec::new();
    let mut issues = Vec::new();

    for path in scan_post_files(posts_root)? {
        match load_entry(&path) {
            Ok(post) => entries.push((path, post)),
            Err(reason) => {
                let issue = LoadIssue { path, reason };
                log::warn!("Skipping {issue}");
                issues.push(issue);
            }
        }
    }

    log::info!(
        "Loaded {} posts from {} ({} skipped)",
        entries.len(),
        posts_root.display(),
        issues.len()
    );
    Ok(Library::build(entries, issues, include_drafts))
}

fn load_entry(path: &Path) -> Result<Post, IssueReason> {
    let content = fs::read_to_string(path).map_err(IssueReason::Unreadable)?;
    let raw: Value = serde_json::from_str(&content).map_err(IssueReason::Json)?;
    parse_post(&raw).map_err(IssueReason::Invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{BlockKind, ContentBlock};
    use crate::tests::{create_test_file, create_test_posts_dir, post_json};

    #[test]
    fn test_scan_finds_only_json() {
        let posts_dir = create_test_posts_dir();
        create_test_file(&posts_dir, "a.json", "{}");
        create_test_file(&posts_dir, "notes.md", "# not a post");
        create_test_file(&posts_dir, "nested/b.json", "{}");

        let files = scan_post_files(posts_dir.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.ends_with("a.json")));
        assert!(files.iter().any(|f| f.ends_with("nested/b.json")));
    }

    #[test]
    fn test_scan_invalid_directory() {
        let result = scan_post_files(Path::new("/this/path/does/not/exist"));
        assert!(matches!(result, Err(IoError::InvalidPostsDir(_))));
    }

    #[test]
    fn test_validate_posts_dir() {
        let posts_dir = create_test_posts_dir();
        assert!(validate_posts_dir(posts_dir.path()).is_ok());

        let file = create_test_file(&posts_dir, "file.json", "{}");
        assert!(validate_posts_dir(&file).is_err());
    }

    #[test]
    fn test_read_post_success() {
        let posts_dir = create_test_posts_dir();
        create_test_file(&posts_dir, "hello.json", &post_json("hello", "2025-01-01", true));

        let post = read_post(RelativePath::new("hello.json"), posts_dir.path()).unwrap();
        assert_eq!(post.slug, "hello");
    }

    #[test]
    fn test_read_post_not_found() {
        let posts_dir = create_test_posts_dir();
        let result = read_post(RelativePath::new("missing.json"), posts_dir.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_read_post_reports_schema_path() {
        let posts_dir = create_test_posts_dir();
        create_test_file(&posts_dir, "bad.json", r#"{"id": "x"}"#);

        let err = read_post(RelativePath::new("bad.json"), posts_dir.path()).unwrap_err();
        let IoError::Invalid { source, .. } = err else {
            panic!("expected schema error, got {err:?}");
        };
        assert_eq!(source.path.to_string(), "slug");
    }

    #[test]
    fn test_read_post_bad_json() {
        let posts_dir = create_test_posts_dir();
        create_test_file(&posts_dir, "broken.json", "{ nope");
        let result = read_post(RelativePath::new("broken.json"), posts_dir.path());
        assert!(matches!(result, Err(IoError::Json { .. })));
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let posts_dir = create_test_posts_dir();
        create_test_file(&posts_dir, "src.json", &post_json("hello", "2025-01-01", true));
        let mut post = read_post(RelativePath::new("src.json"), posts_dir.path()).unwrap();
        post.content.push(ContentBlock::new(BlockKind::Code {
            code: "cargo run".into(),
            language: "sh".into(),
            file_name: None,
        }));

        let target = RelativePath::new("drafts/2025/hello.json");
        write_post(target, posts_dir.path(), &post).unwrap();

        let reread = read_post(target, posts_dir.path()).unwrap();
        assert_eq!(reread, post);
    }

    #[test]
    fn test_load_posts_isolates_failures() {
        let posts_dir = create_test_posts_dir();
        create_test_file(&posts_dir, "a.json", &post_json("a", "2025-01-01", true));
        create_test_file(&posts_dir, "b.json", "{ not json");
        create_test_file(&posts_dir, "c.json", r#"{"id": "c"}"#);
        create_test_file(&posts_dir, "d.json", &post_json("d", "2025-03-01", true));
        create_test_file(&posts_dir, "e.json", &post_json("e", "2025-05-01", false));

        let library = load_posts(posts_dir.path()).unwrap();

        let slugs: Vec<_> = library.listing().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["d", "a"]);
        assert_eq!(library.issues().len(), 2);
        assert!(matches!(library.issues()[0].reason, IssueReason::Json(_)));
        assert!(matches!(library.issues()[1].reason, IssueReason::Invalid(_)));
    }

    #[test]
    fn test_load_posts_with_drafts() {
        let posts_dir = create_test_posts_dir();
        create_test_file(&posts_dir, "a.json", &post_json("a", "2025-01-01", true));
        create_test_file(&posts_dir, "e.json", &post_json("e", "2025-05-01", false));

        let library = load_posts_with_drafts(posts_dir.path()).unwrap();

        let slugs: Vec<_> = library.listing().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["e", "a"]);
    }

    #[test]
    fn test_load_posts_missing_dir() {
        let result = load_posts(Path::new("/nonexistent/posts"));
        assert!(matches!(result, Err(IoError::InvalidPostsDir(_))));
    }
}
