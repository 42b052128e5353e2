use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary posts directory
pub fn create_test_posts_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a file (and any parent folders) under the posts directory
pub fn create_test_file(posts_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = posts_dir.path().join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}

/// A minimal valid stored post
pub fn post_json(slug: &str, date: &str, published: bool) -> String {
    serde_json::json!({
        "id": format!("id-{slug}"),
        "slug": slug,
        "published": published,
        "metadata": {
            "title": format!("Post {slug}"),
            "description": "A post",
            "date": date,
            "author": "Midcentury Labs"
        },
        "content": [
            { "type": "title", "text": format!("Post {slug}") },
            { "type": "paragraph", "text": "Hello <b>world</b>" }
        ]
    })
    .to_string()
}
