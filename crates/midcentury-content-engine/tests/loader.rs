use std::path::PathBuf;

use midcentury_content_engine::io::{IssueReason, load_posts, load_posts_with_drafts};
use midcentury_content_engine::schema::ValidationErrorKind;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/posts")
}

#[test]
fn listing_is_published_and_newest_first() {
    let library = load_posts(&fixtures_dir()).unwrap();

    let slugs: Vec<_> = library.listing().iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["introducing-harmoniq", "company-update"]);
    assert_eq!(
        library.featured().map(|p| p.slug.as_str()),
        Some("introducing-harmoniq")
    );
}

#[test]
fn broken_post_is_reported_not_listed() {
    let library = load_posts(&fixtures_dir()).unwrap();

    assert!(library.find_by_slug("broken-block").is_none());
    assert_eq!(library.issues().len(), 1);

    let issue = &library.issues()[0];
    assert!(issue.path.ends_with("broken-block.json"));
    let IssueReason::Invalid(err) = &issue.reason else {
        panic!("expected a schema violation, got {:?}", issue.reason);
    };
    assert_eq!(err.path.to_string(), "content[0].type");
    assert_eq!(
        err.kind,
        ValidationErrorKind::UnknownBlockType {
            tag: "carousel".into()
        }
    );
}

#[test]
fn drafts_view_includes_unpublished() {
    let library = load_posts_with_drafts(&fixtures_dir()).unwrap();

    let slugs: Vec<_> = library.listing().iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(
        slugs,
        vec!["unreleased", "introducing-harmoniq", "company-update"]
    );
}
