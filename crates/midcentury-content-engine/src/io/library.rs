use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::schema::{Post, ValidationError};

/// Why a stored post was left out of a [`Library`].
#[derive(Debug, thiserror::Error)]
pub enum IssueReason {
    #[error("could not read file: {0}")]
    Unreadable(#[source] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[source] serde_json::Error),
    #[error("invalid post: {0}")]
    Invalid(#[source] ValidationError),
    #[error("duplicate slug {slug:?}, already used by {}", .first.display())]
    DuplicateSlug { slug: String, first: PathBuf },
}

#[derive(Debug, thiserror::Error)]
#[error("{}: {reason}", .path.display())]
pub struct LoadIssue {
    pub path: PathBuf,
    pub reason: IssueReason,
}

/// The loaded, listable set of posts.
///
/// Holds posts with unique slugs, newest first. Unless built with drafts,
/// only published posts are kept.
#[derive(Debug, Default)]
pub struct Library {
    posts: Vec<Post>,
    issues: Vec<LoadIssue>,
}

impl Library {
    /// Builds a library from posts in discovery order. Unless drafts are kept,
    /// unpublished posts are dropped first, so a draft never takes a slug from
    /// a published post. The first remaining post to claim a slug keeps it;
    /// later ones become issues.
    pub fn build(
        entries: Vec<(PathBuf, Post)>,
        mut issues: Vec<LoadIssue>,
        include_drafts: bool,
    ) -> Self {
        let mut owners: HashMap<String, PathBuf> = HashMap::new();
        let mut posts = Vec::with_capacity(entries.len());

        let listed = entries
            .into_iter()
            .filter(|(_, post)| include_drafts || post.published);

        for (path, post) in listed {
            if let Some(first) = owners.get(&post.slug) {
                let issue = LoadIssue {
                    path,
                    reason: IssueReason::DuplicateSlug {
                        slug: post.slug.clone(),
                        first: first.clone(),
                    },
                };
                log::warn!("Skipping {issue}");
                issues.push(issue);
                continue;
            }
            owners.insert(post.slug.clone(), path);
            posts.push(post);
        }

        Self {
            posts: sort_newest_first(posts),
            issues,
        }
    }

    /// Posts in listing order.
    pub fn listing(&self) -> &[Post] {
        &self.posts
    }

    /// The newest featured post, if any.
    pub fn featured(&self) -> Option<&Post> {
        self.posts.iter().find(|post| post.featured)
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.slug == slug)
    }

    pub fn issues(&self) -> &[LoadIssue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Stable sort by `metadata.date`, newest first. Posts whose date cannot be
/// read go after every dated post and keep their relative order.
pub fn sort_newest_first(mut posts: Vec<Post>) -> Vec<Post> {
    posts.sort_by(|a, b| {
        match (date_key(&a.metadata.date), date_key(&b.metadata.date)) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
    posts
}

/// Reads a metadata date written as RFC 3339, `YYYY-MM-DD` or `Month D, YYYY`.
pub fn date_key(date: &str) -> Option<NaiveDateTime> {
    let date = date.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(date) {
        return Some(timestamp.naive_utc());
    }
    ["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date, format).ok())
        .and_then(|day| day.and_hms_opt(0, 0, 0))
}
