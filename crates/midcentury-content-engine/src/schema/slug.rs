use std::sync::OnceLock;

use regex::Regex;

/// Returns true for a slug that is safe as both a URL segment and a file name:
/// ASCII letters, digits, `-` and `_`, not starting with a separator.
pub fn is_valid_slug(candidate: &str) -> bool {
    static SLUG: OnceLock<Regex> = OnceLock::new();
    let regex =
        SLUG.get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").expect("Invalid slug regex"));
    regex.is_match(candidate)
}
