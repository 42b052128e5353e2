pub struct Link;

impl Link {
    pub const HREF: &'static str = "href";
    pub const SAFE_SCHEMES: [&'static str; 3] = ["http://", "https://", "mailto:"];

    /// Returns the trimmed href if it is an allowed target: an http(s) or mailto
    /// URL, a root-relative path or a fragment. Protocol-relative targets
    /// (`//host`, and `/\host` which browsers read the same way), every other
    /// scheme, and hrefs with whitespace or control characters inside are refused.
    pub fn sanitize_href(href: &str) -> Option<String> {
        let href = href.trim();
        if href.is_empty() || href.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return None;
        }
        let lower = href.to_ascii_lowercase();
        let allowed = Self::SAFE_SCHEMES
            .iter()
            .any(|scheme| lower.starts_with(scheme))
            || Self::is_root_relative(href)
            || href.starts_with('#');
        allowed.then(|| href.to_string())
    }

    fn is_root_relative(href: &str) -> bool {
        let mut chars = href.chars();
        chars.next() == Some('/') && !matches!(chars.next(), Some('/' | '\\'))
    }
}
