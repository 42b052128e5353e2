use url::Url;

/// Characters that must be percent-encoded in a URL; seeing one raw means the
/// value was never a well-formed URL.
const UNENCODED: &[char] = &['"', '<', '>', '\\', '^', '`', '{', '|', '}'];

/// Returns true for a well-formed absolute URL: a scheme, `://`, a non-empty
/// host and nothing that would need escaping.
pub fn is_absolute_url(candidate: &str) -> bool {
    if candidate
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || UNENCODED.contains(&c))
    {
        return false;
    }
    // The parser tolerates `https:///host`; the stored form must name the host directly.
    let names_host = candidate
        .split_once("://")
        .is_some_and(|(_, rest)| !rest.is_empty() && !rest.starts_with('/'));
    names_host && Url::parse(candidate).is_ok_and(|url| url.has_host())
}
