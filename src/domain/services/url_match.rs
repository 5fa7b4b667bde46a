//! Request matching for item activation
//!
//! - Glob patterns: `/*` means "this path or any sub-path"; everything else
//!   is matched literally
//! - Restful matching: a request path matches an item path when equal to it
//!   or a sub-path of it, after stripping a configured base segment

use regex::{Regex, RegexBuilder};
use url::{Position, Url};

use crate::error::{MenuError, MenuResult};

/// Upper bound on the compiled size of an activation pattern
pub const PATTERN_SIZE_LIMIT: usize = 64 * 1024;

/// Check whether a URL carries a scheme (`https://...`, `mailto:...`).
pub fn is_absolute_url(url: &str) -> bool {
    Url::parse(url).is_ok()
}

/// Path component of a URL: scheme, authority, query and fragment removed.
///
/// Absolute URLs are parsed, so a bare host yields `/`. Anything else is
/// treated as root-relative and cut at the first `?` or `#`.
pub fn url_path(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => strip_query(url).to_string(),
    }
}

/// A URL without its query and fragment, and without trailing slashes.
///
/// A root-relative URL that reduces to nothing stays `/`.
pub fn url_without_query(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed[..Position::AfterPath].trim_end_matches('/').to_string(),
        Err(_) => match strip_query(url).trim_end_matches('/') {
            "" if url.starts_with('/') => "/".to_string(),
            trimmed => trimmed.to_string(),
        },
    }
}

fn strip_query(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    &url[..end]
}

/// Compile an activation glob into an anchored regex.
///
/// Leading slashes are ignored so patterns match request paths in their
/// slash-less form (`"users/*"` matches `"users"` and `"users/42"`). Every
/// literal piece is escaped, so compilation only fails when the pattern
/// exceeds [`PATTERN_SIZE_LIMIT`].
pub fn compile_pattern(pattern: &str) -> MenuResult<Regex> {
    let body = pattern
        .split("/*")
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("(/.*)?");
    let body = body.trim_start_matches('/');

    RegexBuilder::new(&format!(r"\A{}\z", body))
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()
        .map_err(|source| MenuError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Match a glob pattern against a request path.
pub fn matches_pattern(pattern: &str, request_path: &str) -> MenuResult<bool> {
    let regex = compile_pattern(pattern)?;
    Ok(regex.is_match(request_path.trim_start_matches('/')))
}

/// Strip the first configured base segment (`"api"` strips `"api/"`).
pub fn strip_rest_base<'a>(path: &'a str, bases: &[&str]) -> &'a str {
    bases
        .iter()
        .map(|b| b.trim_matches('/'))
        .filter(|b| !b.is_empty())
        .find_map(|base| path.strip_prefix(base).and_then(|r| r.strip_prefix('/')))
        .unwrap_or(path)
}

/// Restful match: the request path equals the item path or is a non-empty
/// sub-path of it. Both paths are compared without leading slashes.
pub fn restful_match(item_path: &str, request_path: &str) -> bool {
    let item_path = item_path.trim_start_matches('/');
    let request_path = request_path.trim_start_matches('/');

    if request_path == item_path {
        return true;
    }
    request_path
        .strip_prefix(item_path)
        .and_then(|rest| rest.strip_prefix('/'))
        .is_some_and(|rest| !rest.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_have_a_scheme() {
        assert!(is_absolute_url("https://example.com"));
        assert!(is_absolute_url("mailto:team@example.com"));
        assert!(!is_absolute_url("/about"));
        assert!(!is_absolute_url("about"));
        assert!(!is_absolute_url("1http://x"));
    }

    #[test]
    fn url_path_strips_authority_query_and_fragment() {
        assert_eq!(url_path("http://localhost/users/42?tab=1#top"), "/users/42");
        assert_eq!(url_path("http://localhost"), "/");
        assert_eq!(url_path("/about?x=1"), "/about");
    }

    #[test]
    fn url_path_ignores_slashes_in_query() {
        assert_eq!(url_path("http://example.com?next=/admin"), "/");
        assert_eq!(url_path("http://example.com/a?next=/b#/c"), "/a");
        assert_eq!(url_path("/a?next=/b"), "/a");
    }

    #[test]
    fn url_without_query_drops_query_fragment_and_trailing_slash() {
        assert_eq!(
            url_without_query("http://example.com/about?tab=1#top"),
            "http://example.com/about"
        );
        assert_eq!(url_without_query("http://example.com"), "http://example.com");
        assert_eq!(url_without_query("/about/?tab=1"), "/about");
        assert_eq!(url_without_query("/?tab=1"), "/");
    }

    #[test]
    fn oversized_pattern_is_rejected() {
        let pattern = "a".repeat(PATTERN_SIZE_LIMIT * 2);
        let err = matches_pattern(&pattern, "a").unwrap_err();
        assert!(matches!(err, MenuError::InvalidPattern { .. }));
    }

    #[test]
    fn wildcard_matches_path_and_sub_paths() {
        assert!(matches_pattern("users/*", "users").unwrap());
        assert!(matches_pattern("/users/*", "/users/42/edit").unwrap());
        assert!(!matches_pattern("users/*", "usersettings").unwrap());
    }

    #[test]
    fn literal_patterns_are_escaped() {
        assert!(matches_pattern("a.b", "a.b").unwrap());
        assert!(!matches_pattern("a.b", "axb").unwrap());
    }

    #[test]
    fn strip_rest_base_uses_first_matching_base() {
        assert_eq!(strip_rest_base("admin/users", &["api", "admin"]), "users");
        assert_eq!(strip_rest_base("admin", &["admin"]), "admin");
        assert_eq!(strip_rest_base("users", &[""]), "users");
    }

    #[test]
    fn restful_match_equal_or_sub_path() {
        assert!(restful_match("users", "users"));
        assert!(restful_match("/users", "users/42"));
        assert!(!restful_match("users", "users/"));
        assert!(!restful_match("users", "usersettings"));
        assert!(restful_match("", ""));
    }
}
