//! Fixed request context, for rendering a menu outside a live request.

use crate::domain::ports::RequestContext;
use crate::domain::services::{url_path, url_without_query};

/// A request known up front by its URL.
///
/// `current_url` is the URL without query string, fragment or trailing
/// slash, the form resolved item URLs are compared against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticRequest {
    url: String,
    path: String,
}

impl StaticRequest {
    /// Build from a full (`http://host/a?b`) or root-relative (`/a`) URL.
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let path = url_path(&url);
        let path = if path.starts_with('/') {
            path
        } else {
            format!("/{}", path)
        };
        Self {
            url: url_without_query(&url),
            path,
        }
    }
}

impl RequestContext for StaticRequest {
    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn current_url(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_derived_from_full_url() {
        let request = StaticRequest::new("http://example.com/users/42?tab=posts");
        assert_eq!(request.current_path(), "/users/42");
        assert_eq!(request.current_url(), "http://example.com/users/42");
    }

    #[test]
    fn bare_host_has_root_path() {
        let request = StaticRequest::new("http://example.com");
        assert_eq!(request.current_path(), "/");
        assert_eq!(request.current_url(), "http://example.com");
    }

    #[test]
    fn slash_in_query_is_not_the_path() {
        let request = StaticRequest::new("http://example.com?next=/admin");
        assert_eq!(request.current_path(), "/");
        assert_eq!(request.current_url(), "http://example.com");
    }

    #[test]
    fn relative_url_keeps_its_path() {
        let request = StaticRequest::new("/about?tab=1");
        assert_eq!(request.current_path(), "/about");
        assert_eq!(request.current_url(), "/about");
    }

    #[test]
    fn root_relative_home_stays_slash() {
        let request = StaticRequest::new("/");
        assert_eq!(request.current_path(), "/");
        assert_eq!(request.current_url(), "/");
    }
}
