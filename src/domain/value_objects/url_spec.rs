//! Link target value object
//!
//! A target is either a single path (`"about"`, `"/users"`,
//! `"https://example.com"`) or a base path followed by path parameters
//! (`["users", "42", "edit"]`).

/// Navigable target of a link before URL resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlSpec {
    /// A single relative or absolute path
    Path(String),
    /// A base path plus parameters appended as path segments
    Segments { base: String, params: Vec<String> },
}

impl UrlSpec {
    pub fn path(path: impl Into<String>) -> Self {
        UrlSpec::Path(path.into())
    }

    pub fn segments<I, S>(base: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        UrlSpec::Segments {
            base: base.into(),
            params: params.into_iter().map(|p| p.to_string()).collect(),
        }
    }

    /// The path part (first element for segmented targets)
    pub fn base(&self) -> &str {
        match self {
            UrlSpec::Path(path) => path,
            UrlSpec::Segments { base, .. } => base,
        }
    }

    pub fn params(&self) -> &[String] {
        match self {
            UrlSpec::Path(_) => &[],
            UrlSpec::Segments { params, .. } => params,
        }
    }
}

impl From<&str> for UrlSpec {
    fn from(s: &str) -> Self {
        UrlSpec::Path(s.to_string())
    }
}

impl From<String> for UrlSpec {
    fn from(s: String) -> Self {
        UrlSpec::Path(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_split_base_and_params() {
        let spec = UrlSpec::segments("users", [42, 7]);
        assert_eq!(spec.base(), "users");
        assert_eq!(spec.params(), &["42".to_string(), "7".to_string()]);
    }

    #[test]
    fn plain_path_has_no_params() {
        let spec = UrlSpec::from("about");
        assert_eq!(spec.base(), "about");
        assert!(spec.params().is_empty());
    }
}
