//! Base-URL resolver - joins paths onto a fixed application root.

use crate::domain::ports::UrlResolver;
use crate::domain::services::is_absolute_url;
use crate::escaping::encode_path_segment;

/// Resolves paths against a root such as `http://example.com`.
///
/// With an empty root, paths resolve to root-relative URLs (`/about`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseUrlResolver {
    root: String,
}

impl BaseUrlResolver {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    fn secure_root(&self) -> String {
        match self.root.strip_prefix("http://") {
            Some(rest) => format!("https://{}", rest),
            None => self.root.clone(),
        }
    }
}

impl UrlResolver for BaseUrlResolver {
    fn to(&self, path: &str, params: &[String], secure: bool) -> String {
        if is_absolute_url(path) {
            return path.to_string();
        }

        let mut segments: Vec<String> = Vec::with_capacity(params.len() + 1);
        let trimmed = path.trim_matches('/');
        if !trimmed.is_empty() {
            segments.push(trimmed.to_string());
        }
        segments.extend(params.iter().map(|p| encode_path_segment(p)));
        let tail = segments.join("/");

        let root = if secure {
            self.secure_root()
        } else {
            self.root.clone()
        };

        match (root.is_empty(), tail.is_empty()) {
            (true, _) => format!("/{}", tail),
            (false, true) => root,
            (false, false) => format!("{}/{}", root, tail),
        }
    }
}
