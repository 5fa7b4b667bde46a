//! Link entity
//!
//! The navigable target owned by an item. Its attributes and active state
//! apply to the rendered anchor rather than the item's container.

use crate::domain::services::merge_classes;
use crate::domain::value_objects::{Attributes, UrlSpec};

/// Path options captured when the owning item was registered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPath {
    url: Option<UrlSpec>,
    secure: bool,
    prefix: Option<String>,
}

impl LinkPath {
    pub fn new(url: Option<UrlSpec>, secure: bool, prefix: Option<String>) -> Self {
        Self { url, secure, prefix }
    }

    pub fn url(&self) -> Option<&UrlSpec> {
        self.url.as_ref()
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// Prefix of the enclosing group at registration time
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    path: LinkPath,
    href: Option<String>,
    attributes: Attributes,
    is_active: bool,
}

impl Link {
    pub fn new(path: LinkPath) -> Self {
        Self {
            path,
            href: None,
            attributes: Attributes::new(),
            is_active: false,
        }
    }

    pub fn path(&self) -> &LinkPath {
        &self.path
    }

    /// Explicit href; takes precedence over resolving the path
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn set_href(&mut self, href: impl Into<String>) {
        self.href = Some(href.into());
    }

    /// Resolve the path with a secure scheme
    pub fn secure(&mut self) {
        self.path.secure = true;
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key)
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.set(key, value);
    }

    pub fn merge_attrs(&mut self, attrs: &Attributes) {
        self.attributes.extend(attrs);
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub(crate) fn mark_active(&mut self, class: &str) {
        if let Some(merged) = merge_classes(self.attributes.class(), Some(class)) {
            self.attributes.set(Attributes::CLASS, merged);
        }
        self.is_active = true;
    }
}
