//! Registration options for a new item
//!
//! Identity and link options are typed fields; everything added through
//! `with_attr` becomes an HTML attribute of the item's container after the
//! active group overlay is merged in.

use crate::domain::value_objects::{Attributes, ItemId, UrlSpec};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemOptions {
    pub(crate) id: Option<ItemId>,
    pub(crate) url: Option<UrlSpec>,
    pub(crate) secure: bool,
    pub(crate) parent: Option<ItemId>,
    pub(crate) raw: bool,
    pub(crate) slug: Option<String>,
    pub(crate) nickname: Option<String>,
    pub(crate) attributes: Attributes,
}

impl ItemOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<ItemId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<UrlSpec>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn with_parent(mut self, parent: impl Into<ItemId>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Register the item as non-navigable content (no link)
    pub fn with_raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(key, value);
        self
    }

    pub fn with_flag(mut self, name: impl Into<String>) -> Self {
        self.attributes.flag(name);
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes.extend(&attributes);
        self
    }

    pub fn id(&self) -> Option<&ItemId> {
        self.id.as_ref()
    }

    pub fn parent(&self) -> Option<&ItemId> {
        self.parent.as_ref()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// A bare string is the item's URL.
impl From<&str> for ItemOptions {
    fn from(url: &str) -> Self {
        Self::new().with_url(url)
    }
}

impl From<String> for ItemOptions {
    fn from(url: String) -> Self {
        Self::new().with_url(url)
    }
}

impl From<UrlSpec> for ItemOptions {
    fn from(url: UrlSpec) -> Self {
        Self::new().with_url(url)
    }
}
