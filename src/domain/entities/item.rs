//! Item entity
//!
//! One node of a menu tree. The parent is a plain id; the tree owns all
//! items and resolves parent/child relationships through it.

use serde_json::Value;

use super::link::{Link, LinkPath};
use super::options::ItemOptions;
use crate::domain::services::{camel_case, merge_classes, slugify};
use crate::domain::value_objects::{Attributes, ItemId, Metadata};

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: ItemId,
    title: String,
    slug: String,
    nickname: String,
    parent: Option<ItemId>,
    attributes: Attributes,
    metadata: Metadata,
    divider: Option<Attributes>,
    link: Option<Link>,
    is_active: bool,
}

impl Item {
    /// Build an item from its options.
    ///
    /// `attributes` are the already-resolved container attributes (group
    /// overlay merged, reserved keys stripped); `prefix` is the enclosing
    /// group's prefix, captured into the link path.
    pub(crate) fn new(
        id: ItemId,
        title: String,
        options: ItemOptions,
        attributes: Attributes,
        prefix: Option<String>,
    ) -> Self {
        let slug = options.slug.unwrap_or_else(|| slugify(&title));
        let nickname = options.nickname.unwrap_or_else(|| camel_case(&slug));
        let link = if options.raw {
            None
        } else {
            Some(Link::new(LinkPath::new(options.url, options.secure, prefix)))
        };

        Self {
            id,
            title,
            slug,
            nickname,
            parent: options.parent,
            attributes,
            metadata: Metadata::new(),
            divider: None,
            link,
            is_active: false,
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Append text or markup to the title
    pub fn append(&mut self, html: &str) {
        self.title.push_str(html);
    }

    /// Prepend text or markup to the title
    pub fn prepend(&mut self, html: &str) {
        self.title.insert_str(0, html);
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn set_slug(&mut self, slug: impl Into<String>) {
        self.slug = slug.into();
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn set_nickname(&mut self, nickname: impl Into<String>) {
        self.nickname = nickname.into();
    }

    pub fn parent(&self) -> Option<&ItemId> {
        self.parent.as_ref()
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

    /// Overlay a map onto the attributes (keys in `attrs` win)
    pub fn merge_attrs(&mut self, attrs: &Attributes) {
        self.attributes.extend(attrs);
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn data(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    /// Set one metadata value on this item only; the tree handles cascading.
    pub(crate) fn insert_data(&mut self, key: &str, value: Value) {
        self.metadata.insert(key, value);
    }

    pub fn divider(&self) -> Option<&Attributes> {
        self.divider.as_ref()
    }

    /// Set a separator rendered right after this item. The `divider` class
    /// comes first, followed by any classes in `attrs`.
    pub fn divide(&mut self, attrs: Attributes) {
        self.divider = Some(divider_attributes(attrs, DividerOrder::DividerFirst));
    }

    pub(crate) fn set_divider(&mut self, divider: Attributes) {
        self.divider = Some(divider);
    }

    pub fn link(&self) -> Option<&Link> {
        self.link.as_ref()
    }

    pub fn link_mut(&mut self) -> Option<&mut Link> {
        self.link.as_mut()
    }

    /// Raw items carry content but no link
    pub fn is_raw(&self) -> bool {
        self.link.is_none()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Mark this item active and add `class` to its container.
    pub(crate) fn mark_active(&mut self, class: &str) {
        if let Some(merged) = merge_classes(self.attributes.class(), Some(class)) {
            self.attributes.set(Attributes::CLASS, merged);
        }
        self.is_active = true;
    }

    /// Look up a field by name: declared fields first, then metadata.
    ///
    /// Declared fields are `id`, `title`, `slug`, `nickname`, `parent` (null
    /// for roots) and `is_active`. Returns `None` when the name is neither a
    /// declared field nor a metadata key.
    pub fn field(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(Value::String(self.id.to_string())),
            "title" => Some(Value::String(self.title.clone())),
            "slug" => Some(Value::String(self.slug.clone())),
            "nickname" => Some(Value::String(self.nickname.clone())),
            "parent" => Some(
                self.parent
                    .as_ref()
                    .map(|p| Value::String(p.to_string()))
                    .unwrap_or(Value::Null),
            ),
            "is_active" | "isActive" | "isactive" => Some(Value::Bool(self.is_active)),
            _ => self.metadata.get(name).cloned(),
        }
    }
}

/// Which class list comes first when building divider attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DividerOrder {
    /// `divider` then caller classes (item-level divide)
    DividerFirst,
    /// caller classes then `divider` (tree-level divide on the last item)
    CallerFirst,
}

pub(crate) fn divider_attributes(mut attrs: Attributes, order: DividerOrder) -> Attributes {
    const DIVIDER: &str = "divider";
    let class = match order {
        DividerOrder::DividerFirst => merge_classes(Some(DIVIDER), attrs.class()),
        DividerOrder::CallerFirst => merge_classes(attrs.class(), Some(DIVIDER)),
    };
    if let Some(class) = class {
        attrs.set(Attributes::CLASS, class);
    }
    attrs
}
