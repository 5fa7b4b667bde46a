//! Chaining handle for a registered item

use std::ops::Deref;

use serde_json::Value;

use super::MenuTree;
use crate::domain::entities::{Item, ItemOptions};
use crate::domain::services::Group;
use crate::domain::value_objects::{Attributes, ItemId};
use crate::error::MenuResult;

/// Mutable access to one item of a tree.
///
/// Returned by `MenuTree::push` and `MenuTree::raw`. Operations that involve
/// other items (child registration, metadata cascade, activation) go through
/// the tree; plain item fields are readable through `Deref`. Writes go
/// through the methods below so the item keeps its id and index slot.
#[derive(Debug)]
pub struct ItemMut<'a> {
    tree: &'a mut MenuTree,
    pos: usize,
}

impl<'a> ItemMut<'a> {
    pub(crate) fn new(tree: &'a mut MenuTree, pos: usize) -> Self {
        Self { tree, pos }
    }

    /// Look up an existing item by id
    pub fn of(tree: &'a mut MenuTree, id: &ItemId) -> MenuResult<Self> {
        let pos = tree.position(id)?;
        Ok(Self::new(tree, pos))
    }

    pub fn id(&self) -> &ItemId {
        self.tree.items[self.pos].id()
    }

    /// Register a child of this item
    pub fn push(
        &mut self,
        title: impl Into<String>,
        options: impl Into<ItemOptions>,
    ) -> MenuResult<ItemMut<'_>> {
        let options = options.into().with_parent(self.id().clone());
        self.tree.push(title, options)
    }

    /// Register raw content as a child of this item
    pub fn raw(
        &mut self,
        title: impl Into<String>,
        options: impl Into<ItemOptions>,
    ) -> MenuResult<ItemMut<'_>> {
        let options = options.into().with_parent(self.id().clone());
        self.tree.raw(title, options)
    }

    /// Run a group block on the owning tree
    pub fn group<F, T>(&mut self, group: impl Into<Group>, block: F) -> T
    where
        F: FnOnce(&mut MenuTree) -> T,
    {
        self.tree.group(group, block)
    }

    /// Set a divider after this item (`divider`, then caller classes)
    pub fn divide(&mut self, attrs: Attributes) -> &mut Self {
        self.item_mut().divide(attrs);
        self
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.item_mut().set_attr(key, value);
        self
    }

    pub fn merge_attrs(&mut self, attrs: &Attributes) -> &mut Self {
        self.item_mut().merge_attrs(attrs);
        self
    }

    /// Set one metadata value, cascading to descendants when inheritance is on
    pub fn set_data(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.tree.set_data_at(self.pos, key, value.into());
        self
    }

    /// Set several metadata values, each cascading like `set_data`
    pub fn merge_data<I, K, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        for (key, value) in values {
            self.tree.set_data_at(self.pos, key.as_ref(), value.into());
        }
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.item_mut().set_title(title);
        self
    }

    pub fn append(&mut self, html: &str) -> &mut Self {
        self.item_mut().append(html);
        self
    }

    pub fn prepend(&mut self, html: &str) -> &mut Self {
        self.item_mut().prepend(html);
        self
    }

    pub fn set_nickname(&mut self, nickname: impl Into<String>) -> &mut Self {
        self.item_mut().set_nickname(nickname);
        self
    }

    pub fn set_slug(&mut self, slug: impl Into<String>) -> &mut Self {
        self.item_mut().set_slug(slug);
        self
    }

    /// Set an explicit href on the link (no-op for raw items)
    pub fn set_href(&mut self, href: impl Into<String>) -> &mut Self {
        if let Some(link) = self.item_mut().link_mut() {
            link.set_href(href);
        }
        self
    }

    /// Resolve the link with a secure scheme (no-op for raw items)
    pub fn secure(&mut self) -> &mut Self {
        if let Some(link) = self.item_mut().link_mut() {
            link.secure();
        }
        self
    }

    /// Set an attribute on the link (no-op for raw items)
    pub fn set_link_attr(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        if let Some(link) = self.item_mut().link_mut() {
            link.set_attr(key, value);
        }
        self
    }

    /// Activate this item and, when enabled, its ancestors
    pub fn activate(&mut self) -> &mut Self {
        self.tree.activate_at(self.pos);
        self
    }

    /// Activate when `pattern` matches the current request path
    pub fn active(&mut self, pattern: &str) -> MenuResult<&mut Self> {
        self.tree.active_at(self.pos, pattern)?;
        Ok(self)
    }

    pub fn url(&self) -> Option<String> {
        self.tree.url(&self.tree.items[self.pos])
    }

    pub fn children(&self) -> Vec<&Item> {
        self.tree.children(self.id())
    }

    pub fn has_children(&self) -> bool {
        self.tree.has_children(self.id())
    }

    /// All descendants, depth first
    pub fn descendants(&self) -> Vec<&Item> {
        self.tree.descendants(self.id())
    }

    fn item_mut(&mut self) -> &mut Item {
        &mut self.tree.items[self.pos]
    }
}

impl Deref for ItemMut<'_> {
    type Target = Item;

    fn deref(&self) -> &Item {
        &self.tree.items[self.pos]
    }
}
