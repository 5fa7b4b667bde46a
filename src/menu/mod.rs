//! Menu tree
//!
//! `MenuTree` owns the ordered item sequence of one named menu together with
//! its group scope. It is built, queried, activated and rendered within a
//! single request; nothing persists across requests.
//!
//! ## Structure
//!
//! - `mod.rs` - Registration, groups, dividers, metadata cascade, URL dispatch
//! - `query.rs` - Lookups, filtering and sorting
//! - `activation.rs` - Manual, pattern and automatic activation
//! - `render.rs` - Nested markup output
//! - `item_mut.rs` - Chaining handle returned by `push`
//! - `collection.rs` - Batch operations over a selection of items

mod activation;
mod collection;
mod item_mut;
mod query;
mod render;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::config::MenuConfig;
use crate::domain::entities::{divider_attributes, DividerOrder, Item, ItemOptions, LinkPath};
use crate::domain::ports::{RequestContext, UrlResolver};
use crate::domain::services::{is_absolute_url, Group, GroupScope};
use crate::domain::value_objects::{Attributes, ItemId};
use crate::error::{MenuError, MenuResult};
use crate::infrastructure::BaseUrlResolver;

pub use collection::ItemCollection;
pub use item_mut::ItemMut;
pub use query::SortDirection;

/// A named navigation menu
pub struct MenuTree {
    name: String,
    config: MenuConfig,
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
    groups: GroupScope,
    urls: Arc<dyn UrlResolver>,
    request: Option<Arc<dyn RequestContext>>,
}

impl fmt::Debug for MenuTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuTree")
            .field("name", &self.name)
            .field("config", &self.config)
            .field("items", &self.items)
            .field("groups", &self.groups)
            .field("has_request", &self.request.is_some())
            .finish()
    }
}

impl MenuTree {
    /// Create an empty menu resolving root-relative URLs, with no request
    /// attached (nothing auto-activates until one is).
    pub fn new(name: impl Into<String>, config: MenuConfig) -> Self {
        Self {
            name: name.into(),
            config,
            items: Vec::new(),
            index: HashMap::new(),
            groups: GroupScope::new(),
            urls: Arc::new(BaseUrlResolver::default()),
            request: None,
        }
    }

    pub fn with_url_resolver(mut self, urls: Arc<dyn UrlResolver>) -> Self {
        self.urls = urls;
        self
    }

    /// Attach the request used for pattern and automatic activation
    pub fn with_request(mut self, request: Arc<dyn RequestContext>) -> Self {
        self.request = Some(request);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Register a navigable item.
    ///
    /// The id comes from the options or is generated. Attributes are resolved
    /// against the active group scope, and the item auto-activates when
    /// configured to and a request is attached.
    pub fn push(
        &mut self,
        title: impl Into<String>,
        options: impl Into<ItemOptions>,
    ) -> MenuResult<ItemMut<'_>> {
        let pos = self.insert(title.into(), options.into())?;
        Ok(ItemMut::new(self, pos))
    }

    /// Register non-navigable content; any URL in the options is ignored.
    pub fn raw(
        &mut self,
        title: impl Into<String>,
        options: impl Into<ItemOptions>,
    ) -> MenuResult<ItemMut<'_>> {
        let options = options.into().with_raw(true);
        let pos = self.insert(title.into(), options)?;
        Ok(ItemMut::new(self, pos))
    }

    fn insert(&mut self, title: String, options: ItemOptions) -> MenuResult<usize> {
        let id = match options.id.clone() {
            Some(id) if self.index.contains_key(&id) => {
                return Err(MenuError::DuplicateId { id });
            }
            Some(id) => id,
            None => self.generate_id(),
        };
        if let Some(parent) = &options.parent {
            if !self.index.contains_key(parent) {
                return Err(MenuError::UnknownParent {
                    parent: parent.clone(),
                });
            }
        }

        let attributes = self.groups.extract_attributes(&options.attributes);
        let prefix = self.groups.current_prefix().map(String::from);
        let item = Item::new(id.clone(), title, options, attributes, prefix);

        let pos = self.items.len();
        self.items.push(item);
        self.index.insert(id, pos);

        if self.config.activate.auto {
            self.auto_activate(pos);
        }
        Ok(pos)
    }

    fn generate_id(&self) -> ItemId {
        loop {
            let id = ItemId::generate();
            if !self.index.contains_key(&id) {
                return id;
            }
        }
    }

    /// Run `block` with `group` pushed onto the scope.
    ///
    /// The scope is popped when the block returns, including on an early
    /// `?` return or a panic inside the block.
    pub fn group<F, T>(&mut self, group: impl Into<Group>, block: F) -> T
    where
        F: FnOnce(&mut MenuTree) -> T,
    {
        self.groups.push(group.into());
        let mut guard = GroupGuard { tree: self };
        block(&mut *guard.tree)
    }

    /// Prefix that items pushed right now would capture
    pub fn current_prefix(&self) -> Option<&str> {
        self.groups.current_prefix()
    }

    /// Attach a divider after the last item (caller classes, then `divider`).
    pub fn divide(&mut self, attrs: Attributes) -> MenuResult<&mut Self> {
        let last = self.items.last_mut().ok_or(MenuError::EmptyMenu)?;
        last.set_divider(divider_attributes(attrs, DividerOrder::CallerFirst));
        Ok(self)
    }

    /// Set one metadata value on an item, cascading to every descendant when
    /// inheritance is enabled.
    pub fn set_data(
        &mut self,
        id: &ItemId,
        key: &str,
        value: impl Into<Value>,
    ) -> MenuResult<&mut Self> {
        let pos = self.position(id)?;
        self.set_data_at(pos, key, value.into());
        Ok(self)
    }

    pub(crate) fn set_data_at(&mut self, pos: usize, key: &str, value: Value) {
        self.items[pos].insert_data(key, value.clone());
        if !self.config.inheritance {
            return;
        }

        let mut pending = vec![self.items[pos].id().clone()];
        while let Some(parent) = pending.pop() {
            let children: Vec<usize> = self.child_positions(&parent);
            if !children.is_empty() {
                debug!(parent = %parent, key, children = children.len(), "cascading item data");
            }
            for child in children {
                self.items[child].insert_data(key, value.clone());
                pending.push(self.items[child].id().clone());
            }
        }
    }

    /// Resolved URL of an item: its explicit href, else its link path
    /// dispatched through the URL resolver. `None` for raw items.
    pub fn url(&self, item: &Item) -> Option<String> {
        let link = item.link()?;
        match link.href() {
            Some(href) => Some(href.to_string()),
            None => Some(self.dispatch(link.path())),
        }
    }

    fn dispatch(&self, path: &LinkPath) -> String {
        let (base, params) = match path.url() {
            Some(url) => (Some(url.base()), url.params()),
            None => (None, &[][..]),
        };
        if let Some(base) = base {
            if is_absolute_url(base) {
                return base.to_string();
            }
        }

        let mut target = path.prefix().unwrap_or_default().to_string();
        if let Some(base) = base {
            target.push('/');
            target.push_str(base.trim_matches('/'));
        }
        self.urls.to(&target, params, path.is_secure())
    }

    pub(crate) fn position(&self, id: &ItemId) -> MenuResult<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| MenuError::UnknownItem { id: id.clone() })
    }

    fn child_positions(&self, parent: &ItemId) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.parent() == Some(parent))
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Rebuild the id index after the sequence was replaced or reordered.
    fn reindex(&mut self) {
        self.index.clear();
        for (pos, item) in self.items.iter().enumerate() {
            self.index.entry(item.id().clone()).or_insert(pos);
        }
    }
}

/// Pops the group scope when dropped
struct GroupGuard<'a> {
    tree: &'a mut MenuTree,
}

impl Drop for GroupGuard<'_> {
    fn drop(&mut self) {
        self.tree.groups.pop();
    }
}
