//! Named menu registry
//!
//! Keeps one `MenuTree` per name, each created with the configuration the
//! provider returns for that name and sharing the registry's URL resolver
//! and request.

use std::sync::Arc;

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::domain::ports::{ConfigProvider, RequestContext, UrlResolver};
use crate::error::MenuResult;
use crate::infrastructure::{BaseUrlResolver, TomlConfigProvider};
use crate::menu::MenuTree;

pub struct MenuRegistry {
    provider: Arc<dyn ConfigProvider>,
    urls: Arc<dyn UrlResolver>,
    request: Option<Arc<dyn RequestContext>>,
    menus: IndexMap<String, MenuTree>,
}

impl Default for MenuRegistry {
    fn default() -> Self {
        Self::new(Arc::new(TomlConfigProvider::default()))
    }
}

impl MenuRegistry {
    pub fn new(provider: Arc<dyn ConfigProvider>) -> Self {
        Self {
            provider,
            urls: Arc::new(BaseUrlResolver::default()),
            request: None,
            menus: IndexMap::new(),
        }
    }

    pub fn with_url_resolver(mut self, urls: Arc<dyn UrlResolver>) -> Self {
        self.urls = urls;
        self
    }

    pub fn with_request(mut self, request: Arc<dyn RequestContext>) -> Self {
        self.request = Some(request);
        self
    }

    /// Create the named menu if needed, then run `build` on it.
    ///
    /// Calling this again for the same name extends the existing menu.
    pub fn menu<F>(&mut self, name: &str, build: F) -> MenuResult<&mut MenuTree>
    where
        F: FnOnce(&mut MenuTree) -> MenuResult<()>,
    {
        let tree = match self.menus.entry(name.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                tracing::debug!(menu = name, "creating menu");
                let tree = MenuTree::new(name, self.provider.get(name))
                    .with_url_resolver(self.urls.clone());
                entry.insert(match &self.request {
                    Some(request) => tree.with_request(request.clone()),
                    None => tree,
                })
            }
        };
        build(&mut *tree)?;
        Ok(tree)
    }

    pub fn get(&self, name: &str) -> Option<&MenuTree> {
        self.menus.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut MenuTree> {
        self.menus.get_mut(name)
    }

    /// Registered menu names, in creation order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.menus.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }
}
