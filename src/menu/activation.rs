//! Item activation
//!
//! Activation marks an item (or its link, per `activate.element`) as
//! representing the current request and, with `activate.parents`, climbs the
//! parent chain doing the same. It is one-way: nothing deactivates an item.

use tracing::{debug, trace, warn};

use super::MenuTree;
use crate::config::ActivateElement;
use crate::domain::services::{matches_pattern, restful_match, strip_rest_base, url_path};
use crate::domain::value_objects::ItemId;
use crate::error::MenuResult;

impl MenuTree {
    /// Activate an item and, when enabled, each of its ancestors.
    pub fn activate(&mut self, id: &ItemId) -> MenuResult<&mut Self> {
        let pos = self.position(id)?;
        self.activate_at(pos);
        Ok(self)
    }

    pub(crate) fn activate_at(&mut self, pos: usize) {
        let class = self.config.activate.class.clone();
        let element = self.config.activate.element;
        let cascade = self.config.activate.parents;

        let mut current = Some(pos);
        while let Some(pos) = current {
            let item = &mut self.items[pos];
            // raw items have no link and take the state themselves
            if element == ActivateElement::Link && !item.is_raw() {
                if let Some(link) = item.link_mut() {
                    link.mark_active(&class);
                }
            } else {
                item.mark_active(&class);
            }
            debug!(id = %item.id(), element = ?element, "item activated");

            current = match item.parent() {
                Some(parent) if cascade => match self.index.get(parent) {
                    Some(&parent_pos) => Some(parent_pos),
                    None => {
                        warn!(parent = %parent, "activation stopped at missing parent");
                        None
                    }
                },
                _ => None,
            };
        }
    }

    /// Activate the item when `pattern` matches the current request path.
    ///
    /// A trailing `/*` matches the path itself or any sub-path. Returns
    /// whether the item was activated; without a request nothing matches.
    pub fn active(&mut self, id: &ItemId, pattern: &str) -> MenuResult<bool> {
        let pos = self.position(id)?;
        self.active_at(pos, pattern)
    }

    pub(crate) fn active_at(&mut self, pos: usize, pattern: &str) -> MenuResult<bool> {
        let Some(request) = &self.request else {
            return Ok(false);
        };
        let matched = matches_pattern(pattern, &request.current_path())?;
        if matched {
            self.activate_at(pos);
        }
        Ok(matched)
    }

    /// Activate a freshly pushed item if it represents the current request.
    pub(crate) fn auto_activate(&mut self, pos: usize) {
        let Some(request) = self.request.clone() else {
            return;
        };
        let item = &self.items[pos];
        let Some(url) = self.url(item) else {
            return;
        };

        let matched = if self.config.restful {
            let bases = self.config.rest_base.bases();
            let item_path = url_path(&url);
            let item_path = item_path.trim_start_matches('/');
            let current = request.current_path();
            let request_path = current.trim_start_matches('/');
            restful_match(
                strip_rest_base(item_path, &bases),
                strip_rest_base(request_path, &bases),
            )
        } else {
            url == request.current_url()
        };

        trace!(id = %item.id(), url = %url, matched, "auto-activation check");
        if matched {
            self.activate_at(pos);
        }
    }
}
