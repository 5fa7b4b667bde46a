//! Batch operations over a selection of items

use serde_json::Value;

use super::MenuTree;
use crate::domain::entities::Item;
use crate::domain::value_objects::{Attributes, ItemId};

/// A selection of items of one tree, in selection order.
///
/// Each batch operation applies the single-item operation to every member in
/// order; members do not affect one another beyond the usual metadata cascade.
pub struct ItemCollection<'a> {
    tree: &'a mut MenuTree,
    positions: Vec<usize>,
}

impl<'a> ItemCollection<'a> {
    fn new(tree: &'a mut MenuTree, positions: Vec<usize>) -> Self {
        Self { tree, positions }
    }

    pub fn set_attr(&mut self, key: &str, value: &str) -> &mut Self {
        for &pos in &self.positions {
            self.tree.items[pos].set_attr(key, value);
        }
        self
    }

    pub fn merge_attrs(&mut self, attrs: &Attributes) -> &mut Self {
        for &pos in &self.positions {
            self.tree.items[pos].merge_attrs(attrs);
        }
        self
    }

    pub fn set_data(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        for &pos in &self.positions {
            self.tree.set_data_at(pos, key, value.clone());
        }
        self
    }

    pub fn append(&mut self, html: &str) -> &mut Self {
        for &pos in &self.positions {
            self.tree.items[pos].append(html);
        }
        self
    }

    pub fn prepend(&mut self, html: &str) -> &mut Self {
        for &pos in &self.positions {
            self.tree.items[pos].prepend(html);
        }
        self
    }

    pub fn ids(&self) -> Vec<&ItemId> {
        self.positions
            .iter()
            .map(|&pos| self.tree.items[pos].id())
            .collect()
    }

    pub fn items(&self) -> Vec<&Item> {
        self.positions
            .iter()
            .map(|&pos| &self.tree.items[pos])
            .collect()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl MenuTree {
    /// Select items by field value (see `where_attribute`)
    pub fn select_where(
        &mut self,
        name: &str,
        value: &Value,
        recursive: bool,
    ) -> ItemCollection<'_> {
        let ids: Vec<ItemId> = self
            .where_attribute(name, value, recursive)
            .into_iter()
            .map(|item| item.id().clone())
            .collect();
        self.select_ids(&ids)
    }

    /// Select the direct children of `id`
    pub fn select_children(&mut self, id: &ItemId) -> ItemCollection<'_> {
        let positions = self.child_positions(id);
        ItemCollection::new(self, positions)
    }

    pub fn select_roots(&mut self) -> ItemCollection<'_> {
        let positions = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.parent().is_none())
            .map(|(pos, _)| pos)
            .collect();
        ItemCollection::new(self, positions)
    }

    pub fn select_all(&mut self) -> ItemCollection<'_> {
        let positions = (0..self.items.len()).collect();
        ItemCollection::new(self, positions)
    }

    /// Select items matching `predicate`
    pub fn select<F>(&mut self, mut predicate: F) -> ItemCollection<'_>
    where
        F: FnMut(&Item) -> bool,
    {
        let positions = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| predicate(item))
            .map(|(pos, _)| pos)
            .collect();
        ItemCollection::new(self, positions)
    }

    fn select_ids(&mut self, ids: &[ItemId]) -> ItemCollection<'_> {
        let positions = ids
            .iter()
            .filter_map(|id| self.index.get(id).copied())
            .collect();
        ItemCollection::new(self, positions)
    }
}
