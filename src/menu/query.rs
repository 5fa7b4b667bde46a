//! Lookups, filtering and sorting

use std::cmp::Ordering;
use std::collections::HashSet;

use serde_json::Value;

use super::MenuTree;
use crate::domain::entities::Item;
use crate::domain::value_objects::ItemId;

/// Sort order for `MenuTree::sort_by`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl MenuTree {
    /// Items whose parent is `parent` (roots for `None`), in sequence order.
    pub fn where_parent(&self, parent: Option<&ItemId>) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.parent() == parent)
            .collect()
    }

    /// Items whose field `name` (declared field, else metadata) equals `value`.
    ///
    /// With `recursive`, every match is followed by the items whose `name`
    /// field equals the match's own id, depth first. That yields all
    /// descendants when `name` is `"parent"`; for other fields it descends by
    /// comparing that field against ids, which is rarely meaningful. Results
    /// are not deduplicated.
    pub fn where_attribute(&self, name: &str, value: &Value, recursive: bool) -> Vec<&Item> {
        if !recursive {
            return self
                .items
                .iter()
                .filter(|item| item.field(name).as_ref() == Some(value))
                .collect();
        }

        let mut found = Vec::new();
        let mut expanding = HashSet::new();
        self.collect_recursive(name, value, &mut expanding, &mut found);
        found
    }

    fn collect_recursive<'a>(
        &'a self,
        name: &str,
        value: &Value,
        expanding: &mut HashSet<&'a ItemId>,
        found: &mut Vec<&'a Item>,
    ) {
        for item in &self.items {
            if item.field(name).as_ref() != Some(value) {
                continue;
            }
            found.push(item);
            if !self.has_children(item.id()) {
                continue;
            }
            if !expanding.insert(item.id()) {
                tracing::warn!(id = %item.id(), field = name, "cycle while descending items");
                continue;
            }
            let next = Value::String(item.id().to_string());
            self.collect_recursive(name, &next, expanding, found);
            expanding.remove(item.id());
        }
    }

    /// Items without a parent
    pub fn roots(&self) -> Vec<&Item> {
        self.where_parent(None)
    }

    /// Direct children of `id`
    pub fn children(&self, id: &ItemId) -> Vec<&Item> {
        self.where_parent(Some(id))
    }

    /// All descendants of `id`, depth first
    pub fn descendants(&self, id: &ItemId) -> Vec<&Item> {
        self.where_attribute("parent", &Value::String(id.to_string()), true)
    }

    pub fn has_children(&self, id: &ItemId) -> bool {
        self.items.iter().any(|item| item.parent() == Some(id))
    }

    /// First item with this nickname
    pub fn get(&self, nickname: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.nickname() == nickname)
    }

    /// Alias of `get`
    pub fn item(&self, nickname: &str) -> Option<&Item> {
        self.get(nickname)
    }

    pub fn find(&self, id: &ItemId) -> Option<&Item> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    pub fn first(&self) -> Option<&Item> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&Item> {
        self.items.last()
    }

    pub fn all(&self) -> &[Item] {
        &self.items
    }

    /// Keep only the items matching `predicate`
    pub fn filter<F>(&mut self, mut predicate: F) -> &mut Self
    where
        F: FnMut(&Item) -> bool,
    {
        self.items.retain(|item| predicate(item));
        self.reindex();
        self
    }

    /// Stable sort by a field; equal values keep their relative order.
    ///
    /// Values of different kinds order as null, bool, number, string, array,
    /// object. Items lacking the field sort as null.
    pub fn sort_by(&mut self, field: &str, direction: SortDirection) -> &mut Self {
        self.items.sort_by(|a, b| {
            let a = a.field(field).unwrap_or(Value::Null);
            let b = b.field(field).unwrap_or(Value::Null);
            match direction {
                SortDirection::Ascending => compare_values(&a, &b),
                SortDirection::Descending => compare_values(&b, &a),
            }
        });
        self.reindex();
        self
    }

    /// Replace the sequence with whatever `reorder` returns for it.
    ///
    /// `reorder` may return any iterable of items, so a single item can be
    /// returned as `Some(item)`.
    pub fn reorder_with<F, I>(&mut self, reorder: F) -> &mut Self
    where
        F: FnOnce(Vec<Item>) -> I,
        I: IntoIterator<Item = Item>,
    {
        let items = std::mem::take(&mut self.items);
        self.items = reorder(items).into_iter().collect();
        self.reindex();
        self
    }
}

/// Total order over JSON values used for sorting
pub(crate) fn compare_values(a: &Value, b: &Value) -> Ordering {
    fn rank(v: &Value) -> u8 {
        match v {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            Value::Array(_) => 4,
            Value::Object(_) => 5,
        }
    }

    match (a, b) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => {
            let (a, b) = (a.as_f64().unwrap_or(0.0), b.as_f64().unwrap_or(0.0));
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Array(a), Value::Array(b)) => a.len().cmp(&b.len()),
        (Value::Object(a), Value::Object(b)) => a.len().cmp(&b.len()),
        _ => rank(a).cmp(&rank(b)),
    }
}
