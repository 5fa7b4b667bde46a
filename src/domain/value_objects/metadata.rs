//! Item metadata bag
//!
//! Arbitrary values attached to an item, separate from its HTML attributes.
//! Keys are case-insensitive: they are lowercased on write and on lookup.

use indexmap::IndexMap;
use serde_json::Value;

/// Case-insensitive metadata map
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata(IndexMap<String, Value>);

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(&key.to_lowercase())
    }

    pub fn insert(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_lowercase(), value);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(&key.to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: AsRef<str>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Metadata::new();
        for (key, value) in iter {
            metadata.insert(key.as_ref(), value.into());
        }
        metadata
    }
}
