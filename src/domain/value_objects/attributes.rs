//! HTML attribute map
//!
//! An insertion-ordered map of attribute name to value. A value may be
//! absent, in which case the attribute is kept for merging purposes but
//! skipped when serialized. Overlaying keeps the position of keys that
//! already exist and appends new ones, so rendering order is deterministic.

use indexmap::map::Iter;
use indexmap::IndexMap;

/// Ordered HTML attribute map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(IndexMap<String, Option<String>>);

impl Attributes {
    pub const CLASS: &'static str = "class";

    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder-style flag attribute (`disabled`, `hidden`, ...)
    pub fn with_flag(mut self, name: impl Into<String>) -> Self {
        self.flag(name);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), Some(value.into()));
    }

    /// Set a key with an absent value. It is omitted from rendered markup
    /// but still overrides the same key when overlaid onto another map.
    pub fn set_absent(&mut self, key: impl Into<String>) {
        self.0.insert(key.into(), None);
    }

    /// Flag attributes use their name as value: `disabled="disabled"`.
    pub fn flag(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.0.insert(name.clone(), Some(name));
    }

    pub(crate) fn set_optional(&mut self, key: impl Into<String>, value: Option<String>) {
        self.0.insert(key.into(), value);
    }

    /// Value of a key; `None` when missing or absent
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.shift_remove(key).flatten()
    }

    pub fn class(&self) -> Option<&str> {
        self.get(Self::CLASS)
    }

    /// Overlay `other` onto this map: keys in `other` win.
    pub fn extend(&mut self, other: &Attributes) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Copy of this map without the given keys
    pub fn without(&self, keys: &[&str]) -> Attributes {
        Attributes(
            self.0
                .iter()
                .filter(|(k, _)| !keys.contains(&k.as_str()))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    pub fn iter(&self) -> Iter<'_, String, Option<String>> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a Option<String>);
    type IntoIter = Iter<'a, String, Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Attributes(
            iter.into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        )
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
