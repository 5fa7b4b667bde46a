//! Group scope
//!
//! A stack of attribute/prefix overlays active while items are registered.
//! Pushing merges the new overlay with the current top, so only the top is
//! ever consulted by new registrations.

use tracing::debug;

use super::attribute_merger::merge_classes;
use crate::domain::value_objects::Attributes;

/// Option keys that configure an item's link or position and never reach
/// its HTML attributes.
pub const RESERVED_KEYS: [&str; 5] = ["url", "prefix", "parent", "secure", "raw"];

const PREFIX_KEY: &str = "prefix";

/// One overlay of shared attributes and URL prefix
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    prefix: Option<String>,
    attributes: Attributes,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group whose items resolve their URLs under `prefix`
    pub fn prefixed(prefix: impl Into<String>) -> Self {
        Self::new().with_prefix(prefix)
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(key, value);
        self
    }

    /// Add attributes; a `prefix` key sets the group prefix instead.
    pub fn with_attributes(mut self, mut attributes: Attributes) -> Self {
        if let Some(prefix) = attributes.remove(PREFIX_KEY) {
            self.prefix = Some(prefix);
        }
        self.attributes.extend(&attributes);
        self
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

impl From<Attributes> for Group {
    fn from(attributes: Attributes) -> Self {
        Self::new().with_attributes(attributes)
    }
}

/// Merge `new` over `old` using the group rule.
///
/// The prefix is the old prefix (slashes trimmed) joined with the new one
/// when the new one is non-empty. Classes are unioned. Every other
/// attribute is overridden by `new`.
pub fn merge_group(new: &Group, old: &Group) -> Group {
    Group {
        prefix: Some(format_prefix(new.prefix(), old.prefix())),
        attributes: merge_group_attributes(&new.attributes, &old.attributes),
    }
}

fn format_prefix(new: Option<&str>, old: Option<&str>) -> String {
    let old = old.unwrap_or_default().trim_matches('/');
    match new.map(|p| p.trim_matches('/')) {
        Some(new) if !new.is_empty() => {
            if old.is_empty() {
                // Avoid a leading slash when the outer group has no prefix.
                new.to_string()
            } else {
                format!("{}/{}", old, new)
            }
        }
        _ => old.to_string(),
    }
}

fn merge_group_attributes(new: &Attributes, old: &Attributes) -> Attributes {
    let mut merged = old.without(&[PREFIX_KEY, Attributes::CLASS]);
    merged.extend(new);
    match merge_classes(old.class(), new.class()) {
        Some(class) => merged.set(Attributes::CLASS, class),
        None => {
            merged.remove(Attributes::CLASS);
        }
    }
    merged
}

/// Stack of active group overlays
#[derive(Debug, Clone, Default)]
pub struct GroupScope {
    stack: Vec<Group>,
}

impl GroupScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an overlay, merged with the current top when there is one.
    ///
    /// A first overlay keeps its prefix with surrounding slashes trimmed,
    /// the same form `merge_group` produces for nested ones.
    pub fn push(&mut self, group: Group) {
        let group = match self.stack.last() {
            Some(top) => merge_group(&group, top),
            None => Group {
                prefix: group.prefix.map(|p| p.trim_matches('/').to_string()),
                attributes: group.attributes,
            },
        };
        debug!(depth = self.stack.len() + 1, prefix = ?group.prefix, "group scope pushed");
        self.stack.push(group);
    }

    pub fn pop(&mut self) -> Option<Group> {
        let popped = self.stack.pop();
        debug!(depth = self.stack.len(), "group scope popped");
        popped
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn top(&self) -> Option<&Group> {
        self.stack.last()
    }

    /// Prefix of the top overlay: `None` outside any group, `Some("")` in a
    /// group without prefix.
    pub fn current_prefix(&self) -> Option<&str> {
        self.stack.last().map(|g| g.prefix().unwrap_or_default())
    }

    /// Resolve an item's attributes: merge them onto the top overlay with the
    /// group rule, then strip the reserved option keys.
    pub fn extract_attributes(&self, options: &Attributes) -> Attributes {
        let merged = match self.stack.last() {
            Some(top) => merge_group_attributes(options, &top.attributes),
            None => options.clone(),
        };
        merged.without(&RESERVED_KEYS)
    }
}
