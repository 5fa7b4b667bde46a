//! Attribute merger
//!
//! Pure functions composing HTML attribute maps and CSS class lists:
//! - Class lists are unioned: old tokens first, then new ones, first
//!   occurrence wins
//! - Every other key is overridden by the newer map

use crate::domain::value_objects::Attributes;
use crate::escaping::escape_html;

/// Merge two class lists.
///
/// Returns `old` unchanged when `new` is absent. Otherwise tokenizes both on
/// whitespace, keeps old tokens before new ones, drops duplicates (first
/// occurrence keeps its position) and joins with single spaces.
pub fn merge_classes(old: Option<&str>, new: Option<&str>) -> Option<String> {
    let Some(new) = new else {
        return old.map(str::to_string);
    };

    let mut tokens: Vec<&str> = Vec::new();
    for token in old
        .unwrap_or_default()
        .split_whitespace()
        .chain(new.split_whitespace())
    {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    Some(tokens.join(" "))
}

/// Merge `new` over `old`.
///
/// Keys of `old` other than `class` are kept, then overlaid by `new`. The
/// class list is the union computed by [`merge_classes`]; it is left out
/// when neither side has one.
pub fn merge_attributes(new: &Attributes, old: &Attributes) -> Attributes {
    let mut overlay = new.clone();
    match merge_classes(old.class(), new.class()) {
        Some(class) => overlay.set(Attributes::CLASS, class),
        None => {
            overlay.remove(Attributes::CLASS);
        }
    }

    let mut merged = old.without(&[Attributes::CLASS]);
    merged.extend(&overlay);
    merged
}

/// Serialize attributes as ` key="value"` pairs.
///
/// Absent values are skipped. The result starts with a space when anything
/// was written so it can be appended directly after a tag name.
pub fn serialize(attrs: &Attributes) -> String {
    let pairs: Vec<String> = attrs
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .map(|v| format!("{}=\"{}\"", key, escape_html(v)))
        })
        .collect();

    if pairs.is_empty() {
        String::new()
    } else {
        format!(" {}", pairs.join(" "))
    }
}

/// Normalize (dedupe the class list) and serialize a single map.
pub fn html_attributes(attrs: &Attributes) -> String {
    serialize(&merge_attributes(attrs, &Attributes::new()))
}
