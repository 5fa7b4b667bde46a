//! Domain Services
//!
//! Pure logic used by the menu tree. These services have no I/O
//! dependencies and are easily testable.

pub mod attribute_merger;
pub mod group_scope;
pub mod naming;
pub mod url_match;

pub use attribute_merger::{html_attributes, merge_attributes, merge_classes, serialize};
pub use group_scope::{merge_group, Group, GroupScope, RESERVED_KEYS};
pub use naming::{camel_case, slugify};
pub use url_match::{
    compile_pattern, is_absolute_url, matches_pattern, restful_match, strip_rest_base, url_path,
    url_without_query, PATTERN_SIZE_LIMIT,
};
