//! Domain Entities
//!
//! Core objects of a menu tree: items, their links, and the options used
//! to register them.

mod item;
mod link;
mod options;

pub use item::Item;
pub(crate) use item::{divider_attributes, DividerOrder};
pub use link::{Link, LinkPath};
pub use options::ItemOptions;
