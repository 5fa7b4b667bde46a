//! Domain Value Objects
//!
//! Immutable or self-contained value types shared by entities and services.

mod attributes;
mod item_id;
mod metadata;
mod url_spec;

pub use attributes::Attributes;
pub use item_id::ItemId;
pub use metadata::Metadata;
pub use url_spec::UrlSpec;
