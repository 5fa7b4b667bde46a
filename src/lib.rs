//! Menus - hierarchical navigation menu builder
//!
//! Register items with titles, targets and attributes, nest them under
//! parents, scope attributes and URL prefixes to groups of items, mark the
//! items that represent the current request, and render the tree as nested
//! markup.
//!
//! ```
//! use menus::{Attributes, MenuConfig, MenuTree};
//!
//! let mut menu = MenuTree::new("main", MenuConfig::default());
//! menu.push("Home", "/").unwrap();
//! assert_eq!(
//!     menu.as_unordered_list(&Attributes::new(), &Attributes::new()),
//!     r#"<ul><li><a href="/">Home</a></li></ul>"#
//! );
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod escaping;
pub mod infrastructure;
pub mod menu;
pub mod registry;

// Re-exports for convenience
pub use config::{ActivateElement, MenuConfig, MenusConfig, RestBase};
pub use domain::entities::{Item, ItemOptions, Link};
pub use domain::ports::{ConfigProvider, RequestContext, UrlResolver};
pub use domain::services::Group;
pub use domain::value_objects::{Attributes, ItemId, Metadata, UrlSpec};
pub use error::{MenuError, MenuResult};
pub use infrastructure::{BaseUrlResolver, StaticRequest, TomlConfigProvider};
pub use menu::{ItemCollection, ItemMut, MenuTree, SortDirection};
pub use registry::MenuRegistry;
