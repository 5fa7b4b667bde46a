//! Domain Layer
//!
//! The menu tree's building blocks, free of I/O.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Item, Link, ItemOptions)
//! - `value_objects/` - Value types (ItemId, Attributes, Metadata, UrlSpec)
//! - `services/` - Pure logic (attribute merging, group scope, naming, URL matching)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - Request and URL lookups go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
