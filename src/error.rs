//! Error types for menus
//!
//! Uses `thiserror` for library errors. Lookup misses are not errors: queries
//! return `Option` or an empty `Vec` instead.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::ItemId;

/// Result type alias for menu operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Main error type for menu operations
#[derive(Error, Debug)]
pub enum MenuError {
    /// An item with this id is already registered in the tree
    #[error("duplicate item id '{id}'")]
    DuplicateId { id: ItemId },

    /// The requested parent id is not registered in the tree
    #[error("unknown parent item '{parent}'")]
    UnknownParent { parent: ItemId },

    /// An item-addressed operation named an id that is not in the tree
    #[error("unknown item '{id}'")]
    UnknownItem { id: ItemId },

    /// `divide` was called before any item was pushed
    #[error("cannot insert a divider into an empty menu")]
    EmptyMenu,

    /// An activation pattern compiled past the size limit
    #[error("invalid activation pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Configuration file could not be parsed
    #[error("invalid menu configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
