//! Configuration module for menus
//!
//! Configuration hierarchy:
//! 1. Environment variables (MENUS_*), applied to the default block
//! 2. Project config (menus.toml)
//! 3. User config (~/.config/menus/config.toml)
//! 4. Built-in defaults (lowest priority)
//!
//! A named `[menus.<name>]` block overrides the `[default]` block key by key.

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{
    ActivateConfig, ActivateElement, ActivateOverrides, MenuConfig, MenuOverrides, MenusConfig,
    RestBase,
};
