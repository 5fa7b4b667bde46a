//! TOML-based configuration provider implementation.

use std::path::Path;

use crate::config::{MenuConfig, MenusConfig};
use crate::domain::ports::ConfigProvider;
use crate::error::MenuResult;

/// Configuration provider backed by a loaded `MenusConfig`.
///
/// Delegates to the `MenusConfig` methods for file loading and block merging,
/// providing a trait-based abstraction for dependency injection.
#[derive(Debug, Clone, Default)]
pub struct TomlConfigProvider {
    config: MenusConfig,
}

impl TomlConfigProvider {
    pub fn new(config: MenusConfig) -> Self {
        Self { config }
    }

    /// Load a specific file (strict: unreadable or malformed files error)
    pub fn load(path: &Path) -> MenuResult<Self> {
        MenusConfig::load(path).map(Self::new)
    }

    /// Load using the standard hierarchy, falling back to defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        Self::new(MenusConfig::load_or_default(project_root))
    }

    pub fn config(&self) -> &MenusConfig {
        &self.config
    }
}

impl ConfigProvider for TomlConfigProvider {
    fn get(&self, menu: &str) -> MenuConfig {
        self.config.menu(menu)
    }
}
