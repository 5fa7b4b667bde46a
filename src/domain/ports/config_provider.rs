//! Config provider port - supplies the merged configuration for a menu name.

use crate::config::MenuConfig;

/// Provider of per-menu configuration.
///
/// Implementations merge the named block over the defaults and never fail:
/// missing or malformed configuration yields `MenuConfig::default()`.
pub trait ConfigProvider: Send + Sync {
    fn get(&self, menu: &str) -> MenuConfig;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Mock implementation for testing
    struct MockConfigProvider {
        configs: HashMap<String, MenuConfig>,
    }

    impl MockConfigProvider {
        fn new() -> Self {
            Self {
                configs: HashMap::new(),
            }
        }

        fn with_menu(mut self, name: &str, config: MenuConfig) -> Self {
            self.configs.insert(name.to_string(), config);
            self
        }
    }

    impl ConfigProvider for MockConfigProvider {
        fn get(&self, menu: &str) -> MenuConfig {
            self.configs.get(menu).cloned().unwrap_or_default()
        }
    }

    #[test]
    fn mock_provider_returns_default_for_unknown_menu() {
        let provider = MockConfigProvider::new();
        assert_eq!(provider.get("missing"), MenuConfig::default());
    }

    #[test]
    fn mock_provider_returns_configured() {
        let mut custom = MenuConfig::default();
        custom.restful = true;

        let provider = MockConfigProvider::new().with_menu("admin", custom);
        assert!(provider.get("admin").restful);
        assert!(!provider.get("main").restful);
    }
}
