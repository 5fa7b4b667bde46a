//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MenuResult;

use super::loader::{self, ConfigWarning};

/// Which part of an item receives the active state and class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivateElement {
    /// The item's container (`<li>`)
    #[default]
    Item,
    /// The item's anchor (`<a>`)
    Link,
}

/// Activation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivateConfig {
    /// Activate items whose URL matches the current request when they are pushed
    #[serde(default = "default_true")]
    pub auto: bool,

    /// Cascade activation up the parent chain
    #[serde(default = "default_true")]
    pub parents: bool,

    /// Class added to the activated element
    #[serde(default = "default_active_class")]
    pub class: String,

    #[serde(default)]
    pub element: ActivateElement,
}

impl Default for ActivateConfig {
    fn default() -> Self {
        Self {
            auto: true,
            parents: true,
            class: default_active_class(),
            element: ActivateElement::Item,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_active_class() -> String {
    "active".to_string()
}

/// Base path segments stripped before restful matching.
///
/// Accepts either form:
///   rest_base = "api"
///   rest_base = ["api", "admin"]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct RestBase(Vec<String>);

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RestBaseDe {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for RestBase {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match RestBaseDe::deserialize(deserializer)? {
            RestBaseDe::One(base) => Ok(Self::from(base)),
            RestBaseDe::Many(bases) => Ok(Self(bases)),
        }
    }
}

impl RestBase {
    pub fn new(bases: Vec<String>) -> Self {
        Self(bases)
    }

    /// Candidate bases in match order (empty entries are kept but never match)
    pub fn bases(&self) -> Vec<&str> {
        self.0.iter().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|b| b.trim_matches('/').is_empty())
    }
}

impl From<String> for RestBase {
    fn from(base: String) -> Self {
        if base.is_empty() {
            Self::default()
        } else {
            Self(vec![base])
        }
    }
}

impl From<&str> for RestBase {
    fn from(base: &str) -> Self {
        Self::from(base.to_string())
    }
}

/// Effective configuration of one menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default)]
    pub activate: ActivateConfig,

    /// Cascade metadata from an item to its descendants
    #[serde(default = "default_true")]
    pub inheritance: bool,

    /// Use restful (sub-path) matching for auto-activation
    #[serde(default)]
    pub restful: bool,

    #[serde(default)]
    pub rest_base: RestBase,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            activate: ActivateConfig::default(),
            inheritance: true,
            restful: false,
            rest_base: RestBase::default(),
        }
    }
}

/// Partial activation settings of a named menu block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ActivateOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parents: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<ActivateElement>,
}

/// A named `[menus.<name>]` block: only the keys it sets override the defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MenuOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activate: Option<ActivateOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inheritance: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restful: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_base: Option<RestBase>,
}

impl MenuOverrides {
    /// Apply the keys set in this block on top of `base`
    pub fn apply(&self, mut base: MenuConfig) -> MenuConfig {
        if let Some(activate) = &self.activate {
            if let Some(auto) = activate.auto {
                base.activate.auto = auto;
            }
            if let Some(parents) = activate.parents {
                base.activate.parents = parents;
            }
            if let Some(class) = &activate.class {
                base.activate.class = class.clone();
            }
            if let Some(element) = activate.element {
                base.activate.element = element;
            }
        }
        if let Some(inheritance) = self.inheritance {
            base.inheritance = inheritance;
        }
        if let Some(restful) = self.restful {
            base.restful = restful;
        }
        if let Some(rest_base) = &self.rest_base {
            base.rest_base = rest_base.clone();
        }
        base
    }
}

/// Configuration file model
///
/// ```toml
/// [default.activate]
/// class = "current"
///
/// [menus.admin]
/// restful = true
/// rest_base = ["admin"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MenusConfig {
    #[serde(default)]
    pub default: MenuConfig,

    #[serde(default)]
    pub menus: BTreeMap<String, MenuOverrides>,
}

impl MenusConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MenuResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MenuResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (MENUS_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Apply overrides using `lookup` in place of the process environment
    pub fn with_overrides_from<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        loader::with_overrides_from(self, lookup)
    }

    /// Effective configuration for `name`: the named block over the defaults
    pub fn menu(&self, name: &str) -> MenuConfig {
        match self.menus.get(name) {
            Some(overrides) => overrides.apply(self.default.clone()),
            None => self.default.clone(),
        }
    }
}
