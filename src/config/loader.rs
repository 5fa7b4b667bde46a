//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MenuError, MenuResult};

use super::types::{ActivateElement, MenusConfig, RestBase};

/// Non-fatal configuration warning (e.g. an unknown key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MenuResult<(MenusConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: MenusConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MenuError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> MenusConfig {
    // Try project config first
    if let Some(root) = project_root {
        if let Some(config) = load_lenient(&root.join("menus.toml")) {
            return with_env_overrides(config);
        }
    }

    // Try user config
    if let Some(user_config_dir) = dirs::config_dir() {
        if let Some(config) = load_lenient(&user_config_dir.join("menus/config.toml")) {
            return with_env_overrides(config);
        }
    }

    // Return defaults with env overrides
    with_env_overrides(MenusConfig::default())
}

fn load_lenient(path: &Path) -> Option<MenusConfig> {
    if !path.exists() {
        return None;
    }
    match load_with_warnings(path) {
        Ok((config, warnings)) => {
            for warning in warnings {
                tracing::warn!(
                    key = %warning.key,
                    file = %warning.file.display(),
                    line = ?warning.line,
                    suggestion = ?warning.suggestion,
                    "unknown menu configuration key"
                );
            }
            Some(config)
        }
        Err(err) => {
            tracing::warn!(file = %path.display(), error = %err, "ignoring menu configuration");
            None
        }
    }
}

/// Apply environment variable overrides (MENUS_* prefix) to the default block
pub fn with_env_overrides(config: MenusConfig) -> MenusConfig {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

pub fn with_overrides_from<F>(mut config: MenusConfig, lookup: F) -> MenusConfig
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = &mut config.default;

    // MENUS_ACTIVATE_AUTO
    if let Some(val) = lookup("MENUS_ACTIVATE_AUTO") {
        defaults.activate.auto = parse_flag(&val);
    }

    // MENUS_ACTIVATE_PARENTS
    if let Some(val) = lookup("MENUS_ACTIVATE_PARENTS") {
        defaults.activate.parents = parse_flag(&val);
    }

    // MENUS_ACTIVATE_CLASS
    if let Some(class) = lookup("MENUS_ACTIVATE_CLASS") {
        defaults.activate.class = class;
    }

    // MENUS_ACTIVATE_ELEMENT
    if let Some(element) = lookup("MENUS_ACTIVATE_ELEMENT") {
        defaults.activate.element = match element.trim().to_lowercase().as_str() {
            "link" => ActivateElement::Link,
            _ => ActivateElement::Item,
        };
    }

    // MENUS_INHERITANCE
    if let Some(val) = lookup("MENUS_INHERITANCE") {
        defaults.inheritance = parse_flag(&val);
    }

    // MENUS_RESTFUL
    if let Some(val) = lookup("MENUS_RESTFUL") {
        defaults.restful = parse_flag(&val);
    }

    // MENUS_REST_BASE (comma-separated)
    if let Some(bases) = lookup("MENUS_REST_BASE") {
        defaults.rest_base = RestBase::new(
            bases
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        );
    }

    config
}

fn parse_flag(val: &str) -> bool {
    val.to_lowercase() != "false" && val != "0"
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "default",
        "menus",
        "activate",
        "auto",
        "parents",
        "class",
        "element",
        "inheritance",
        "restful",
        "rest_base",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
