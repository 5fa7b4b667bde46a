//! Configuration provider implementations

mod toml_config;

pub use toml_config::TomlConfigProvider;
