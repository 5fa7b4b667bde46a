//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `url/` - URL resolution against an application root
//! - `request/` - Request contexts
//! - `config/` - Configuration providers (TOML)

pub mod config;
pub mod request;
pub mod url;

// Re-export for convenience
pub use config::TomlConfigProvider;
pub use request::StaticRequest;
pub use url::BaseUrlResolver;
