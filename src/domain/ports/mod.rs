//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod config_provider;
pub mod request_context;
pub mod url_resolver;

pub use config_provider::ConfigProvider;
pub use request_context::RequestContext;
pub use url_resolver::UrlResolver;
