//! URL resolver implementations

mod base_url;

pub use base_url::BaseUrlResolver;
