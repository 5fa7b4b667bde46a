//! Request context implementations

mod static_request;

pub use static_request::StaticRequest;
