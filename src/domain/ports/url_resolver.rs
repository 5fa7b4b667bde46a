//! URL resolver port - turns a relative path plus parameters into an address.

/// Resolves menu link paths into URLs.
///
/// Implementations must pass absolute URLs (those with a scheme) through
/// unchanged.
pub trait UrlResolver: Send + Sync {
    /// Resolve `path` with trailing path `params`, using a secure scheme
    /// when `secure` is set.
    fn to(&self, path: &str, params: &[String], secure: bool) -> String;
}
