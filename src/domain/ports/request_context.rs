//! Request context port - the request a menu is rendered for.

/// Current request as seen by activation matching.
pub trait RequestContext: Send + Sync {
    /// Request path without scheme, host or query (`/users/42`).
    fn current_path(&self) -> String;

    /// Full request URL, compared against resolved item URLs.
    fn current_url(&self) -> String;
}
