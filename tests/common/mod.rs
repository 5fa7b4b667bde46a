//! Common test utilities for menu integration tests.
//!
//! This module provides:
//! - Fixtures: ready-made menus and request helpers
//! - Assertion macros: `assert_active!`, `assert_inactive!`

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
pub use fixtures::*;
