//! Custom assertion macros for integration tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

use menus::MenuTree;

/// Ids of every active item, in sequence order (for failure messages)
pub fn active_ids(menu: &MenuTree) -> Vec<String> {
    menu.all()
        .iter()
        .filter(|item| item.is_active())
        .map(|item| item.id().to_string())
        .collect()
}

/// Assert that the item with this id is active.
///
/// # Example
/// ```ignore
/// assert_active!(menu, "about");
/// ```
#[macro_export]
macro_rules! assert_active {
    ($menu:expr, $id:expr) => {
        let item = $menu
            .find(&menus::ItemId::from($id))
            .unwrap_or_else(|| panic!("no item with id '{}'", $id));
        assert!(
            item.is_active(),
            "Expected '{}' to be active.\nActive items: {:?}",
            $id,
            $crate::common::active_ids(&$menu)
        );
    };
}

/// Assert that the item with this id is NOT active.
#[macro_export]
macro_rules! assert_inactive {
    ($menu:expr, $id:expr) => {
        let item = $menu
            .find(&menus::ItemId::from($id))
            .unwrap_or_else(|| panic!("no item with id '{}'", $id));
        assert!(
            !item.is_active(),
            "Expected '{}' to be inactive.\nActive items: {:?}",
            $id,
            $crate::common::active_ids(&$menu)
        );
    };
}
