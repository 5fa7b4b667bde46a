//! Property tests for activation.

use proptest::prelude::*;

use menus::{ItemId, ItemOptions, MenuConfig, MenuTree};

/// Build a chain `n0 > n1 > ... > n{depth-1}` of nested items
fn chain(depth: usize) -> MenuTree {
    let mut config = MenuConfig::default();
    config.activate.auto = false;
    let mut menu = MenuTree::new("main", config);
    for level in 0..depth {
        let mut options = ItemOptions::from(format!("n{level}")).with_id(format!("n{level}"));
        if level > 0 {
            options = options.with_parent(format!("n{}", level - 1));
        }
        menu.push(format!("Level {level}"), options).unwrap();
    }
    menu
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Activating an item activates exactly it and its ancestors.
    #[test]
    fn property_activation_covers_ancestors(depth in 1usize..8, pick in any::<prop::sample::Index>()) {
        let mut menu = chain(depth);
        let target = pick.index(depth);
        menu.activate(&ItemId::from(format!("n{target}"))).unwrap();

        for level in 0..depth {
            let item = menu.find(&ItemId::from(format!("n{level}"))).unwrap();
            prop_assert_eq!(item.is_active(), level <= target, "level {}", level);
        }
    }

    /// PROPERTY: Activating twice leaves attributes as after the first time.
    #[test]
    fn property_activation_is_idempotent(depth in 1usize..8, pick in any::<prop::sample::Index>()) {
        let mut menu = chain(depth);
        let id = ItemId::from(format!("n{}", pick.index(depth)));

        menu.activate(&id).unwrap();
        let once: Vec<Option<String>> = menu
            .all()
            .iter()
            .map(|item| item.attr("class").map(str::to_string))
            .collect();

        menu.activate(&id).unwrap();
        let twice: Vec<Option<String>> = menu
            .all()
            .iter()
            .map(|item| item.attr("class").map(str::to_string))
            .collect();

        prop_assert_eq!(once, twice);
    }
}
