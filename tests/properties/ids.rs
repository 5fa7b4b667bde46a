//! Property tests for item registration.

use proptest::prelude::*;

use menus::{ItemId, ItemOptions, MenuConfig, MenuTree};

fn titles() -> impl Strategy<Value = Vec<String>> {
    let title = proptest::string::string_regex("[A-Za-z ]{1,12}").unwrap();
    proptest::collection::vec(title, 1..24)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Generated ids are unique and each resolves to its own item.
    #[test]
    fn property_generated_ids_are_unique(titles in titles()) {
        let mut menu = MenuTree::new("main", MenuConfig::default());
        let mut ids: Vec<ItemId> = Vec::new();
        for title in &titles {
            let id = menu.push(title.as_str(), "/").unwrap().id().clone();
            ids.push(id);
        }

        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), ids.len());

        for (id, title) in ids.iter().zip(&titles) {
            prop_assert_eq!(menu.find(id).map(|item| item.title()), Some(title.as_str()));
        }
    }

    /// PROPERTY: Items keep registration order, children included.
    #[test]
    fn property_registration_order_is_kept(titles in titles(), nest in any::<bool>()) {
        let mut menu = MenuTree::new("main", MenuConfig::default());
        menu.push("Root", ItemOptions::from("/").with_id("root")).unwrap();
        for title in &titles {
            let options = ItemOptions::from("/");
            let options = if nest { options.with_parent("root") } else { options };
            menu.push(title.as_str(), options).unwrap();
        }

        let registered: Vec<&str> = menu.all()[1..].iter().map(|item| item.title()).collect();
        let expected: Vec<&str> = titles.iter().map(String::as_str).collect();
        prop_assert_eq!(registered, expected);
        prop_assert_eq!(menu.children(&ItemId::from("root")).len(), if nest { titles.len() } else { 0 });
    }
}
