//! Property tests for slug and nickname derivation.

use proptest::prelude::*;

use menus::domain::services::{camel_case, slugify};

fn title() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 _@.!-]{0,24}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Slugs are lowercase words joined by single dashes.
    #[test]
    fn property_slug_shape(title in title()) {
        let slug = slugify(&title);
        prop_assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{:?}", slug);
        prop_assert!(!slug.contains("--"), "{:?}", slug);
        prop_assert!(
            slug.chars().all(|c| c == '-' || c.is_ascii_lowercase() || c.is_ascii_digit()),
            "{:?}",
            slug
        );
    }

    /// PROPERTY: Slugifying a slug changes nothing.
    #[test]
    fn property_slugify_is_idempotent(title in title()) {
        let slug = slugify(&title);
        prop_assert_eq!(slugify(&slug), slug);
    }

    /// PROPERTY: Nicknames derived from slugs carry no separators.
    #[test]
    fn property_nickname_has_no_separators(title in title()) {
        let nickname = camel_case(&slugify(&title));
        prop_assert!(!nickname.contains('-'), "{:?}", nickname);
        prop_assert!(!nickname.chars().next().is_some_and(|c| c.is_uppercase()), "{:?}", nickname);
    }
}
