//! Property tests for class list merging.

use proptest::prelude::*;

use menus::domain::services::merge_classes;

fn class_list() -> impl Strategy<Value = String> {
    let token = proptest::string::string_regex("[a-z]{1,4}").unwrap();
    let sep = prop_oneof![Just(" "), Just("  "), Just("\t")];
    proptest::collection::vec((token, sep), 0..6).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(token, sep)| format!("{token}{sep}"))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The merged list never repeats a token.
    #[test]
    fn property_merged_classes_are_unique(old in class_list(), new in class_list()) {
        let merged = merge_classes(Some(&old), Some(&new)).unwrap();
        let tokens: Vec<&str> = merged.split(' ').filter(|t| !t.is_empty()).collect();
        let mut deduped = tokens.clone();
        deduped.sort_unstable();
        deduped.dedup();
        prop_assert_eq!(tokens.len(), deduped.len(), "repeated token in {:?}", merged);
    }

    /// PROPERTY: Every token of either side survives the merge.
    #[test]
    fn property_merge_keeps_every_token(old in class_list(), new in class_list()) {
        let merged = merge_classes(Some(&old), Some(&new)).unwrap();
        let tokens: Vec<&str> = merged.split(' ').collect();
        for token in old.split_whitespace().chain(new.split_whitespace()) {
            prop_assert!(tokens.contains(&token), "lost {:?} in {:?}", token, merged);
        }
    }

    /// PROPERTY: Merging a list into itself is a no-op on the token set.
    #[test]
    fn property_merge_is_idempotent(list in class_list(), extra in class_list()) {
        let once = merge_classes(Some(&list), Some(&extra)).unwrap();
        let twice = merge_classes(Some(&once), Some(&extra)).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: An absent new list leaves the old one untouched.
    #[test]
    fn property_absent_new_keeps_old(old in class_list()) {
        prop_assert_eq!(merge_classes(Some(&old), None), Some(old.clone()));
    }
}
