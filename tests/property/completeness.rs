use metakey::resolve::resolve;
use metakey::types::{KeyPartSpec, KeyPartValues};
use proptest::prelude::*;

/// Ordered parts with distinct names and ascending (possibly tied) ranks.
fn arb_parts() -> impl Strategy<Value = Vec<KeyPartSpec>> {
    prop::collection::vec((0i64..10, any::<bool>()), 0..6).prop_map(|rows| {
        let mut parts: Vec<KeyPartSpec> = rows
            .into_iter()
            .enumerate()
            .map(|(i, (order, required))| KeyPartSpec {
                name: format!("part{}", i),
                order,
                required,
            })
            .collect();
        parts.sort_by_key(|p| p.order);
        parts
    })
}

/// Per-part declaration state: absent, declared without a value, or a value.
fn arb_entries(len: usize) -> impl Strategy<Value = Vec<Option<Option<String>>>> {
    prop::collection::vec(prop::option::of(prop::option::of("[a-z]{1,8}")), len)
}

fn values_from(parts: &[KeyPartSpec], entries: &[Option<Option<String>>]) -> KeyPartValues {
    parts
        .iter()
        .zip(entries)
        .filter_map(|(part, entry)| entry.clone().map(|v| (part.name.clone(), v)))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn missing_parts_are_undeclared_and_in_rank_order(
        (parts, entries) in arb_parts().prop_flat_map(|parts| {
            let len = parts.len();
            (Just(parts), arb_entries(len))
        })
    ) {
        let values = values_from(&parts, &entries);
        let result = resolve(&parts, &values);

        for missing in &result.missing_parts {
            prop_assert!(!values.contains_key(missing));
        }

        let names: Vec<&str> = parts.iter().map(|p| p.name.as_str()).collect();
        let mut cursor = 0;
        for missing in &result.missing_parts {
            let found = names[cursor..].iter().position(|n| *n == missing.as_str());
            prop_assert!(
                found.is_some(),
                "missing part {:?} not in rank order {:?}",
                missing,
                names
            );
            cursor += found.unwrap() + 1;
        }
    }

    #[test]
    fn every_part_declared_means_complete(
        (parts, entries) in arb_parts().prop_flat_map(|parts| {
            let len = parts.len();
            (
                Just(parts),
                prop::collection::vec(prop::option::of("[a-z]{1,8}"), len),
            )
        })
    ) {
        // Every part gets an entry; whether a value was extractable for it
        // makes no difference to the scan.
        let values: KeyPartValues = parts
            .iter()
            .zip(&entries)
            .map(|(part, entry)| (part.name.clone(), entry.clone()))
            .collect();
        let result = resolve(&parts, &values);

        prop_assert!(result.is_complete());
        prop_assert_eq!(result.partial_message(), None);
    }

    #[test]
    fn a_single_part_is_missing_only_when_required(
        required in any::<bool>(),
        entry in prop::option::of(prop::option::of("[a-z]{1,8}")),
    ) {
        let parts = [KeyPartSpec {
            name: "part0".to_string(),
            order: 1,
            required,
        }];
        let values = values_from(&parts, &[entry.clone()]);
        let result = resolve(&parts, &values);

        let expect_missing = required && entry.is_none();
        prop_assert_eq!(!result.is_complete(), expect_missing);
    }

    #[test]
    fn verdict_and_message_agree(
        (parts, entries) in arb_parts().prop_flat_map(|parts| {
            let len = parts.len();
            (Just(parts), arb_entries(len))
        })
    ) {
        let result = resolve(&parts, &values_from(&parts, &entries));

        prop_assert_eq!(result.is_complete(), result.missing_parts.is_empty());
        prop_assert_eq!(result.partial_message().is_some(), !result.is_complete());
        if let Some(message) = result.partial_message() {
            for missing in &result.missing_parts {
                prop_assert!(message.contains(missing.as_str()));
            }
        }
    }
}
