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
    fn chain_is_an_in_order_subsequence_of_the_parts(
        (parts, entries) in arb_parts().prop_flat_map(|parts| {
            let len = parts.len();
            (Just(parts), arb_entries(len))
        })
    ) {
        let values = values_from(&parts, &entries);
        let result = resolve(&parts, &values);

        let names: Vec<&str> = parts.iter().map(|p| p.name.as_str()).collect();
        let mut cursor = 0;
        for part_name in result.key.part_names() {
            let found = names[cursor..].iter().position(|n| *n == part_name);
            prop_assert!(
                found.is_some(),
                "chain level {:?} not in part order {:?}",
                part_name,
                names
            );
            cursor += found.unwrap() + 1;
        }
    }

    #[test]
    fn chain_ids_come_from_the_declared_values(
        (parts, entries) in arb_parts().prop_flat_map(|parts| {
            let len = parts.len();
            (Just(parts), arb_entries(len))
        })
    ) {
        let values = values_from(&parts, &entries);
        let result = resolve(&parts, &values);

        for (part_name, id) in result.key.part_names().iter().zip(result.key.ids()) {
            let declared = values.get(*part_name).cloned().flatten();
            prop_assert_eq!(declared.as_deref(), Some(id));
        }
    }

    #[test]
    fn fully_simple_values_build_a_prefix_chain(
        (parts, entries) in arb_parts().prop_flat_map(|parts| {
            let len = parts.len();
            (
                Just(parts),
                prop::collection::vec(prop::option::of("[a-z]{1,8}"), len),
            )
        })
    ) {
        // No declared-without-value entries here, so the walk can only
        // stop, never skip: the chain must be an exact prefix.
        let values: KeyPartValues = parts
            .iter()
            .zip(&entries)
            .filter_map(|(part, entry)| {
                entry.clone().map(|v| (part.name.clone(), Some(v)))
            })
            .collect();
        let result = resolve(&parts, &values);

        let expected: Vec<&str> = parts
            .iter()
            .map(|p| p.name.as_str())
            .take_while(|name| values.contains_key(*name))
            .collect();
        prop_assert_eq!(result.key.part_names(), expected);
    }

    #[test]
    fn resolution_is_deterministic(
        (parts, entries) in arb_parts().prop_flat_map(|parts| {
            let len = parts.len();
            (Just(parts), arb_entries(len))
        })
    ) {
        let values = values_from(&parts, &entries);
        prop_assert_eq!(resolve(&parts, &values), resolve(&parts, &values));
    }

    #[test]
    fn resolve_tolerates_unsorted_and_colliding_parts(
        parts in prop::collection::vec(
            ("[a-c]", any::<i64>(), any::<bool>()).prop_map(|(name, order, required)| {
                KeyPartSpec { name, order, required }
            }),
            0..8,
        ),
        values in prop::collection::hash_map("[a-d]", prop::option::of("[a-z]{0,4}"), 0..8),
    ) {
        let result = resolve(&parts, &values);
        let _ = result.partial_message();
        prop_assert!(
            result
                .missing_parts
                .iter()
                .all(|missing| parts.iter().any(|p| &p.name == missing))
        );
    }
}
