//! Property tests for the collection laws
//!
//! Round-trip, immutability, and type enforcement over generated inputs.

use proptest::prelude::*;
use strata_collections::{TypedList, TypedMap};

use crate::fixtures::{Object, datetime_list_schema, datetime_map_schema};

fn object() -> impl Strategy<Value = Object> {
    prop_oneof![
        any::<i64>().prop_map(Object::DateTime),
        any::<i64>().prop_map(Object::DateTimeImmutable),
    ]
}

fn entries() -> impl Strategy<Value = Vec<(String, Object)>> {
    prop::collection::vec(("[a-z]{1,6}", object()), 0..20)
}

/// Deduplicates keys the way map construction does: first position, last value.
fn expected_map(entries: &[(String, Object)]) -> Vec<(String, Object)> {
    let mut out: Vec<(String, Object)> = Vec::new();
    for (key, value) in entries {
        match out.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value.clone(),
            None => out.push((key.clone(), value.clone())),
        }
    }
    out
}

proptest! {
    #[test]
    fn list_round_trip(elements in prop::collection::vec(object(), 0..50)) {
        let list = TypedList::from_elements(datetime_list_schema(), elements.clone()).unwrap();
        prop_assert_eq!(list.unwrap(), elements);
    }

    #[test]
    fn list_ops_leave_receiver_untouched(
        elements in prop::collection::vec(object(), 1..30),
        extra in object(),
    ) {
        let list = TypedList::from_elements(datetime_list_schema(), elements.clone()).unwrap();
        let last = elements.len() - 1;

        let _ = list.push(extra.clone()).unwrap();
        let _ = list.with(last, extra.clone()).unwrap();
        let _ = list.without(last).unwrap();
        let _ = list.reverse();

        prop_assert_eq!(list.unwrap(), elements);
    }

    #[test]
    fn list_rejects_foreign_class_anywhere(
        elements in prop::collection::vec(object(), 0..20),
        position in any::<prop::sample::Index>(),
    ) {
        let mut elements = elements;
        let at = position.index(elements.len() + 1);
        elements.insert(at, Object::Std);

        let err = TypedList::from_elements(datetime_list_schema(), elements).unwrap_err();
        prop_assert!(err.is_type_error());
        prop_assert_eq!(err.context.and_then(|c| c.position), Some(at));
    }

    #[test]
    fn map_round_trip(entries in entries()) {
        let map = TypedMap::new(datetime_map_schema(), entries.clone()).unwrap();
        let pairs: Vec<(String, Object)> = map
            .unwrap()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        prop_assert_eq!(pairs, expected_map(&entries));
    }

    #[test]
    fn merge_then_get_prefers_other(left in entries(), right in entries()) {
        let a = TypedMap::new(datetime_map_schema(), left.clone()).unwrap();
        let b = TypedMap::new(datetime_map_schema(), right.clone()).unwrap();
        let merged = a.merge(&b).unwrap();

        for (key, value) in expected_map(&right) {
            prop_assert_eq!(merged.get(&key).unwrap(), value);
        }
        for (key, value) in expected_map(&left) {
            if !b.has(&key) {
                prop_assert_eq!(merged.get(&key).unwrap(), value);
            }
        }
    }

    #[test]
    fn intersect_and_diff_partition(left in entries(), right in entries()) {
        let a = TypedMap::new(datetime_map_schema(), left).unwrap();
        let b = TypedMap::new(datetime_map_schema(), right).unwrap();

        let common = a.intersect(&b).unwrap();
        let rest = a.diff(&b).unwrap();
        prop_assert_eq!(common.count() + rest.count(), a.count());
        prop_assert!(common.keys().iter().all(|k| b.has(k)));
        prop_assert!(rest.keys().iter().all(|k| !b.has(k)));
    }

    #[test]
    fn empty_is_always_empty(entries in entries()) {
        let map = TypedMap::new(datetime_map_schema(), entries).unwrap();
        let empty = map.empty();
        prop_assert!(empty.is_empty());
        prop_assert_eq!(empty.count(), 0);
        prop_assert_eq!(empty.schema(), map.schema());
        prop_assert_eq!(map.merge(&empty).unwrap(), map);
    }
}
