//! Integration tests for TypedMap
//!
//! Tests keyed access, set operations, ordering, and element independence.

use strata_collections::TypedMap;
use strata_foundation::{ErrorKind, Key, Schema};

use crate::fixtures::{Object, datetime_map, datetime_map_schema, other_map_schema};

fn keys(map: &TypedMap<Object>) -> Vec<String> {
    map.keys().iter().map(ToString::to_string).collect()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn construct_accepts_either_class() {
    let map = TypedMap::new(
        datetime_map_schema(),
        [
            ("k0", Object::DateTime(0)),
            ("k1", Object::DateTimeImmutable(1)),
        ],
    )
    .unwrap();

    assert_eq!(map.count(), 2);
    assert_eq!(map.get("k1").unwrap(), Object::DateTimeImmutable(1));
    assert_eq!(map.valid_types().to_string(), "DateTime, DateTimeImmutable");
}

#[test]
fn construct_rejects_integer_and_empty_keys() {
    let err = TypedMap::new(datetime_map_schema(), [(0, Object::DateTime(0))]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidKey { .. }));

    let err = TypedMap::new(datetime_map_schema(), [("", Object::DateTime(0))]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidKey { .. }));
}

#[test]
fn construct_rejects_foreign_class() {
    let err = TypedMap::new(datetime_map_schema(), [("k", Object::Std)]).unwrap_err();
    assert!(err.is_type_error());
    assert!(err.to_string().contains("but was given 'stdClass'"));
}

#[test]
fn keys_allow_punctuation() {
    let map = datetime_map(&[("_a.b.123-456", 1)]);
    assert!(map.has("_a.b.123-456"));
    assert!(!map.has("_a.b"));
}

// =============================================================================
// Lookup
// =============================================================================

#[test]
fn get_missing_key() {
    let map = datetime_map(&[("a", 0)]);

    let err = map.get("missing").unwrap_err();
    assert!(err.is_not_found());

    let fallback = Object::DateTimeImmutable(1);
    assert_eq!(
        map.get_or("missing", Some(fallback.clone())).unwrap(),
        Some(fallback)
    );
}

#[test]
fn get_default_must_conform() {
    let map = datetime_map(&[("a", 0)]);
    assert!(map.get_or("missing", Some(Object::Std)).unwrap_err().is_type_error());
}

#[test]
fn find_returns_key() {
    let map = datetime_map(&[("a", 1), ("b", 2)]);
    assert_eq!(map.find(&Object::DateTime(2)).unwrap(), Some(Key::new("b").unwrap()));
    assert_eq!(map.find(&Object::DateTime(3)).unwrap(), None);
}

#[test]
fn first_and_last_follow_insertion() {
    let map = datetime_map(&[("z", 1), ("a", 2)]);
    assert_eq!(map.first(), Some(Object::DateTime(1)));
    assert_eq!(map.last(), Some(Object::DateTime(2)));
}

// =============================================================================
// Modification
// =============================================================================

#[test]
fn with_overwrites_in_place() {
    let map = datetime_map(&[("a", 1), ("b", 2)]);
    let updated = map.with("a", Object::DateTimeImmutable(9)).unwrap();

    assert_eq!(keys(&updated), vec!["a", "b"]);
    assert_eq!(updated.get("a").unwrap(), Object::DateTimeImmutable(9));
    assert_eq!(map.get("a").unwrap(), Object::DateTime(1));
}

#[test]
fn with_validates_key_and_value() {
    let map = datetime_map(&[]);
    assert!(matches!(
        map.with("", Object::DateTime(0)).unwrap_err().kind,
        ErrorKind::InvalidKey { .. }
    ));
    assert!(map.with("k", Object::Std).unwrap_err().is_type_error());
}

#[test]
fn without_missing_key() {
    let map = datetime_map(&[("a", 1)]);
    let err = map.without("b").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::NotFound {
            no_default: false,
            ..
        }
    ));
    assert_eq!(map.without("a").unwrap().count(), 0);
}

// =============================================================================
// Set Operations
// =============================================================================

#[test]
fn merge_prefers_other() {
    let map0 = datetime_map(&[("a", 1), ("c", 3)]);
    let map1 = datetime_map(&[("a", 10), ("b", 2)]);

    let merged = map0.merge(&map1).unwrap();
    assert_eq!(merged.count(), 3);
    assert_eq!(merged.get("a").unwrap(), Object::DateTime(10));
    assert_eq!(merged.get("b").unwrap(), Object::DateTime(2));
    assert_eq!(merged.get("c").unwrap(), Object::DateTime(3));
    assert_eq!(keys(&merged), vec!["a", "c", "b"]);
}

#[test]
fn intersect_and_diff() {
    let map0 = datetime_map(&[("a", 1), ("b", 2), ("c", 3)]);
    let map1 = datetime_map(&[("c", 30), ("a", 10)]);

    let common = map0.intersect(&map1).unwrap();
    assert_eq!(keys(&common), vec!["a", "c"]);
    assert_eq!(common.get("a").unwrap(), Object::DateTime(1));

    let rest = map0.diff(&map1).unwrap();
    assert_eq!(keys(&rest), vec!["b"]);
}

#[test]
fn set_operations_reject_foreign_kind() {
    let map = datetime_map(&[("a", 1)]);
    let other = TypedMap::new(other_map_schema(), [("a", Object::DateTime(1))]).unwrap();

    for err in [
        map.merge(&other).unwrap_err(),
        map.intersect(&other).unwrap_err(),
        map.diff(&other).unwrap_err(),
    ] {
        assert!(err.is_type_error());
        assert!(err.to_string().contains("OtherMap"));
    }
}

#[test]
fn set_operations_reject_same_name_with_other_types() {
    let map = datetime_map(&[("a", 1)]);
    let renamed_types = TypedMap::new(
        Schema::new("DatetimeMap", ["stdClass"]).unwrap(),
        [("b", Object::Std)],
    )
    .unwrap();

    for err in [
        map.merge(&renamed_types).unwrap_err(),
        map.intersect(&renamed_types).unwrap_err(),
        map.diff(&renamed_types).unwrap_err(),
        map.equals(&renamed_types).unwrap_err(),
    ] {
        assert!(matches!(err.kind, ErrorKind::CollectionMismatch { .. }));
    }
}

#[test]
fn empty_keeps_receiver_type() {
    let map = datetime_map(&[("a", 1), ("b", 2)]);
    let empty = map.empty();

    assert!(empty.is_empty());
    assert_eq!(empty.schema(), map.schema());
    assert_eq!(map.count(), 2);
    assert!(empty.with("c", Object::DateTimeImmutable(3)).is_ok());
    assert!(empty.with("c", Object::Std).unwrap_err().is_type_error());
    assert!(map.merge(&empty).is_ok());
}

// =============================================================================
// Traversal
// =============================================================================

#[test]
fn filter_search_map_reduce_see_keys() {
    let map = datetime_map(&[("one", 1), ("two", 2), ("three", 3)]);

    let short = map.filter(|k, _| k.len() == 3);
    assert_eq!(keys(&short), vec!["one", "two"]);

    assert_eq!(
        map.search(|_, o| o.timestamp() == Some(3)),
        Some(Key::new("three").unwrap())
    );

    let shifted = map
        .map(|k, o| Object::DateTime(o.timestamp().unwrap_or_default() + k.len() as i64))
        .unwrap();
    assert_eq!(shifted.get("three").unwrap(), Object::DateTime(8));
    assert!(map.map(|_, _| Object::Std).is_err());

    let total = map.reduce(|acc, _, o| acc + o.timestamp().unwrap_or_default(), 0);
    assert_eq!(total, 6);
}

#[test]
fn unwrap_is_ordered_pairs() {
    let map = datetime_map(&[("b", 2), ("a", 1)]);
    let pairs = map.unwrap();
    assert_eq!(pairs[0], (Key::new("b").unwrap(), Object::DateTime(2)));
    assert_eq!(pairs[1], (Key::new("a").unwrap(), Object::DateTime(1)));
}

// =============================================================================
// Independence
// =============================================================================

#[test]
fn returned_elements_are_copies() {
    let map = datetime_map(&[("a", 1)]);

    let mut got = map.get("a").unwrap();
    got.set_timestamp(50);
    for (_, mut element) in map.iter() {
        element.set_timestamp(60);
    }

    assert_eq!(map.get("a").unwrap(), Object::DateTime(1));
}

#[test]
fn inserted_elements_are_copies() {
    let mut source = Object::DateTime(1);
    let map = datetime_map(&[]).with("a", source.clone()).unwrap();
    source.set_timestamp(2);
    assert_eq!(map.get("a").unwrap(), Object::DateTime(1));
}
