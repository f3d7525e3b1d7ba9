//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use strata_foundation::{Error, ErrorContext, ErrorKind, Target, TypeName, TypeSet};

fn list() -> TypeName {
    TypeName::new("DatetimeList")
}

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_invalid_key() {
    let err = Error::invalid_key(list(), "index must be a valid integer");
    assert!(matches!(err.kind, ErrorKind::InvalidKey { .. }));
    assert_eq!(
        format!("{err}"),
        "invalid key given to 'DatetimeList': index must be a valid integer"
    );
}

#[test]
fn error_type_mismatch_lists_expected_types() {
    let expected = TypeSet::new(list(), ["DateTime", "DateTimeImmutable"]).unwrap();
    let err = Error::type_mismatch(list(), expected, TypeName::new("stdClass"));
    assert!(err.is_type_error());
    assert!(format!("{err}").contains("[DateTime, DateTimeImmutable]"));
}

#[test]
fn error_collection_mismatch() {
    let err = Error::collection_mismatch("merge", TypeName::new("DatetimeMap"), TypeName::new("OtherMap"));
    assert!(err.is_type_error());
    assert_eq!(
        format!("{err}"),
        "merge operation must be on same type as 'DatetimeMap', got 'OtherMap'"
    );
}

#[test]
fn error_not_found_key_and_index() {
    let err = Error::not_found(list(), Target::Key("k2".into()), true);
    assert!(err.is_not_found());
    assert!(!err.is_type_error());
    assert_eq!(
        format!("{err}"),
        "key 'k2' not found in 'DatetimeList' and no default provided"
    );

    let err = Error::not_found(list(), Target::Index(0), false);
    assert_eq!(format!("{err}"), "index 0 not found in 'DatetimeList'");
}

#[test]
fn error_lifecycle_kinds() {
    assert_eq!(
        format!("{}", Error::uninitialized(list())),
        "DatetimeList is not initialized"
    );
    assert_eq!(
        format!("{}", Error::reinitialization(list())),
        "cannot reinitialize DatetimeList"
    );
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_context_display() {
    assert_eq!(ErrorContext::new().with_operation("with").to_string(), "in with");
    assert_eq!(ErrorContext::new().with_position(4).to_string(), "at entry 4");
    assert_eq!(ErrorContext::new().to_string(), "");
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&Error::empty_type_set(list()));
}
