//! Persistent, type-constrained collections for Strata.
//!
//! This crate provides:
//! - [`TypedList`] - Dense, index-addressed list of conforming elements
//! - [`TypedMap`] - Insertion-ordered, string-keyed map of conforming elements
//! - [`Map`] - Untyped map of scalar and array values
//! - [`Element`] - The contract elements implement to be checked at runtime
//! - [`Validator`] - The shared input checks behind every operation
//!
//! Every operation that looks like a mutation returns a new collection and
//! leaves the receiver untouched. Unchanged structure is shared between the
//! two, so copies are cheap.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod element;
pub mod map;
pub mod typed_list;
pub mod typed_map;
pub mod validate;

pub use element::Element;
pub use map::Map;
pub use typed_list::TypedList;
pub use typed_map::TypedMap;
pub use validate::Validator;
