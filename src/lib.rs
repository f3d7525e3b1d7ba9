//! Strata - Persistent, type-constrained collections
//!
//! This crate re-exports all layers of the Strata system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: strata_collections — TypedList, TypedMap, untyped Map, validation
//! Layer 0: strata_foundation  — Persistent storage, Value, Key, Schema, Error
//! ```

pub use strata_collections as collections;
pub use strata_foundation as foundation;

pub use strata_collections::{Element, Map, TypedList, TypedMap};
pub use strata_foundation::{Deferred, Error, ErrorKind, Result, Schema, TypeName, Value};
