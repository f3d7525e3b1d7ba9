//! Core types and persistent storage for Strata.
//!
//! This crate provides:
//! - [`Error`] - Rich error types covering the collection error taxonomy
//! - [`Key`] and [`EntryKey`] - Validated map keys and raw construction keys
//! - [`TypeName`], [`TypeSet`], [`Schema`] - Accepted-type declarations
//! - [`Value`] - The dynamic value type stored by untyped maps
//! - [`Deferred`] - One-shot initialization slot
//! - Persistent storage ([`PVec`], [`OrderedMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod key;
pub mod lifecycle;
pub mod types;
pub mod value;

pub use collections::{OrderedMap, PVec};
pub use error::{Error, ErrorContext, ErrorKind, Target};
pub use key::{EntryKey, Key};
pub use lifecycle::Deferred;
pub use types::{Schema, TypeName, TypeSet};
pub use value::Value;

/// Result type alias using the Strata error type.
pub type Result<T> = std::result::Result<T, Error>;
