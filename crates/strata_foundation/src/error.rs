//! Error types for the Strata collections.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::types::{TypeName, TypeSet};

/// The main error type for Strata operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an uninitialized collection error.
    #[must_use]
    pub fn uninitialized(collection: TypeName) -> Self {
        Self::new(ErrorKind::Uninitialized { collection })
    }

    /// Creates a reinitialization error.
    #[must_use]
    pub fn reinitialization(collection: TypeName) -> Self {
        Self::new(ErrorKind::Reinitialization { collection })
    }

    /// Creates an invalid key error.
    #[must_use]
    pub fn invalid_key(collection: TypeName, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidKey {
            collection,
            reason: reason.into(),
        })
    }

    /// Creates a type mismatch error for a rejected element or value.
    #[must_use]
    pub fn type_mismatch(collection: TypeName, expected: TypeSet, actual: TypeName) -> Self {
        Self::new(ErrorKind::TypeMismatch {
            collection,
            expected,
            actual,
        })
    }

    /// Creates a collection mismatch error for a cross-collection operation.
    #[must_use]
    pub fn collection_mismatch(
        operation: &'static str,
        expected: TypeName,
        actual: TypeName,
    ) -> Self {
        Self::new(ErrorKind::CollectionMismatch {
            operation,
            expected,
            actual,
        })
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(collection: TypeName, target: Target, no_default: bool) -> Self {
        Self::new(ErrorKind::NotFound {
            collection,
            target,
            no_default,
        })
    }

    /// Creates an empty type set error.
    #[must_use]
    pub fn empty_type_set(collection: TypeName) -> Self {
        Self::new(ErrorKind::EmptyTypeSet { collection })
    }

    /// Returns true if this is a type error (rejected element or foreign collection).
    #[must_use]
    pub fn is_type_error(&self) -> bool {
        self.kind.is_type_error()
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An operation ran before the one-time construction completed.
    #[error("{collection} is not initialized")]
    Uninitialized {
        /// The concrete collection type.
        collection: TypeName,
    },

    /// Construction was attempted a second time on the same instance.
    #[error("cannot reinitialize {collection}")]
    Reinitialization {
        /// The concrete collection type.
        collection: TypeName,
    },

    /// A key or index failed its shape constraint.
    #[error("invalid key given to '{collection}': {reason}")]
    InvalidKey {
        /// The concrete collection type.
        collection: TypeName,
        /// What was wrong with the key.
        reason: String,
    },

    /// A value does not satisfy the collection's accepted-type set.
    #[error(
        "invalid value type given to '{collection}', expected one of [{expected}] but was given '{actual}'"
    )]
    TypeMismatch {
        /// The concrete collection type.
        collection: TypeName,
        /// The accepted-type set.
        expected: TypeSet,
        /// The runtime type of the rejected value.
        actual: TypeName,
    },

    /// A cross-collection operation received a collection of another concrete type.
    #[error("{operation} operation must be on same type as '{expected}', got '{actual}'")]
    CollectionMismatch {
        /// The operation that was attempted.
        operation: &'static str,
        /// The receiver's concrete type.
        expected: TypeName,
        /// The argument's concrete type.
        actual: TypeName,
    },

    /// A lookup, removal, or replacement targeted an absent key or index.
    #[error("{target} not found in '{collection}'{}", default_hint(.no_default))]
    NotFound {
        /// The concrete collection type.
        collection: TypeName,
        /// The missing key or index.
        target: Target,
        /// Whether the lookup was made without a fallback default.
        no_default: bool,
    },

    /// A collection type was declared without any accepted types.
    #[error("no valid types specified for '{collection}'")]
    EmptyTypeSet {
        /// The concrete collection type.
        collection: TypeName,
    },
}

impl ErrorKind {
    /// Returns true for the kinds reported as type errors.
    #[must_use]
    pub const fn is_type_error(&self) -> bool {
        matches!(
            self,
            Self::TypeMismatch { .. } | Self::CollectionMismatch { .. }
        )
    }
}

fn default_hint(no_default: &bool) -> &'static str {
    if *no_default {
        " and no default provided"
    } else {
        ""
    }
}

/// The key or index named by a [`ErrorKind::NotFound`] error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A string key.
    Key(String),
    /// A list index.
    Index(usize),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, "key '{key}'"),
            Self::Index(index) => write!(f, "index {index}"),
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The collection operation that failed.
    pub operation: Option<&'static str>,
    /// Position of the offending entry within the input, for bulk operations.
    pub position: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation name.
    #[must_use]
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Sets the position of the offending entry.
    #[must_use]
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = self.operation {
            write!(f, "in {operation}")?;
        }
        if let Some(position) = self.position {
            if self.operation.is_some() {
                write!(f, " ")?;
            }
            write!(f, "at entry {position}")?;
        }
        Ok(())
    }
}
