//! One-shot initialization for collections built after their owner.
//!
//! Collections themselves are always constructed fully populated in one step.
//! Some owners only learn their contents later; [`Deferred`] holds such a
//! collection slot and enforces the two lifecycle rules:
//!
//! - reading before initialization fails with
//!   [`ErrorKind::Uninitialized`](crate::ErrorKind::Uninitialized)
//! - initializing twice fails with
//!   [`ErrorKind::Reinitialization`](crate::ErrorKind::Reinitialization)

use std::fmt;
use std::sync::OnceLock;

use crate::Result;
use crate::error::Error;
use crate::types::TypeName;

/// A collection slot that is filled exactly once.
///
/// Once filled, the slot never changes again, so shared readers need no locking.
pub struct Deferred<C> {
    collection: TypeName,
    cell: OnceLock<C>,
}

impl<C> Deferred<C> {
    /// Creates an empty slot for a collection of the given concrete type.
    #[must_use]
    pub fn new(collection: impl Into<TypeName>) -> Self {
        Self {
            collection: collection.into(),
            cell: OnceLock::new(),
        }
    }

    /// Fills the slot.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Reinitialization`](crate::ErrorKind::Reinitialization) if the
    /// slot was already filled. The existing contents are kept.
    pub fn init(&self, value: C) -> Result<()> {
        self.cell.set(value).map_err(|_| {
            tracing::debug!(collection = %self.collection, "rejected second initialization");
            Error::reinitialization(self.collection.clone())
        })
    }

    /// Fills the slot with the result of `build`, propagating its error.
    ///
    /// `build` is not called if the slot is already filled.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Reinitialization`](crate::ErrorKind::Reinitialization) if the
    /// slot was already filled, or the error returned by `build`.
    pub fn init_with<F>(&self, build: F) -> Result<()>
    where
        F: FnOnce() -> Result<C>,
    {
        if self.is_initialized() {
            return Err(Error::reinitialization(self.collection.clone()));
        }
        self.init(build()?)
    }

    /// Returns the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Uninitialized`](crate::ErrorKind::Uninitialized) if the slot
    /// has not been filled.
    pub fn get(&self) -> Result<&C> {
        self.cell
            .get()
            .ok_or_else(|| Error::uninitialized(self.collection.clone()))
    }

    /// Returns true if the slot has been filled.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// The concrete collection type this slot holds.
    #[must_use]
    pub fn collection(&self) -> &TypeName {
        &self.collection
    }

    /// Consumes the slot, returning the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Uninitialized`](crate::ErrorKind::Uninitialized) if the slot
    /// has not been filled.
    pub fn into_inner(self) -> Result<C> {
        let collection = self.collection;
        self.cell
            .into_inner()
            .ok_or_else(|| Error::uninitialized(collection))
    }
}

impl<C: fmt::Debug> fmt::Debug for Deferred<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(value) => f
                .debug_tuple("Deferred")
                .field(&self.collection)
                .field(value)
                .finish(),
            None => write!(f, "Deferred({}, <uninitialized>)", self.collection),
        }
    }
}
