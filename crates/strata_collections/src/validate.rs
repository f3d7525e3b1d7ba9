//! Input validation shared by every collection operation.
//!
//! A [`Validator`] is bound to the receiver's schema and the name of the
//! operation being performed. Rejections are logged at debug level and carry
//! an [`ErrorContext`] naming the operation, plus the entry position for bulk
//! inputs.

use strata_foundation::{EntryKey, Error, ErrorContext, Key, Result, Schema, Target};

use crate::element::Element;

/// Checks inputs against a collection schema.
#[derive(Clone, Copy, Debug)]
pub struct Validator<'a> {
    schema: &'a Schema,
    operation: &'static str,
    position: Option<usize>,
}

impl<'a> Validator<'a> {
    /// Creates a validator for `operation` on a collection with `schema`.
    #[must_use]
    pub fn new(schema: &'a Schema, operation: &'static str) -> Self {
        Self {
            schema,
            operation,
            position: None,
        }
    }

    /// Returns a validator that also reports `position` on rejection.
    #[must_use]
    pub fn at(self, position: usize) -> Self {
        Self {
            position: Some(position),
            ..self
        }
    }

    /// Fails with a type error unless `element` conforms to an accepted type.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::TypeMismatch`](strata_foundation::ErrorKind::TypeMismatch).
    pub fn check_element<E: Element>(&self, element: &E) -> Result<()> {
        let accepts = self.schema.accepts();
        if accepts.iter().any(|ty| element.conforms_to(ty)) {
            return Ok(());
        }
        let actual = element.type_name();
        tracing::debug!(
            collection = %self.schema.kind(),
            operation = self.operation,
            %actual,
            "rejected element"
        );
        Err(self.annotate(Error::type_mismatch(
            self.schema.kind().clone(),
            accepts.clone(),
            actual,
        )))
    }

    /// Checks every element of a bulk input, reporting the first offender's position.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::TypeMismatch`](strata_foundation::ErrorKind::TypeMismatch).
    pub fn check_all<'e, E, I>(&self, elements: I) -> Result<()>
    where
        E: Element + 'e,
        I: IntoIterator<Item = &'e E>,
    {
        elements
            .into_iter()
            .enumerate()
            .try_for_each(|(position, element)| self.at(position).check_element(element))
    }

    /// Fails with a type error unless `other` declares the same concrete type.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::CollectionMismatch`](strata_foundation::ErrorKind::CollectionMismatch).
    pub fn check_same_kind(&self, other: &Schema) -> Result<()> {
        if self.schema.same_kind(other) {
            return Ok(());
        }
        tracing::debug!(
            collection = %self.schema.kind(),
            operation = self.operation,
            other = %other.kind(),
            "rejected foreign collection"
        );
        Err(self.annotate(Error::collection_mismatch(
            self.operation,
            self.schema.kind().clone(),
            other.kind().clone(),
        )))
    }

    /// Fails with a not found error unless `present` holds.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::NotFound`](strata_foundation::ErrorKind::NotFound).
    pub fn check_present(&self, present: bool, target: Target, no_default: bool) -> Result<()> {
        if present {
            return Ok(());
        }
        Err(self.not_found(target, no_default))
    }

    /// Builds the not found error for an absent `target`.
    #[must_use]
    pub fn not_found(&self, target: Target, no_default: bool) -> Error {
        tracing::trace!(
            collection = %self.schema.kind(),
            operation = self.operation,
            %target,
            "missing target"
        );
        self.annotate(Error::not_found(
            self.schema.kind().clone(),
            target,
            no_default,
        ))
    }

    /// Validates a key given to a map operation.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidKey`](strata_foundation::ErrorKind::InvalidKey) for
    /// the empty string.
    pub fn check_key(&self, key: &str) -> Result<Key> {
        Key::for_collection(key, self.schema.kind()).map_err(|err| self.reject_key(err))
    }

    /// Interprets a construction key as a map key.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidKey`](strata_foundation::ErrorKind::InvalidKey) for
    /// integers and empty strings.
    pub fn map_key(&self, key: &EntryKey) -> Result<Key> {
        key.to_key(self.schema.kind())
            .map_err(|err| self.reject_key(err))
    }

    /// Interprets a construction key as a list index.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidKey`](strata_foundation::ErrorKind::InvalidKey) for
    /// strings that are not integer-like.
    pub fn list_index(&self, key: &EntryKey) -> Result<i64> {
        key.to_index(self.schema.kind())
            .map_err(|err| self.reject_key(err))
    }

    fn reject_key(&self, err: Error) -> Error {
        tracing::debug!(
            collection = %self.schema.kind(),
            operation = self.operation,
            "rejected key"
        );
        self.annotate(err)
    }

    fn annotate(&self, err: Error) -> Error {
        let context = ErrorContext::new().with_operation(self.operation);
        let context = match self.position {
            Some(position) => context.with_position(position),
            None => context,
        };
        err.with_context(context)
    }
}
