//! Persistent, index-addressed, type-constrained list.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use strata_foundation::{EntryKey, PVec, Result, Schema, Target, TypeName, TypeSet};

use crate::element::Element;
use crate::validate::Validator;

/// A persistent list whose elements all conform to its schema.
///
/// Indices are always dense: `0..count()`. Every modifying operation returns a
/// new list and leaves the receiver untouched; unchanged structure is shared.
///
/// # Example
///
/// ```
/// use strata_collections::TypedList;
/// use strata_foundation::{Schema, Value};
///
/// let schema = Schema::new("IntList", ["int"]).unwrap();
/// let list = TypedList::from_elements(schema, [Value::Int(1), Value::Int(2)]).unwrap();
/// let longer = list.push(Value::Int(3)).unwrap();
///
/// assert_eq!(list.count(), 2);
/// assert_eq!(longer.count(), 3);
/// assert!(list.push(Value::from("three")).is_err());
/// ```
#[derive(Clone)]
pub struct TypedList<E: Element> {
    schema: Arc<Schema>,
    items: PVec<E>,
}

impl<E: Element> TypedList<E> {
    /// Builds a list from keyed entries.
    ///
    /// Keys must be integers or integer-like strings and are otherwise
    /// discarded: elements are re-indexed densely in input order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` for a non-integer key, or `TypeMismatch` for an
    /// element that does not conform to the schema.
    pub fn new<I, K>(schema: impl Into<Arc<Schema>>, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, E)>,
        K: Into<EntryKey>,
    {
        let schema = schema.into();
        let validator = Validator::new(&schema, "TypedList::new");
        let mut items = Vec::new();
        for (position, (key, element)) in entries.into_iter().enumerate() {
            let validator = validator.at(position);
            validator.list_index(&key.into())?;
            validator.check_element(&element)?;
            items.push(element);
        }
        Ok(Self::build(schema, items.into_iter().collect()))
    }

    /// Builds a list from elements in order.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` for an element that does not conform to the schema.
    pub fn from_elements<I>(schema: impl Into<Arc<Schema>>, elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
    {
        let schema = schema.into();
        let items: PVec<E> = elements.into_iter().collect();
        Validator::new(&schema, "TypedList::from_elements").check_all(&items)?;
        Ok(Self::build(schema, items))
    }

    /// Creates an empty list of the given type.
    #[must_use]
    pub fn with_schema(schema: impl Into<Arc<Schema>>) -> Self {
        Self::build(schema.into(), PVec::new())
    }

    /// Returns an empty list of the same type as this one.
    #[must_use]
    pub fn empty(&self) -> Self {
        self.derive(PVec::new())
    }

    fn build(schema: Arc<Schema>, items: PVec<E>) -> Self {
        tracing::trace!(collection = %schema.kind(), count = items.len(), "built list");
        Self { schema, items }
    }

    fn derive(&self, items: PVec<E>) -> Self {
        Self {
            schema: Arc::clone(&self.schema),
            items,
        }
    }

    fn validator(&self, operation: &'static str) -> Validator<'_> {
        Validator::new(&self.schema, operation)
    }

    /// The schema this list was built with.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The concrete list type.
    #[must_use]
    pub fn kind(&self) -> &TypeName {
        self.schema.kind()
    }

    /// The accepted-type set.
    #[must_use]
    pub fn valid_types(&self) -> &TypeSet {
        self.schema.accepts()
    }

    /// Returns true if `index` is present.
    #[must_use]
    pub fn has(&self, index: usize) -> bool {
        index < self.items.len()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `index` is out of range.
    pub fn get(&self, index: usize) -> Result<E> {
        self.items
            .get(index)
            .cloned()
            .ok_or_else(|| self.validator("get").not_found(Target::Index(index), true))
    }

    /// Returns the element at `index`, or `default` if out of range.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if `default` is given and does not conform.
    pub fn get_or(&self, index: usize, default: Option<E>) -> Result<Option<E>> {
        if let Some(default) = &default {
            self.validator("get_or").check_element(default)?;
        }
        Ok(self.items.get(index).cloned().or(default))
    }

    /// Returns a list with the element at `index` replaced.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if `element` does not conform, or `NotFound` if
    /// `index` is out of range.
    pub fn with(&self, index: usize, element: E) -> Result<Self> {
        let validator = self.validator("with");
        validator.check_element(&element)?;
        let items = self
            .items
            .update(index, element)
            .ok_or_else(|| validator.not_found(Target::Index(index), false))?;
        Ok(self.derive(items))
    }

    /// Returns a list without the element at `index`; later elements shift down.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `index` is out of range.
    pub fn without(&self, index: usize) -> Result<Self> {
        let (items, _) = self
            .items
            .remove(index)
            .ok_or_else(|| self.validator("without").not_found(Target::Index(index), false))?;
        Ok(self.derive(items))
    }

    /// Returns the index of the first element equal to `element`.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if `element` does not conform.
    pub fn find(&self, element: &E) -> Result<Option<usize>> {
        self.validator("find").check_element(element)?;
        Ok(self.items.iter().position(|item| item == element))
    }

    /// Returns the first element, if any.
    #[must_use]
    pub fn first(&self) -> Option<E> {
        self.items.first().cloned()
    }

    /// Returns the last element, if any.
    #[must_use]
    pub fn last(&self) -> Option<E> {
        self.items.last().cloned()
    }

    /// Returns true if the list has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns this list followed by `other`.
    ///
    /// # Errors
    ///
    /// Returns `CollectionMismatch` if `other` is a different list type.
    pub fn append(&self, other: &Self) -> Result<Self> {
        self.validator("append").check_same_kind(&other.schema)?;
        Ok(self.derive(self.items.append(&other.items)))
    }

    /// Returns a list with `element` added at the end.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if `element` does not conform.
    pub fn push(&self, element: E) -> Result<Self> {
        self.validator("push").check_element(&element)?;
        Ok(self.derive(self.items.push_back(element)))
    }

    /// Returns a list with `element` added at the front.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if `element` does not conform.
    pub fn unshift(&self, element: E) -> Result<Self> {
        self.validator("unshift").check_element(&element)?;
        Ok(self.derive(self.items.push_front(element)))
    }

    /// Returns the list in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.derive(self.items.reversed())
    }

    /// Returns a list where every element matching `predicate` is replaced by
    /// a clone of `replacement`.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if `replacement` does not conform.
    pub fn replace<P>(&self, mut predicate: P, replacement: E) -> Result<Self>
    where
        P: FnMut(&E) -> bool,
    {
        self.validator("replace").check_element(&replacement)?;
        let items = self
            .items
            .iter()
            .map(|item| {
                if predicate(item) {
                    replacement.clone()
                } else {
                    item.clone()
                }
            })
            .collect();
        Ok(self.derive(items))
    }

    /// Returns the list ordered by `cmp`. Equal elements may be reordered.
    #[must_use]
    pub fn sort<F>(&self, cmp: F) -> Self
    where
        F: Fn(&E, &E) -> Ordering,
    {
        self.derive(self.items.sorted_by(cmp))
    }

    /// Returns the elements matching `predicate`, re-indexed densely.
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&E) -> bool,
    {
        self.derive(self.items.retain(predicate))
    }

    /// Returns the index of the first element matching `predicate`.
    pub fn search<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&E) -> bool,
    {
        self.items.iter().position(predicate)
    }

    /// Returns a list of the same type holding `f` applied to every element.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` for the first output that does not conform.
    pub fn map<F>(&self, f: F) -> Result<Self>
    where
        F: FnMut(&E) -> E,
    {
        let items: PVec<E> = self.items.iter().map(f).collect();
        self.validator("map").check_all(&items)?;
        Ok(self.derive(items))
    }

    /// Folds the elements in order.
    pub fn reduce<A, F>(&self, f: F, init: A) -> A
    where
        F: FnMut(A, &E) -> A,
    {
        self.items.iter().fold(init, f)
    }

    /// Returns the elements as an owned vector.
    #[must_use]
    pub fn unwrap(&self) -> Vec<E> {
        self.iter().collect()
    }

    /// Returns an iterator over clones of the elements.
    pub fn iter(&self) -> impl Iterator<Item = E> + '_ {
        self.items.iter().cloned()
    }
}

impl<E: Element> PartialEq for TypedList<E> {
    fn eq(&self, other: &Self) -> bool {
        self.schema.same_kind(&other.schema) && self.items == other.items
    }
}

impl<E: Element> fmt::Debug for TypedList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())?;
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<'a, E: Element> IntoIterator for &'a TypedList<E> {
    type Item = E;
    type IntoIter = std::iter::Cloned<<&'a PVec<E> as IntoIterator>::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        (&self.items).into_iter().cloned()
    }
}
