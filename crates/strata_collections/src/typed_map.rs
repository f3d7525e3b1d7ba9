//! Persistent, string-keyed, type-constrained map.

use std::fmt;
use std::sync::Arc;

use strata_foundation::{EntryKey, Key, OrderedMap, Result, Schema, Target, TypeName, TypeSet};

use crate::element::Element;
use crate::validate::Validator;

/// A persistent map from non-empty string keys to elements conforming to its schema.
///
/// Iteration follows insertion order. Overwriting a key keeps its position;
/// removing and re-adding a key moves it to the end.
///
/// # Example
///
/// ```
/// use strata_collections::TypedMap;
/// use strata_foundation::{Schema, Value};
///
/// let schema = Schema::new("Settings", ["int", "bool"]).unwrap();
/// let map = TypedMap::new(schema, [("retries", Value::Int(3))]).unwrap();
/// let more = map.with("verbose", Value::Bool(true)).unwrap();
///
/// assert!(!map.has("verbose"));
/// assert_eq!(more.get("verbose").unwrap(), Value::Bool(true));
/// ```
#[derive(Clone)]
pub struct TypedMap<E: Element> {
    schema: Arc<Schema>,
    entries: OrderedMap<Key, E>,
}

impl<E: Element> TypedMap<E> {
    /// Builds a map from keyed entries, in order.
    ///
    /// A repeated key overwrites the earlier value in place.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` for integer or empty keys, or `TypeMismatch` for an
    /// element that does not conform to the schema.
    pub fn new<I, K>(schema: impl Into<Arc<Schema>>, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, E)>,
        K: Into<EntryKey>,
    {
        Self::collect(schema.into(), entries, "TypedMap::new")
    }

    pub(crate) fn collect<I, K>(
        schema: Arc<Schema>,
        entries: I,
        operation: &'static str,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (K, E)>,
        K: Into<EntryKey>,
    {
        let validator = Validator::new(&schema, operation);
        let mut map = OrderedMap::new();
        for (position, (key, element)) in entries.into_iter().enumerate() {
            let validator = validator.at(position);
            let key = validator.map_key(&key.into())?;
            validator.check_element(&element)?;
            map = map.insert(key, element);
        }
        tracing::trace!(collection = %schema.kind(), count = map.len(), "built map");
        Ok(Self {
            schema,
            entries: map,
        })
    }

    /// Creates an empty map of the given type.
    #[must_use]
    pub fn with_schema(schema: impl Into<Arc<Schema>>) -> Self {
        Self {
            schema: schema.into(),
            entries: OrderedMap::new(),
        }
    }

    /// Returns an empty map of the same type as this one.
    #[must_use]
    pub fn empty(&self) -> Self {
        self.derive(OrderedMap::new())
    }

    fn derive(&self, entries: OrderedMap<Key, E>) -> Self {
        Self {
            schema: Arc::clone(&self.schema),
            entries,
        }
    }

    fn validator(&self, operation: &'static str) -> Validator<'_> {
        Validator::new(&self.schema, operation)
    }

    /// The schema this map was built with.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The concrete map type.
    #[must_use]
    pub fn kind(&self) -> &TypeName {
        self.schema.kind()
    }

    /// The accepted-type set.
    #[must_use]
    pub fn valid_types(&self) -> &TypeSet {
        self.schema.accepts()
    }

    /// Returns the keys in order.
    #[must_use]
    pub fn keys(&self) -> Vec<Key> {
        self.entries.keys().cloned().collect()
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the element stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `key` is absent.
    pub fn get(&self, key: &str) -> Result<E> {
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| self.validator("get").not_found(Target::Key(key.into()), true))
    }

    /// Returns the element stored under `key`, or `default` if absent.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if `default` is given and does not conform.
    pub fn get_or(&self, key: &str, default: Option<E>) -> Result<Option<E>> {
        if let Some(default) = &default {
            self.validator("get_or").check_element(default)?;
        }
        Ok(self.entries.get(key).cloned().or(default))
    }

    /// Returns a map with `element` stored under `key`.
    ///
    /// An existing key keeps its position; a new key is appended.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` for an empty key, or `TypeMismatch` if `element`
    /// does not conform.
    pub fn with(&self, key: &str, element: E) -> Result<Self> {
        let validator = self.validator("with");
        let key = validator.check_key(key)?;
        validator.check_element(&element)?;
        Ok(self.derive(self.entries.insert(key, element)))
    }

    /// Returns a map without `key`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `key` is absent.
    pub fn without(&self, key: &str) -> Result<Self> {
        let (entries, _) = self
            .entries
            .remove(key)
            .ok_or_else(|| self.validator("without").not_found(Target::Key(key.into()), false))?;
        Ok(self.derive(entries))
    }

    /// Returns the first key whose element equals `element`.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if `element` does not conform.
    pub fn find(&self, element: &E) -> Result<Option<Key>> {
        self.validator("find").check_element(element)?;
        Ok(self.search(|_, item| item == element))
    }

    /// Returns the first element in order, if any.
    #[must_use]
    pub fn first(&self) -> Option<E> {
        self.entries.first().map(|(_, element)| element.clone())
    }

    /// Returns the last element in order, if any.
    #[must_use]
    pub fn last(&self) -> Option<E> {
        self.entries.last().map(|(_, element)| element.clone())
    }

    /// Returns true if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns a map with the entries of `other` laid over this one.
    ///
    /// Values from `other` win; its new keys are appended in its order.
    ///
    /// # Errors
    ///
    /// Returns `CollectionMismatch` if `other` is a different map type.
    pub fn merge(&self, other: &Self) -> Result<Self> {
        self.validator("merge").check_same_kind(&other.schema)?;
        Ok(self.derive(self.entries.union(&other.entries)))
    }

    /// Returns the entries of this map whose keys are also in `other`.
    ///
    /// # Errors
    ///
    /// Returns `CollectionMismatch` if `other` is a different map type.
    pub fn intersect(&self, other: &Self) -> Result<Self> {
        self.validator("intersect").check_same_kind(&other.schema)?;
        Ok(self.derive(self.entries.retain(|key, _| other.entries.contains_key(key))))
    }

    /// Returns the entries of this map whose keys are not in `other`.
    ///
    /// # Errors
    ///
    /// Returns `CollectionMismatch` if `other` is a different map type.
    pub fn diff(&self, other: &Self) -> Result<Self> {
        self.validator("diff").check_same_kind(&other.schema)?;
        Ok(self.derive(self.entries.retain(|key, _| !other.entries.contains_key(key))))
    }

    /// Returns the entries matching `predicate`.
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&Key, &E) -> bool,
    {
        self.derive(self.entries.retain(predicate))
    }

    /// Returns the first key whose entry matches `predicate`.
    pub fn search<P>(&self, mut predicate: P) -> Option<Key>
    where
        P: FnMut(&Key, &E) -> bool,
    {
        self.entries
            .iter()
            .find(|&(key, element)| predicate(key, element))
            .map(|(key, _)| key.clone())
    }

    /// Returns a map of the same type holding `f` applied to every entry.
    ///
    /// Keys and order are preserved.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` for the first output that does not conform.
    pub fn map<F>(&self, mut f: F) -> Result<Self>
    where
        F: FnMut(&Key, &E) -> E,
    {
        let validator = self.validator("map");
        let mut entries = OrderedMap::new();
        for (position, (key, element)) in self.entries.iter().enumerate() {
            let mapped = f(key, element);
            validator.at(position).check_element(&mapped)?;
            entries = entries.insert(key.clone(), mapped);
        }
        Ok(self.derive(entries))
    }

    /// Folds the entries in order.
    pub fn reduce<A, F>(&self, mut f: F, init: A) -> A
    where
        F: FnMut(A, &Key, &E) -> A,
    {
        self.entries
            .iter()
            .fold(init, |acc, (key, element)| f(acc, key, element))
    }

    /// Returns true if `other` is the same map type with equal entries in the same order.
    ///
    /// # Errors
    ///
    /// Returns `CollectionMismatch` if `other` is a different map type.
    pub fn equals(&self, other: &Self) -> Result<bool> {
        self.validator("equals").check_same_kind(&other.schema)?;
        Ok(self.entries == other.entries)
    }

    /// Returns the entries as an owned vector.
    #[must_use]
    pub fn unwrap(&self) -> Vec<(Key, E)> {
        self.iter().collect()
    }

    /// Returns an iterator over clones of the entries, in order.
    pub fn iter(&self) -> impl Iterator<Item = (Key, E)> + '_ {
        self.entries
            .iter()
            .map(|(key, element)| (key.clone(), element.clone()))
    }
}

impl<E: Element> PartialEq for TypedMap<E> {
    fn eq(&self, other: &Self) -> bool {
        self.schema.same_kind(&other.schema) && self.entries == other.entries
    }
}

impl<E: Element> fmt::Debug for TypedMap<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())?;
        f.debug_map().entries(self.entries.iter()).finish()
    }
}
