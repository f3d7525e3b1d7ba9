//! Untyped map of scalar and array values.

use std::fmt;

use strata_foundation::{EntryKey, Key, Result, Schema, TypeName, Value};

use crate::typed_map::TypedMap;

/// A persistent, insertion-ordered map from non-empty string keys to values
/// that are scalars or arrays.
///
/// `Nil` and `Object` values are rejected.
///
/// # Example
///
/// ```
/// use strata_collections::Map;
/// use strata_foundation::Value;
///
/// let map = Map::new("Headers", [("host", "example.org")]).unwrap();
/// let more = map.with("port", 8080).unwrap();
///
/// assert_eq!(map.count(), 1);
/// assert_eq!(more.get("port").unwrap(), Value::Int(8080));
/// assert!(map.with("none", Value::Nil).is_err());
/// ```
#[derive(Clone, PartialEq)]
pub struct Map {
    inner: TypedMap<Value>,
}

impl Map {
    /// Builds a map of the given kind from keyed entries, in order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` for integer or empty keys, or `TypeMismatch` for a
    /// value that is not a scalar or array.
    pub fn new<I, K, V>(kind: impl Into<TypeName>, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<EntryKey>,
        V: Into<Value>,
    {
        let schema = Schema::untyped(kind);
        let entries = entries
            .into_iter()
            .map(|(key, value)| (key, Into::<Value>::into(value)));
        let inner = TypedMap::collect(schema.into(), entries, "Map::new")?;
        Ok(Self { inner })
    }

    /// Creates an empty map of the given kind.
    #[must_use]
    pub fn with_kind(kind: impl Into<TypeName>) -> Self {
        Self {
            inner: TypedMap::with_schema(Schema::untyped(kind)),
        }
    }

    /// Returns an empty map of the same kind as this one.
    #[must_use]
    pub fn empty(&self) -> Self {
        Self {
            inner: self.inner.empty(),
        }
    }

    /// The concrete map type.
    #[must_use]
    pub fn kind(&self) -> &TypeName {
        self.inner.kind()
    }

    /// Returns the keys in order.
    #[must_use]
    pub fn keys(&self) -> Vec<Key> {
        self.inner.keys()
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.inner.has(key)
    }

    /// Returns the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `key` is absent.
    pub fn get(&self, key: &str) -> Result<Value> {
        self.inner.get(key)
    }

    /// Returns the value stored under `key`, or `default` if absent.
    ///
    /// A `Nil` default is returned as-is; any other default must be a scalar
    /// or array.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` for a non-`Nil` default that is not a scalar or array.
    pub fn get_or(&self, key: &str, default: impl Into<Value>) -> Result<Value> {
        let default = default.into();
        let default = (!default.is_nil()).then_some(default);
        Ok(self.inner.get_or(key, default)?.unwrap_or(Value::Nil))
    }

    /// Returns a map with `value` stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` for an empty key, or `TypeMismatch` for a value
    /// that is not a scalar or array.
    pub fn with(&self, key: &str, value: impl Into<Value>) -> Result<Self> {
        Ok(Self {
            inner: self.inner.with(key, value.into())?,
        })
    }

    /// Returns a map without `key`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `key` is absent.
    pub fn without(&self, key: &str) -> Result<Self> {
        Ok(Self {
            inner: self.inner.without(key)?,
        })
    }

    /// Returns the first value in order, if any.
    #[must_use]
    pub fn first(&self) -> Option<Value> {
        self.inner.first()
    }

    /// Returns the last value in order, if any.
    #[must_use]
    pub fn last(&self) -> Option<Value> {
        self.inner.last()
    }

    /// Returns true if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn count(&self) -> usize {
        self.inner.count()
    }

    /// Returns true if both maps hold equal entries in the same order.
    ///
    /// # Errors
    ///
    /// Returns `CollectionMismatch` if `other` is a different map kind.
    pub fn equals(&self, other: &Self) -> Result<bool> {
        self.inner.equals(&other.inner)
    }

    /// Returns the entries as an owned vector.
    #[must_use]
    pub fn unwrap(&self) -> Vec<(Key, Value)> {
        self.inner.unwrap()
    }

    /// Returns an iterator over the entries, in order.
    pub fn iter(&self) -> impl Iterator<Item = (Key, Value)> + '_ {
        self.inner.iter()
    }

    /// Returns an iterator over the values, in order.
    pub fn values(&self) -> impl Iterator<Item = Value> + '_ {
        self.inner.iter().map(|(_, value)| value)
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}
