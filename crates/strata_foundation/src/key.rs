//! Keys and raw construction keys.
//!
//! Map-like collections are keyed by [`Key`], a non-empty string. Construction
//! accepts [`EntryKey`]s, which may be integers or strings, and each collection
//! validates them against its own shape rule.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::error::Error;
use crate::types::TypeName;

/// A validated, non-empty string key.
///
/// Cloning is O(1); the text is shared.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Key(Arc<str>);

impl Key {
    /// Creates a key, rejecting the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidKey`](crate::ErrorKind::InvalidKey) if `text` is empty.
    pub fn new(text: impl AsRef<str>) -> Result<Self> {
        Self::for_collection(text, &TypeName::new("Key"))
    }

    /// Creates a key on behalf of `collection`, which is named in the error.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidKey`](crate::ErrorKind::InvalidKey) if `text` is empty.
    pub fn for_collection(text: impl AsRef<str>, collection: &TypeName) -> Result<Self> {
        let text = text.as_ref();
        if text.is_empty() {
            return Err(Error::invalid_key(
                collection.clone(),
                "key must be a valid string",
            ));
        }
        Ok(Self(text.into()))
    }

    /// Returns the key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Key {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl TryFrom<String> for Key {
    type Error = Error;

    fn try_from(text: String) -> Result<Self> {
        Self::new(text)
    }
}

impl TryFrom<&str> for Key {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self> {
        Self::new(text)
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.0.to_string()
    }
}

/// A raw key handed to a collection constructor.
///
/// Lists accept integers and integer-like strings; maps accept non-empty strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryKey {
    /// An integer key.
    Int(i64),
    /// A string key.
    Str(String),
}

impl EntryKey {
    /// Interprets this key as a list index.
    ///
    /// Integers and strings that parse as integers (`"12"`, `"-3"`) are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidKey`](crate::ErrorKind::InvalidKey) for any other string.
    pub fn to_index(&self, collection: &TypeName) -> Result<i64> {
        match self {
            Self::Int(index) => Ok(*index),
            Self::Str(text) => text
                .trim()
                .parse::<i64>()
                .map_err(|_| Error::invalid_key(collection.clone(), "index must be a valid integer")),
        }
    }

    /// Interprets this key as a map key.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidKey`](crate::ErrorKind::InvalidKey) for integers and
    /// empty strings.
    pub fn to_key(&self, collection: &TypeName) -> Result<Key> {
        match self {
            Self::Int(_) => Err(Error::invalid_key(
                collection.clone(),
                "key must be a valid string",
            )),
            Self::Str(text) => Key::for_collection(text, collection),
        }
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(index) => write!(f, "{index}"),
            Self::Str(text) => write!(f, "{text:?}"),
        }
    }
}

impl From<i64> for EntryKey {
    fn from(index: i64) -> Self {
        Self::Int(index)
    }
}

impl From<i32> for EntryKey {
    fn from(index: i32) -> Self {
        Self::Int(i64::from(index))
    }
}

impl From<usize> for EntryKey {
    fn from(index: usize) -> Self {
        i64::try_from(index).map_or_else(|_| Self::Str(index.to_string()), Self::Int)
    }
}

impl From<&str> for EntryKey {
    fn from(text: &str) -> Self {
        Self::Str(text.to_string())
    }
}

impl From<String> for EntryKey {
    fn from(text: String) -> Self {
        Self::Str(text)
    }
}

impl From<Key> for EntryKey {
    fn from(key: Key) -> Self {
        Self::Str(key.as_str().to_string())
    }
}

impl From<&Key> for EntryKey {
    fn from(key: &Key) -> Self {
        Self::Str(key.as_str().to_string())
    }
}
