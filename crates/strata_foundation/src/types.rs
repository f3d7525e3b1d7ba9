//! Type names, accepted-type sets, and collection schemas.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::error::Error;

/// Name of a runtime type, interface, or concrete collection type.
///
/// Cloning is O(1); the text is shared.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeName(Arc<str>);

impl TypeName {
    /// Creates a type name.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeName({})", self.0)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeName {
    fn from(name: String) -> Self {
        Self(name.into())
    }
}

impl PartialEq<str> for TypeName {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for TypeName {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

/// Immutable, non-empty, ordered set of accepted type names.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<TypeName>", into = "Vec<TypeName>")
)]
pub struct TypeSet(Arc<[TypeName]>);

impl TypeSet {
    /// Creates an accepted-type set for `collection`.
    ///
    /// Duplicate names are dropped; the first occurrence keeps its position.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::EmptyTypeSet`](crate::ErrorKind::EmptyTypeSet) if no
    /// non-empty names are given.
    pub fn new<I, T>(collection: TypeName, types: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeName>,
    {
        let mut names: Vec<TypeName> = Vec::new();
        for name in types.into_iter().map(Into::into) {
            if !name.as_str().is_empty() && !names.contains(&name) {
                names.push(name);
            }
        }
        if names.is_empty() {
            return Err(Error::empty_type_set(collection));
        }
        Ok(Self(names.into()))
    }

    /// The implicit set accepted by untyped maps.
    #[must_use]
    pub fn scalar_or_array() -> Self {
        Self(vec![TypeName::new("scalar"), TypeName::new("array")].into())
    }

    /// Returns true if `name` is in the set.
    #[must_use]
    pub fn contains(&self, name: &TypeName) -> bool {
        self.0.contains(name)
    }

    /// Returns the number of accepted types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a type set is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the accepted types in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeName> {
        self.0.iter()
    }
}

impl TryFrom<Vec<TypeName>> for TypeSet {
    type Error = Error;

    fn try_from(names: Vec<TypeName>) -> Result<Self> {
        Self::new(TypeName::new("TypeSet"), names)
    }
}

impl From<TypeSet> for Vec<TypeName> {
    fn from(set: TypeSet) -> Self {
        set.0.to_vec()
    }
}

impl fmt::Debug for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}")?;
        }
        Ok(())
    }
}

/// Declaration of a concrete collection type.
///
/// A schema names the concrete type (`kind`) and fixes the types its elements
/// must satisfy. Two collections are the same concrete type exactly when both
/// the kind and the accepted types are equal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    kind: TypeName,
    accepts: TypeSet,
}

impl Schema {
    /// Declares a concrete collection type.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::EmptyTypeSet`](crate::ErrorKind::EmptyTypeSet) if `accepts`
    /// names no types.
    pub fn new<I, T>(kind: impl Into<TypeName>, accepts: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeName>,
    {
        let kind = kind.into();
        let accepts = TypeSet::new(kind.clone(), accepts)?;
        Ok(Self { kind, accepts })
    }

    /// Declares an untyped map kind accepting scalars and arrays.
    #[must_use]
    pub fn untyped(kind: impl Into<TypeName>) -> Self {
        Self {
            kind: kind.into(),
            accepts: TypeSet::scalar_or_array(),
        }
    }

    /// The concrete collection type name.
    #[must_use]
    pub fn kind(&self) -> &TypeName {
        &self.kind
    }

    /// The accepted-type set.
    #[must_use]
    pub fn accepts(&self) -> &TypeSet {
        &self.accepts
    }

    /// Returns true if `other` declares the same concrete type.
    ///
    /// A schema reusing a kind name with different accepted types is a
    /// different type.
    #[must_use]
    pub fn same_kind(&self, other: &Self) -> bool {
        self.kind == other.kind && self.accepts == other.accepts
    }
}
