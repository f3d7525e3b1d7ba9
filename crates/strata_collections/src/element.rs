//! The element contract for typed collections.

use std::fmt;

use strata_foundation::{TypeName, Value};

/// A value that can be stored in a typed collection.
///
/// Every element reports a runtime type name. A collection accepts an element
/// when it conforms to at least one name in the collection's accepted-type set.
///
/// # Example
///
/// ```
/// use strata_collections::Element;
/// use strata_foundation::TypeName;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Moment(i64);
///
/// impl Element for Moment {
///     fn type_name(&self) -> TypeName {
///         TypeName::new("Moment")
///     }
///
///     fn conforms_to(&self, ty: &TypeName) -> bool {
///         *ty == "Moment" || *ty == "Instant"
///     }
/// }
///
/// assert!(Moment(0).conforms_to(&"Instant".into()));
/// ```
pub trait Element: Clone + PartialEq + fmt::Debug {
    /// The concrete runtime type of this element.
    fn type_name(&self) -> TypeName;

    /// Returns true if this element satisfies `ty`.
    ///
    /// Defaults to an exact match on [`type_name`](Self::type_name). Override it
    /// to let an element satisfy interfaces or supertypes as well.
    fn conforms_to(&self, ty: &TypeName) -> bool {
        self.type_name() == *ty
    }
}

/// Dynamic values satisfy their own type name plus the pseudo-types
/// `scalar` and `array`.
impl Element for Value {
    fn type_name(&self) -> TypeName {
        Value::type_name(self)
    }

    fn conforms_to(&self, ty: &TypeName) -> bool {
        match ty.as_str() {
            "scalar" => self.is_scalar(),
            "array" => self.is_array(),
            _ => Value::type_name(self) == *ty,
        }
    }
}
