//! Concrete collection types used across the collection tests.

use std::sync::{Arc, LazyLock};

use strata_collections::{Element, Map, TypedList, TypedMap};
use strata_foundation::{Result, Schema, TypeName, Value};

/// Interface satisfied by both timestamp classes.
pub const DATETIME_INTERFACE: &str = "DateTimeInterface";

/// A small object model: two timestamp classes and an unrelated class.
#[derive(Clone, Debug, PartialEq)]
pub enum Object {
    DateTime(i64),
    DateTimeImmutable(i64),
    Std,
}

impl Object {
    pub fn timestamp(&self) -> Option<i64> {
        match self {
            Self::DateTime(ts) | Self::DateTimeImmutable(ts) => Some(*ts),
            Self::Std => None,
        }
    }

    /// Mutates a `DateTime` in place. Other classes are left alone.
    pub fn set_timestamp(&mut self, ts: i64) {
        if let Self::DateTime(current) = self {
            *current = ts;
        }
    }
}

impl Element for Object {
    fn type_name(&self) -> TypeName {
        match self {
            Self::DateTime(_) => TypeName::new("DateTime"),
            Self::DateTimeImmutable(_) => TypeName::new("DateTimeImmutable"),
            Self::Std => TypeName::new("stdClass"),
        }
    }

    fn conforms_to(&self, ty: &TypeName) -> bool {
        self.type_name() == *ty || (*ty == DATETIME_INTERFACE && self.timestamp().is_some())
    }
}

static DATETIME_LIST: LazyLock<Arc<Schema>> =
    LazyLock::new(|| Arc::new(Schema::new("DatetimeList", [DATETIME_INTERFACE]).unwrap()));

static OTHER_LIST: LazyLock<Arc<Schema>> =
    LazyLock::new(|| Arc::new(Schema::new("OtherList", [DATETIME_INTERFACE]).unwrap()));

static DATETIME_MAP: LazyLock<Arc<Schema>> = LazyLock::new(|| {
    Arc::new(Schema::new("DatetimeMap", ["DateTime", "DateTimeImmutable"]).unwrap())
});

static OTHER_MAP: LazyLock<Arc<Schema>> = LazyLock::new(|| {
    Arc::new(Schema::new("OtherMap", ["DateTime", "DateTimeImmutable"]).unwrap())
});

pub fn datetime_list_schema() -> Arc<Schema> {
    Arc::clone(&*DATETIME_LIST)
}

pub fn other_list_schema() -> Arc<Schema> {
    Arc::clone(&*OTHER_LIST)
}

pub fn datetime_map_schema() -> Arc<Schema> {
    Arc::clone(&*DATETIME_MAP)
}

pub fn other_map_schema() -> Arc<Schema> {
    Arc::clone(&*OTHER_MAP)
}

pub fn datetime_list(timestamps: &[i64]) -> TypedList<Object> {
    TypedList::from_elements(
        datetime_list_schema(),
        timestamps.iter().copied().map(Object::DateTime),
    )
    .unwrap()
}

pub fn datetime_map(entries: &[(&str, i64)]) -> TypedMap<Object> {
    TypedMap::new(
        datetime_map_schema(),
        entries.iter().map(|&(k, ts)| (k, Object::DateTime(ts))),
    )
    .unwrap()
}

pub fn timestamps(list: &TypedList<Object>) -> Vec<i64> {
    list.iter().filter_map(|o| o.timestamp()).collect()
}

/// An untyped map carrying a field of its own, copied alongside the entries.
#[derive(Clone, Debug, PartialEq)]
pub struct PlainMap {
    pub map: Map,
    pub test_var: Vec<String>,
}

impl PlainMap {
    pub fn new<I, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'static str, V)>,
        V: Into<Value>,
    {
        Ok(Self {
            map: Map::new("PlainMap", entries)?,
            test_var: vec!["initial".to_string()],
        })
    }

    pub fn with(&self, key: &str, value: impl Into<Value>) -> Result<Self> {
        Ok(Self {
            map: self.map.with(key, value)?,
            test_var: self.test_var.clone(),
        })
    }
}
