//! Persistent storage primitives with structural sharing.
//!
//! These are thin wrappers around the `im` crate's persistent data structures.
//! Every collection in Strata keeps its contents in one of these, so cloning a
//! collection is O(1) and an edit never touches the storage of the original.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;

/// Persistent vector with structural sharing.
///
/// Cloning is O(1). Modifications return a new vector sharing structure
/// with the original.
#[derive(Clone, Default)]
pub struct PVec<T>(im::Vector<T>)
where
    T: Clone;

impl<T: Clone> PVec<T> {
    /// Creates an empty vector.
    #[must_use]
    pub fn new() -> Self {
        Self(im::Vector::new())
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the vector is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets an element by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a new vector with the element appended.
    #[must_use]
    pub fn push_back(&self, value: T) -> Self {
        let mut new = self.0.clone();
        new.push_back(value);
        Self(new)
    }

    /// Returns a new vector with the element prepended.
    #[must_use]
    pub fn push_front(&self, value: T) -> Self {
        let mut new = self.0.clone();
        new.push_front(value);
        Self(new)
    }

    /// Returns a new vector with the element at `index` replaced.
    ///
    /// Returns `None` if `index` is out of bounds.
    #[must_use]
    pub fn update(&self, index: usize, value: T) -> Option<Self> {
        if index >= self.len() {
            return None;
        }
        let mut new = self.0.clone();
        new.set(index, value);
        Some(Self(new))
    }

    /// Returns a new vector with the element at `index` removed, closing the gap.
    ///
    /// Returns `None` if `index` is out of bounds.
    #[must_use]
    pub fn remove(&self, index: usize) -> Option<(Self, T)> {
        if index >= self.len() {
            return None;
        }
        let mut new = self.0.clone();
        let value = new.remove(index);
        Some((Self(new), value))
    }

    /// Returns a new vector holding this vector's elements followed by `other`'s.
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        let mut new = self.0.clone();
        new.append(other.0.clone());
        Self(new)
    }

    /// Returns a new vector with the elements in reverse order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        self.iter().rev().cloned().collect()
    }

    /// Returns a new vector sorted by the given three-way comparator.
    #[must_use]
    pub fn sorted_by<F>(&self, cmp: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let mut new = self.0.clone();
        new.sort_by(cmp);
        Self(new)
    }

    /// Returns a new vector keeping only the elements matching `keep`.
    #[must_use]
    pub fn retain<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|&value| keep(value)).cloned().collect()
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> im::vector::Iter<'_, T> {
        self.0.iter()
    }

    /// Returns the first element.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.0.front()
    }

    /// Returns the last element.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.0.back()
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for PVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone + PartialEq> PartialEq for PVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Clone + Eq> Eq for PVec<T> {}

impl<T: Clone> FromIterator<T> for PVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(im::Vector::from_iter(iter))
    }
}

impl<T: Clone> IntoIterator for PVec<T> {
    type Item = T;
    type IntoIter = im::vector::ConsumingIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T: Clone> IntoIterator for &'a PVec<T> {
    type Item = &'a T;
    type IntoIter = im::vector::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Persistent insertion-ordered map with structural sharing.
///
/// Each key is assigned a monotonically increasing sequence number when first
/// inserted. Entries live in an ordered map keyed by that sequence, so iteration
/// follows insertion order and overwriting a key keeps its original position.
#[derive(Clone)]
pub struct OrderedMap<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    positions: im::HashMap<K, u64>,
    entries: im::OrdMap<u64, (K, V)>,
    next: u64,
}

impl<K: Clone + Eq + Hash, V: Clone> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + Hash, V: Clone> OrderedMap<K, V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            positions: im::HashMap::new(),
            entries: im::OrdMap::new(),
            next: 0,
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets a value by key.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let seq = self.positions.get(key)?;
        self.entries.get(seq).map(|(_, value)| value)
    }

    /// Returns true if the map contains the key.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains_key(key)
    }

    /// Returns a new map with the key-value pair inserted.
    ///
    /// A key that is already present keeps its position and takes the new value.
    #[must_use]
    pub fn insert(&self, key: K, value: V) -> Self {
        let mut new = self.clone();
        new.insert_mut(key, value);
        new
    }

    /// Returns a new map with the key removed.
    ///
    /// Returns `None` if the key is absent.
    #[must_use]
    pub fn remove<Q>(&self, key: &Q) -> Option<(Self, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut new = self.clone();
        let seq = new.positions.remove(key)?;
        let (_, value) = new.entries.remove(&seq)?;
        Some((new, value))
    }

    /// Returns the first entry in insertion order.
    #[must_use]
    pub fn first(&self) -> Option<(&K, &V)> {
        self.entries.get_min().map(|(_, (key, value))| (key, value))
    }

    /// Returns the last entry in insertion order.
    #[must_use]
    pub fn last(&self) -> Option<(&K, &V)> {
        self.entries.get_max().map(|(_, (key, value))| (key, value))
    }

    /// Returns an iterator over key-value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.values().map(|(key, value)| (key, value))
    }

    /// Returns an iterator over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.values().map(|(key, _)| key)
    }

    /// Returns an iterator over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values().map(|(_, value)| value)
    }

    /// Returns a new map that is the union of this map and another.
    ///
    /// If a key exists in both maps, the value from `other` is used and the key
    /// keeps its position in `self`. Keys only in `other` are appended in
    /// `other`'s order.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut new = self.clone();
        for (key, value) in other.iter() {
            new.insert_mut(key.clone(), value.clone());
        }
        new
    }

    /// Returns a new map keeping only the entries matching `keep`.
    #[must_use]
    pub fn retain<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.iter()
            .filter(|&(key, value)| keep(key, value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    fn insert_mut(&mut self, key: K, value: V) {
        if let Some(&seq) = self.positions.get(&key) {
            self.entries.insert(seq, (key, value));
            return;
        }
        let seq = self.next;
        self.next += 1;
        self.positions.insert(key.clone(), seq);
        self.entries.insert(seq, (key, value));
    }
}

impl<K, V> fmt::Debug for OrderedMap<K, V>
where
    K: Clone + Eq + Hash + fmt::Debug,
    V: Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// Equality is order-sensitive: two maps are equal only if they hold the same
// entries in the same insertion order.
impl<K, V> PartialEq for OrderedMap<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Clone + Eq + Hash, V: Clone + Eq> Eq for OrderedMap<K, V> {}

impl<K: Clone + Eq + Hash, V: Clone> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert_mut(key, value);
        }
        map
    }
}
