//! Persistent (immutable) ordered map layered on [`PersistentRedBlackTree`].
//!
//! [`PersistentRedBlackMap`] stores its entries in a red-black tree whose
//! ordering looks at the key only, so `insert`, `remove` and `get` map one to
//! one onto the tree operations. All balancing happens in the tree.
//!
//! # Examples
//!
//! ```rust
//! use persistent_redblack::persistent::PersistentRedBlackMap;
//!
//! let map = PersistentRedBlackMap::new()
//!     .insert(3, "three")
//!     .insert(1, "one")
//!     .insert(2, "two");
//!
//! let keys: Vec<&i32> = map.keys().collect();
//! assert_eq!(keys, vec![&1, &2, &3]);
//!
//! let updated = map.insert(1, "ONE");
//! assert_eq!(map.get(&1), Some(&"one"));      // Original unchanged
//! assert_eq!(updated.get(&1), Some(&"ONE"));  // New version
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use super::redblack::{
    PersistentRedBlackTree, PersistentRedBlackTreeIterator, Traversal,
};

// =============================================================================
// MapEntry Definition
// =============================================================================

/// A key-value pair ordered by its key alone.
#[derive(Clone)]
struct MapEntry<K, V> {
    key: K,
    value: V,
}

impl<K: PartialEq, V> PartialEq for MapEntry<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq, V> Eq for MapEntry<K, V> {}

impl<K: Ord, V> PartialOrd for MapEntry<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, V> Ord for MapEntry<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

// =============================================================================
// PersistentRedBlackMap Definition
// =============================================================================

/// A persistent (immutable) ordered map backed by a red-black tree.
///
/// # Time Complexity
///
/// | Operation            | Complexity |
/// |----------------------|------------|
/// | `get`/`contains_key` | O(log N)   |
/// | `insert`             | O(log N)   |
/// | `remove`             | O(log N)   |
/// | `min`/`max`          | O(log N)   |
/// | `len`                | O(1)       |
///
/// # Examples
///
/// ```rust
/// use persistent_redblack::persistent::PersistentRedBlackMap;
///
/// let map = PersistentRedBlackMap::singleton("answer".to_string(), 42);
/// assert_eq!(map.get("answer"), Some(&42));
/// assert!(map.remove("answer").is_empty());
/// ```
pub struct PersistentRedBlackMap<K, V> {
    tree: PersistentRedBlackTree<MapEntry<K, V>>,
}

impl<K, V> PersistentRedBlackMap<K, V> {
    /// Creates a new empty map.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tree: PersistentRedBlackTree::new(),
        }
    }

    /// Returns the number of entries in the map.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the entry with the smallest key.
    #[must_use]
    pub fn min(&self) -> Option<(&K, &V)> {
        self.tree.min().map(|entry| (&entry.key, &entry.value))
    }

    /// Returns the entry with the largest key.
    #[must_use]
    pub fn max(&self) -> Option<(&K, &V)> {
        self.tree.max().map(|entry| (&entry.key, &entry.value))
    }

    /// Returns an iterator over the entries in ascending key order.
    #[must_use]
    pub fn iter(&self) -> PersistentRedBlackMapIterator<'_, K, V> {
        PersistentRedBlackMapIterator {
            entries: self.tree.iter(),
        }
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values in ascending key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Folds the entries in ascending key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_redblack::persistent::PersistentRedBlackMap;
    ///
    /// let map: PersistentRedBlackMap<i32, i32> = [(1, 10), (2, 20)].into_iter().collect();
    /// assert_eq!(map.fold_left(0, |sum, key, value| sum + key * value), 50);
    /// ```
    pub fn fold_left<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(B, &K, &V) -> B,
    {
        self.tree.fold_left(Traversal::InOrder, init, |accumulator, entry| {
            function(accumulator, &entry.key, &entry.value)
        })
    }

    /// Folds the entries in descending key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_redblack::persistent::PersistentRedBlackMap;
    ///
    /// let map: PersistentRedBlackMap<i32, &str> = [(1, "a"), (2, "b")].into_iter().collect();
    /// let values = map.fold_right(Vec::new(), |_, value, mut values| {
    ///     values.push(*value);
    ///     values
    /// });
    /// assert_eq!(values, vec!["b", "a"]);
    /// ```
    pub fn fold_right<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(&K, &V, B) -> B,
    {
        self.tree.fold_right(Traversal::InOrder, init, |entry, accumulator| {
            function(&entry.key, &entry.value, accumulator)
        })
    }
}

impl<K: Ord, V> PersistentRedBlackMap<K, V> {
    /// Returns a reference to the value stored under `key`.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_entry(key).map(|(_, value)| value)
    }

    /// Returns the stored key and value for `key`.
    #[must_use]
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree
            .get_by(|entry| key.cmp(entry.key.borrow()))
            .map(|entry| (&entry.key, &entry.value))
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_entry(key).is_some()
    }
}

impl<K: Clone + Ord, V: Clone> PersistentRedBlackMap<K, V> {
    /// Creates a map containing a single entry.
    #[inline]
    #[must_use]
    pub fn singleton(key: K, value: V) -> Self {
        Self::new().insert(key, value)
    }

    /// Inserts an entry, replacing the value of an existing key.
    #[must_use]
    pub fn insert(&self, key: K, value: V) -> Self {
        Self {
            tree: self.tree.insert(MapEntry { key, value }),
        }
    }

    /// Removes the entry for `key`; returns the original map if absent.
    #[must_use]
    pub fn remove<Q>(&self, key: &Q) -> Self
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self {
            tree: self.tree.remove_by(|entry| key.cmp(entry.key.borrow())),
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the entries of a [`PersistentRedBlackMap`] in ascending
/// key order.
pub struct PersistentRedBlackMapIterator<'a, K, V> {
    entries: PersistentRedBlackTreeIterator<'a, MapEntry<K, V>>,
}

impl<'a, K, V> Iterator for PersistentRedBlackMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries
            .next()
            .map(|entry| (&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> ExactSizeIterator for PersistentRedBlackMapIterator<'_, K, V> {
    fn len(&self) -> usize {
        self.entries.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Clone for PersistentRedBlackMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

impl<K, V> Default for PersistentRedBlackMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Ord, V: Clone> FromIterator<(K, V)> for PersistentRedBlackMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |map, (key, value)| map.insert(key, value))
    }
}

impl<'a, K, V> IntoIterator for &'a PersistentRedBlackMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = PersistentRedBlackMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for PersistentRedBlackMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for PersistentRedBlackMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for PersistentRedBlackMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for PersistentRedBlackMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for PersistentRedBlackMap<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

#[cfg(feature = "serde")]
struct PersistentRedBlackMapVisitor<K, V> {
    marker: std::marker::PhantomData<(K, V)>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for PersistentRedBlackMapVisitor<K, V>
where
    K: serde::Deserialize<'de> + Clone + Ord,
    V: serde::Deserialize<'de> + Clone,
{
    type Value = PersistentRedBlackMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut map = PersistentRedBlackMap::new();
        while let Some((key, value)) = access.next_entry()? {
            map = map.insert(key, value);
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for PersistentRedBlackMap<K, V>
where
    K: serde::Deserialize<'de> + Clone + Ord,
    V: serde::Deserialize<'de> + Clone,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(PersistentRedBlackMapVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
