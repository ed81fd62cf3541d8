//! Persistent (immutable) red-black tree.
//!
//! This module provides [`PersistentRedBlackTree`], an ordered collection of
//! unique keys whose updates return new trees and leave every earlier
//! version intact.
//!
//! # Overview
//!
//! - O(log N) `get` / `contains`
//! - O(log N) `insert`
//! - O(log N) `remove`
//! - O(log N) `min` / `max`
//! - O(1) `len`, `height` and `is_empty`
//!
//! Every update copies the nodes on one root-to-leaf path and shares all
//! other nodes with the previous version.
//!
//! # Examples
//!
//! ```rust
//! use persistent_redblack::persistent::PersistentRedBlackTree;
//!
//! let tree: PersistentRedBlackTree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//! let smaller = tree.remove(&3).remove(&8);
//!
//! let keys: Vec<i32> = smaller.iter().copied().collect();
//! assert_eq!(keys, vec![1, 4, 5, 7, 9]);
//! assert_eq!(tree.len(), 7); // Original unchanged
//! ```
//!
//! # Internal Structure
//!
//! Insertion follows the classic functional scheme: a red leaf is added and
//! `balance` rotates away red-red pairs on the way back up.
//! Deletion additionally uses two transient colors, double-black and
//! negative-black, which record a black-height deficit while it is pushed up
//! and absorbed by `bubble`. Both public updates finish by coloring the root
//! black, so transient colors never leave this module.

mod balance;
mod color;
mod delete;
mod fold;
mod iter;
mod node;
mod validate;

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::{Add, Sub};

pub use color::Color;
pub use fold::Traversal;
pub use iter::{PersistentRedBlackTreeIntoIterator, PersistentRedBlackTreeIterator};
pub use validate::InvariantViolation;

use node::Subtree;

// =============================================================================
// PersistentRedBlackTree Definition
// =============================================================================

/// A persistent (immutable) ordered set based on a red-black tree.
///
/// Keys must implement `Ord`; two keys comparing equal are the same entry,
/// and inserting one replaces the other. Updating operations take `&self`
/// and return a new tree.
///
/// # Time Complexity
///
/// | Operation          | Complexity |
/// |--------------------|------------|
/// | `new`              | O(1)       |
/// | `get` / `contains` | O(log N)   |
/// | `insert`           | O(log N)   |
/// | `remove`           | O(log N)   |
/// | `min` / `max`      | O(log N)   |
/// | `len` / `height`   | O(1)       |
/// | `iter`             | O(N)       |
///
/// # Examples
///
/// ```rust
/// use persistent_redblack::persistent::PersistentRedBlackTree;
///
/// let tree = PersistentRedBlackTree::new().insert(2).insert(1).insert(3);
/// assert!(tree.contains(&2));
/// assert_eq!(tree.min(), Some(&1));
/// assert_eq!(tree.max(), Some(&3));
///
/// // Operator forms
/// let tree = tree + 4 - &1;
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
/// ```
pub struct PersistentRedBlackTree<E> {
    root: Subtree<E>,
}

impl<E> PersistentRedBlackTree<E> {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_redblack::persistent::PersistentRedBlackTree;
    ///
    /// let tree: PersistentRedBlackTree<i32> = PersistentRedBlackTree::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), -1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: Subtree::Empty,
        }
    }

    /// Returns the number of keys in the tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.root.size()
    }

    /// Returns `true` if the tree contains no keys.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns the number of edges on the longest root-to-terminal path.
    ///
    /// The empty tree has height -1 and a single key height 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_redblack::persistent::PersistentRedBlackTree;
    ///
    /// let tree: PersistentRedBlackTree<i32> = (1..=3).collect();
    /// assert_eq!(tree.height(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn height(&self) -> isize {
        self.root.height()
    }

    /// Returns the smallest key.
    #[must_use]
    pub fn min(&self) -> Option<&E> {
        self.root.min()
    }

    /// Returns the largest key.
    #[must_use]
    pub fn max(&self) -> Option<&E> {
        self.root.max()
    }

    /// Returns an iterator over the keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_redblack::persistent::PersistentRedBlackTree;
    ///
    /// let tree: PersistentRedBlackTree<i32> = [3, 1, 2].into_iter().collect();
    /// let keys: Vec<&i32> = tree.iter().collect();
    /// assert_eq!(keys, vec![&1, &2, &3]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> PersistentRedBlackTreeIterator<'_, E> {
        PersistentRedBlackTreeIterator::new(&self.root)
    }

    /// Returns `true` if both trees share the same root node.
    ///
    /// Removing an absent key returns a tree that is `ptr_eq` to the original.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_redblack::persistent::PersistentRedBlackTree;
    ///
    /// let tree: PersistentRedBlackTree<i32> = (1..=3).collect();
    /// assert!(tree.remove(&10).ptr_eq(&tree));
    /// assert!(!tree.remove(&2).ptr_eq(&tree));
    /// ```
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.root.ptr_eq(&other.root)
    }

    /// Looks up the stored key `compare` reports as equal.
    ///
    /// `compare` orders the probe against a stored key.
    pub(super) fn get_by<F>(&self, compare: F) -> Option<&E>
    where
        F: FnMut(&E) -> Ordering,
    {
        self.root.find_by(compare)
    }
}

impl<E: Clone> PersistentRedBlackTree<E> {
    /// Removes the key `compare` reports as equal, sharing the root when
    /// nothing matches.
    pub(super) fn remove_by<F>(&self, mut compare: F) -> Self
    where
        F: FnMut(&E) -> Ordering,
    {
        delete::delete(&self.root, &mut compare).map_or_else(
            || {
                tracing::trace!(len = self.len(), "key to remove is absent");
                self.clone()
            },
            |root| {
                let tree = Self {
                    root: root.blacken(),
                };
                tracing::trace!(len = tree.len(), "removed key");
                tree
            },
        )
    }
}

impl<E: Ord> PersistentRedBlackTree<E> {
    /// Returns a reference to the stored key equal to `key`.
    ///
    /// The stored key is returned rather than the probe, so fields ignored
    /// by `Ord` are those of the element that was inserted last.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_redblack::persistent::PersistentRedBlackTree;
    ///
    /// let tree = PersistentRedBlackTree::new().insert("hello".to_string());
    /// assert_eq!(tree.get("hello"), Some(&"hello".to_string()));
    /// assert_eq!(tree.get("world"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&E>
    where
        E: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_by(|stored| key.cmp(stored.borrow()))
    }

    /// Returns `true` if the tree contains `key`.
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }
}

impl<E: Clone + Ord> PersistentRedBlackTree<E> {
    /// Creates a tree containing a single key.
    #[inline]
    #[must_use]
    pub fn singleton(element: E) -> Self {
        Self::new().insert(element)
    }

    /// Inserts a key, replacing an equal key already present.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_redblack::persistent::PersistentRedBlackTree;
    ///
    /// let tree1 = PersistentRedBlackTree::new().insert(1);
    /// let tree2 = tree1.insert(2);
    ///
    /// assert_eq!(tree1.len(), 1); // Original unchanged
    /// assert_eq!(tree2.len(), 2); // New version
    /// ```
    #[must_use]
    pub fn insert(&self, element: E) -> Self {
        let tree = Self {
            root: balance::add(&self.root, element).blacken(),
        };
        tracing::trace!(
            len = tree.len(),
            replaced = tree.len() == self.len(),
            "inserted key"
        );
        tree
    }

    /// Removes a key.
    ///
    /// If the key is absent the original tree is returned (sharing its root).
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_redblack::persistent::PersistentRedBlackTree;
    ///
    /// let tree: PersistentRedBlackTree<i32> = (1..=3).collect();
    /// let removed = tree.remove(&2);
    ///
    /// assert!(tree.contains(&2));     // Original unchanged
    /// assert!(!removed.contains(&2)); // New version
    /// ```
    #[must_use]
    pub fn remove<Q>(&self, key: &Q) -> Self
    where
        E: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_by(|stored| key.cmp(stored.borrow()))
    }
}

// =============================================================================
// Operator Implementations
// =============================================================================

impl<E: Clone + Ord> Add<E> for PersistentRedBlackTree<E> {
    type Output = Self;

    fn add(self, element: E) -> Self::Output {
        self.insert(element)
    }
}

impl<E: Clone + Ord> Add<E> for &PersistentRedBlackTree<E> {
    type Output = PersistentRedBlackTree<E>;

    fn add(self, element: E) -> Self::Output {
        self.insert(element)
    }
}

impl<E: Clone + Ord> Sub<&E> for PersistentRedBlackTree<E> {
    type Output = Self;

    fn sub(self, key: &E) -> Self::Output {
        self.remove(key)
    }
}

impl<E: Clone + Ord> Sub<&E> for &PersistentRedBlackTree<E> {
    type Output = PersistentRedBlackTree<E>;

    fn sub(self, key: &E) -> Self::Output {
        self.remove(key)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<E> Clone for PersistentRedBlackTree<E> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}

impl<E> Default for PersistentRedBlackTree<E> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone + Ord> FromIterator<E> for PersistentRedBlackTree<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |tree, element| tree.insert(element))
    }
}

impl<E: Clone> IntoIterator for PersistentRedBlackTree<E> {
    type Item = E;
    type IntoIter = PersistentRedBlackTreeIntoIterator<E>;

    fn into_iter(self) -> Self::IntoIter {
        PersistentRedBlackTreeIntoIterator::new(&self.root)
    }
}

impl<'a, E> IntoIterator for &'a PersistentRedBlackTree<E> {
    type Item = &'a E;
    type IntoIter = PersistentRedBlackTreeIterator<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: PartialEq> PartialEq for PersistentRedBlackTree<E> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || (self.len() == other.len() && self.iter().eq(other.iter()))
    }
}

impl<E: Eq> Eq for PersistentRedBlackTree<E> {}

/// Hashes the length followed by every key in ascending order, so trees with
/// the same keys hash alike whatever their shape.
impl<E: Hash> Hash for PersistentRedBlackTree<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for key in self {
            key.hash(state);
        }
    }
}

/// Parenthesized structural dump: `(color left key right)` per node, `E` for
/// the empty terminal.
///
/// The format is for debugging only and may change.
///
/// # Examples
///
/// ```rust
/// use persistent_redblack::persistent::PersistentRedBlackTree;
///
/// let tree: PersistentRedBlackTree<i32> = [2, 1].into_iter().collect();
/// assert_eq!(format!("{tree:?}"), "(B (R E 1 E) 2 E)");
/// ```
impl<E: fmt::Debug> fmt::Debug for PersistentRedBlackTree<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:?}", self.root)
    }
}

impl<E: fmt::Display> fmt::Display for PersistentRedBlackTree<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for key in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<E: serde::Serialize> serde::Serialize for PersistentRedBlackTree<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct PersistentRedBlackTreeVisitor<E> {
    marker: std::marker::PhantomData<E>,
}

#[cfg(feature = "serde")]
impl<'de, E> serde::de::Visitor<'de> for PersistentRedBlackTreeVisitor<E>
where
    E: serde::Deserialize<'de> + Clone + Ord,
{
    type Value = PersistentRedBlackTree<E>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut tree = PersistentRedBlackTree::new();
        while let Some(element) = access.next_element()? {
            tree = tree.insert(element);
        }
        Ok(tree)
    }
}

#[cfg(feature = "serde")]
impl<'de, E> serde::Deserialize<'de> for PersistentRedBlackTree<E>
where
    E: serde::Deserialize<'de> + Clone + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(PersistentRedBlackTreeVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_sorted_sequence() {
        let tree: PersistentRedBlackTree<i32> = [3, 1, 2].into_iter().collect();
        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(json, "[1,2,3]");
    }

    #[rstest]
    fn test_deserialize_deduplicates() {
        let tree: PersistentRedBlackTree<i32> = serde_json::from_str("[3,1,3,2]").unwrap();
        assert_eq!(tree.len(), 3);
        assert!(tree.check_invariants().is_ok());
    }

    #[rstest]
    fn test_roundtrip() {
        let original: PersistentRedBlackTree<String> =
            (0..100).map(|index| format!("key{index:03}")).collect();
        let json = serde_json::to_string(&original).unwrap();
        let restored: PersistentRedBlackTree<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }
}
