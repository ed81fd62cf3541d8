//! Persistent (immutable) red-black trees.
//!
//! Every update returns a new version and leaves the original untouched.
//! Versions share every subtree the update did not touch:
//!
//! - [`PersistentRedBlackTree`]: Persistent ordered set (red-black tree)
//! - [`PersistentRedBlackMap`]: Persistent ordered map (entries in a red-black tree)
//!
//! # Examples
//!
//! ## `PersistentRedBlackTree`
//!
//! ```rust
//! use persistent_redblack::persistent::PersistentRedBlackTree;
//!
//! let tree: PersistentRedBlackTree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//! let smaller = tree.remove(&3).remove(&8);
//!
//! // Structural sharing: the original tree is preserved
//! assert_eq!(tree.len(), 7);
//! assert_eq!(smaller.iter().copied().collect::<Vec<_>>(), vec![1, 4, 5, 7, 9]);
//! assert!(smaller.check_invariants().is_ok());
//! ```
//!
//! ## `PersistentRedBlackMap`
//!
//! ```rust
//! use persistent_redblack::persistent::PersistentRedBlackMap;
//!
//! let map = PersistentRedBlackMap::new()
//!     .insert("one".to_string(), 1)
//!     .insert("two".to_string(), 2);
//!
//! let updated = map.insert("one".to_string(), 100);
//! assert_eq!(map.get("one"), Some(&1));       // Original unchanged
//! assert_eq!(updated.get("one"), Some(&100)); // New version
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod redblack;
mod redblack_map;

pub use redblack::Color;
pub use redblack::InvariantViolation;
pub use redblack::PersistentRedBlackTree;
pub use redblack::PersistentRedBlackTreeIntoIterator;
pub use redblack::PersistentRedBlackTreeIterator;
pub use redblack::Traversal;
pub use redblack_map::PersistentRedBlackMap;
pub use redblack_map::PersistentRedBlackMapIterator;

// =============================================================================
// Thread Safety
// =============================================================================

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentRedBlackTree<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentRedBlackMap<String, i32>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(PersistentRedBlackTree<i32>: Send, Sync);
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(PersistentRedBlackMap<String, i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
