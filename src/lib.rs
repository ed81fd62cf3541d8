//! # persistent-redblack
//!
//! Persistent (immutable) red-black trees for Rust.
//!
//! ## Overview
//!
//! Updates never modify a tree in place. `insert` and `remove` return a new
//! version that shares every untouched subtree with the old one, so keeping
//! old versions around is cheap.
//!
//! - **Set**: [`persistent::PersistentRedBlackTree`], an ordered set of keys
//! - **Map**: [`persistent::PersistentRedBlackMap`], an ordered map on top of the set
//! - **Validation**: `check_invariants` reports the first broken red-black rule
//!
//! ## Feature Flags
//!
//! - `arc`: Share nodes through `Arc` so trees are `Send + Sync`
//! - `serde`: Serialize trees as sequences and maps as maps
//!
//! ## Example
//!
//! ```rust
//! use persistent_redblack::prelude::*;
//!
//! let tree: PersistentRedBlackTree<i32> = (1..=7).collect();
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.check_invariants(), Ok(3));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use persistent_redblack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::persistent::*;
}

pub mod persistent;
