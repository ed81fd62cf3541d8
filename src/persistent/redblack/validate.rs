//! Invariant checking for [`PersistentRedBlackTree`].
//!
//! Every tree returned by a public operation satisfies:
//!
//! 1. keys strictly ascend in order,
//! 2. no red node has a red child,
//! 3. every root-to-terminal path passes the same number of black nodes,
//! 4. the root is black and no transient color is present.
//!
//! [`PersistentRedBlackTree::check_invariants`] verifies all four. It walks
//! the whole tree, so it is meant for tests and debugging.

use thiserror::Error;

use super::PersistentRedBlackTree;
use super::color::Color;
use super::node::Subtree;

/// A violated red-black tree invariant.
///
/// # Examples
///
/// ```rust
/// use persistent_redblack::persistent::InvariantViolation;
///
/// let violation = InvariantViolation::BlackHeightMismatch { left: 2, right: 3 };
/// assert_eq!(
///     violation.to_string(),
///     "black height mismatch: left paths have 2 black nodes, right paths have 3"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// A key is not strictly between the keys bounding its position.
    #[error("keys are not in strictly ascending order")]
    OutOfOrder,

    /// A red node has a red child.
    #[error("red node has a red child")]
    RedRed,

    /// Two sibling subtrees have different black heights.
    #[error(
        "black height mismatch: left paths have {left} black nodes, right paths have {right}"
    )]
    BlackHeightMismatch {
        /// Black height of the left subtree.
        left: usize,
        /// Black height of the right subtree.
        right: usize,
    },

    /// A double-black or negative-black color is present.
    #[error("transient color {color} is present")]
    TransientColor {
        /// The offending color.
        color: Color,
    },

    /// The root is red.
    #[error("root is red")]
    RedRoot,

    /// A node's cached size disagrees with the nodes below it.
    #[error("cached size {cached} differs from the {counted} nodes counted")]
    SizeMismatch {
        /// Size stored in the node.
        cached: usize,
        /// Size obtained by counting.
        counted: usize,
    },
}

impl<E: Ord> PersistentRedBlackTree<E> {
    /// Checks all red-black invariants and returns the black height.
    ///
    /// The black height counts black nodes on any root-to-terminal path;
    /// the empty tree has black height 0.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_redblack::persistent::PersistentRedBlackTree;
    ///
    /// let tree: PersistentRedBlackTree<i32> = (1..=7).collect();
    /// assert!(tree.check_invariants().is_ok());
    /// ```
    pub fn check_invariants(&self) -> Result<usize, InvariantViolation> {
        if self.root.is_red() {
            return Err(InvariantViolation::RedRoot);
        }
        check_subtree(&self.root, None, None).map(|summary| summary.black_height)
    }
}

struct Summary {
    black_height: usize,
    size: usize,
}

fn check_subtree<E: Ord>(
    tree: &Subtree<E>,
    lower: Option<&E>,
    upper: Option<&E>,
) -> Result<Summary, InvariantViolation> {
    let node = match tree {
        Subtree::Empty => {
            return Ok(Summary {
                black_height: 0,
                size: 0,
            });
        }
        Subtree::EmptyDoubleBlack => {
            return Err(InvariantViolation::TransientColor {
                color: Color::DoubleBlack,
            });
        }
        Subtree::Node(node) => node,
    };

    if !node.color.is_stable() {
        return Err(InvariantViolation::TransientColor { color: node.color });
    }
    let above_lower = lower.is_none_or(|bound| bound < &node.key);
    let below_upper = upper.is_none_or(|bound| &node.key < bound);
    if !(above_lower && below_upper) {
        return Err(InvariantViolation::OutOfOrder);
    }
    if node.color == Color::Red && (node.left.is_red() || node.right.is_red()) {
        return Err(InvariantViolation::RedRed);
    }

    let left = check_subtree(&node.left, lower, Some(&node.key))?;
    let right = check_subtree(&node.right, Some(&node.key), upper)?;
    if left.black_height != right.black_height {
        return Err(InvariantViolation::BlackHeightMismatch {
            left: left.black_height,
            right: right.black_height,
        });
    }
    let counted = 1 + left.size + right.size;
    if counted != node.size {
        return Err(InvariantViolation::SizeMismatch {
            cached: node.size,
            counted,
        });
    }

    Ok(Summary {
        black_height: left.black_height + usize::from(node.color == Color::Black),
        size: counted,
    })
}
