//! Node representation of the persistent red-black tree.
//!
//! A [`Subtree`] is either one of two terminals or a reference-counted
//! [`Node`]. Nodes are never mutated after construction; every update builds
//! new nodes along the search path and shares everything else.

use std::cmp::Ordering;
use std::fmt;

use super::color::Color;
use crate::persistent::ReferenceCounter;

/// Reports a broken red-black invariant and aborts the operation.
///
/// Only reachable if the rebalancing logic itself is wrong; never caused by
/// user input.
#[cold]
#[track_caller]
pub(super) fn invariant_broken(context: &str) -> ! {
    tracing::error!(context, "red-black invariant broken");
    panic!("red-black invariant broken: {context}")
}

// =============================================================================
// Node Definition
// =============================================================================

/// Internal node of the red-black tree.
pub struct Node<E> {
    pub(super) color: Color,
    pub(super) left: Subtree<E>,
    pub(super) key: E,
    pub(super) right: Subtree<E>,
    /// Number of nodes in this subtree, including this one.
    pub(super) size: usize,
    /// Longest edge count from this node down to a terminal.
    pub(super) height: isize,
}

impl<E: Clone> Node<E> {
    /// Builds a copy of this node's shape with a different color.
    pub(super) fn recolored(&self, color: Color) -> Subtree<E> {
        Subtree::node(color, self.left.clone(), self.key.clone(), self.right.clone())
    }
}

// =============================================================================
// Subtree Definition
// =============================================================================

/// A red-black subtree.
pub enum Subtree<E> {
    /// The black terminal.
    Empty,
    /// The double-black terminal; exists only while a deletion is in flight.
    EmptyDoubleBlack,
    /// An interior node.
    Node(ReferenceCounter<Node<E>>),
}

// Derived `Clone` would require `E: Clone`.
impl<E> Clone for Subtree<E> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::EmptyDoubleBlack => Self::EmptyDoubleBlack,
            Self::Node(node) => Self::Node(ReferenceCounter::clone(node)),
        }
    }
}

impl<E> Subtree<E> {
    /// Builds a node, caching its size and height.
    pub(super) fn node(color: Color, left: Self, key: E, right: Self) -> Self {
        let size = 1 + left.size() + right.size();
        let height = 1 + left.height().max(right.height());
        Self::Node(ReferenceCounter::new(Node {
            color,
            left,
            key,
            right,
            size,
            height,
        }))
    }

    /// Builds the red leaf every insertion starts from.
    pub(super) fn red_leaf(key: E) -> Self {
        Self::node(Color::Red, Self::Empty, key, Self::Empty)
    }

    pub(super) fn as_node(&self) -> Option<&Node<E>> {
        match self {
            Self::Node(node) => Some(&**node),
            Self::Empty | Self::EmptyDoubleBlack => None,
        }
    }

    /// Returns the node if its color is exactly `color`.
    ///
    /// Terminals never match, even `Empty` against `Black`.
    pub(super) fn node_colored(&self, color: Color) -> Option<&Node<E>> {
        self.as_node().filter(|node| node.color == color)
    }

    pub(super) const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty | Self::EmptyDoubleBlack)
    }

    /// The color of this subtree's root; terminals carry their own color.
    pub(super) fn color(&self) -> Color {
        match self {
            Self::Empty => Color::Black,
            Self::EmptyDoubleBlack => Color::DoubleBlack,
            Self::Node(node) => node.color,
        }
    }

    pub(super) fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    pub(super) fn is_double_black(&self) -> bool {
        self.color() == Color::DoubleBlack
    }

    pub(super) fn size(&self) -> usize {
        self.as_node().map_or(0, |node| node.size)
    }

    pub(super) fn height(&self) -> isize {
        self.as_node().map_or(-1, |node| node.height)
    }

    /// Returns the leftmost key.
    pub(super) fn min(&self) -> Option<&E> {
        let mut current = self.as_node()?;
        while let Some(left) = current.left.as_node() {
            current = left;
        }
        Some(&current.key)
    }

    /// Returns the rightmost key.
    pub(super) fn max(&self) -> Option<&E> {
        let mut current = self.as_node()?;
        while let Some(right) = current.right.as_node() {
            current = right;
        }
        Some(&current.key)
    }

    /// Descends by comparison; `compare` orders the probe against a stored key.
    pub(super) fn find_by<F>(&self, mut compare: F) -> Option<&E>
    where
        F: FnMut(&E) -> Ordering,
    {
        let mut current = self.as_node()?;
        loop {
            let next = match compare(&current.key) {
                Ordering::Less => &current.left,
                Ordering::Greater => &current.right,
                Ordering::Equal => return Some(&current.key),
            };
            current = next.as_node()?;
        }
    }

    /// Returns `true` if both subtrees are the same allocation (or both terminal
    /// of the same kind).
    pub(super) fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Empty, Self::Empty) | (Self::EmptyDoubleBlack, Self::EmptyDoubleBlack) => true,
            (Self::Node(left), Self::Node(right)) => ReferenceCounter::ptr_eq(left, right),
            _ => false,
        }
    }
}

impl<E: Clone> Subtree<E> {
    /// Forces the root to black, collapsing a double-black terminal.
    ///
    /// Finishes every public insert and delete.
    pub(super) fn blacken(&self) -> Self {
        match self {
            Self::Empty | Self::EmptyDoubleBlack => Self::Empty,
            Self::Node(node) if node.color == Color::Black => self.clone(),
            Self::Node(node) => node.recolored(Color::Black),
        }
    }

    /// Removes one unit of blackness from the root.
    pub(super) fn redder(&self) -> Self {
        match self {
            Self::EmptyDoubleBlack => Self::Empty,
            Self::Node(node) => node.recolored(node.color.redder()),
            Self::Empty => invariant_broken("cannot make the black terminal redder"),
        }
    }

    /// Colors a non-empty root red.
    pub(super) fn redden(&self) -> Self {
        match self {
            Self::Node(node) => node.recolored(Color::Red),
            Self::Empty | Self::EmptyDoubleBlack => {
                invariant_broken("cannot redden a terminal")
            }
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for Subtree<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => formatter.write_str("E"),
            Self::EmptyDoubleBlack => formatter.write_str("EE"),
            Self::Node(node) => write!(
                formatter,
                "({} {:?} {:?} {:?})",
                node.color, node.left, node.key, node.right
            ),
        }
    }
}
