//! Deletion and double-black propagation.
//!
//! Removing a black node shortens every path through it by one black node.
//! The deficit is recorded by coloring the replacement `DoubleBlack` (or by
//! the `EmptyDoubleBlack` terminal) and pushed upwards by [`bubble`] until a
//! rotation in [`balance`] absorbs it or it reaches the root, where
//! `blacken` drops it.

use std::cmp::Ordering;

use super::balance::balance;
use super::color::Color;
use super::node::{Node, Subtree, invariant_broken};

/// Deletes the element `compare` reports as equal.
///
/// Returns `None` when no element matches, so callers can hand back the
/// untouched tree. The root of a returned subtree may be double-black.
pub(super) fn delete<E, F>(tree: &Subtree<E>, compare: &mut F) -> Option<Subtree<E>>
where
    E: Clone,
    F: FnMut(&E) -> Ordering,
{
    let node = tree.as_node()?;
    match compare(&node.key) {
        Ordering::Less => delete(&node.left, compare)
            .map(|left| bubble(node.color, left, node.key.clone(), node.right.clone())),
        Ordering::Greater => delete(&node.right, compare)
            .map(|right| bubble(node.color, node.left.clone(), node.key.clone(), right)),
        Ordering::Equal => Some(remove(node)),
    }
}

/// Replaces `node` by a subtree holding its children only.
fn remove<E: Clone>(node: &Node<E>) -> Subtree<E> {
    match (node.color, &node.left, &node.right) {
        (Color::Red, Subtree::Empty, Subtree::Empty) => Subtree::Empty,
        (Color::Black, Subtree::Empty, Subtree::Empty) => Subtree::EmptyDoubleBlack,
        (Color::Black, Subtree::Empty, Subtree::Node(child))
        | (Color::Black, Subtree::Node(child), Subtree::Empty)
            if child.color == Color::Red =>
        {
            child.recolored(Color::Black)
        }
        _ => {
            // An empty left beside a non-red right child breaks equal black heights.
            let Some(predecessor) = node.left.max() else {
                invariant_broken("node with a single non-red child")
            };
            bubble(
                node.color,
                remove_max(&node.left),
                predecessor.clone(),
                node.right.clone(),
            )
        }
    }
}

/// Removes the rightmost node of a non-empty subtree.
fn remove_max<E: Clone>(tree: &Subtree<E>) -> Subtree<E> {
    let Some(node) = tree.as_node() else {
        invariant_broken("remove_max on an empty subtree")
    };
    if node.right.is_empty() {
        remove(node)
    } else {
        bubble(
            node.color,
            node.left.clone(),
            node.key.clone(),
            remove_max(&node.right),
        )
    }
}

/// Rebuilds a node whose child may carry a black deficit.
///
/// A double-black child moves its extra blackness to the parent: the parent
/// becomes one step blacker and both children one step redder. The sibling
/// may turn red or negative-black, which `balance` then rotates away.
pub(super) fn bubble<E: Clone>(
    color: Color,
    left: Subtree<E>,
    key: E,
    right: Subtree<E>,
) -> Subtree<E> {
    if left.is_double_black() || right.is_double_black() {
        balance(color.blacker(), left.redder(), key, right.redder())
    } else {
        balance(color, left, key, right)
    }
}
