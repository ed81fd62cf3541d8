//! Post-insertion fixup.
//!
//! `balance` rebuilds a node while removing a red-red violation one level
//! below it. An insertion can only introduce such a violation directly under
//! the node being rebuilt, and `balance` runs at every ancestor on the way
//! back up, so one local rotation per level is enough.
//!
//! Deletion reuses `balance` under a `DoubleBlack` request (see
//! the `delete` module): the same four rotations then produce a black root
//! instead of a red one, and two extra rotations absorb a negative-black
//! child created by `bubble`.

use std::cmp::Ordering;

use super::color::Color;
use super::node::Subtree;

/// Inserts `element`, replacing an equal stored element in place.
///
/// The root of the result may be red; callers finish with `blacken`.
pub(super) fn add<E: Ord + Clone>(tree: &Subtree<E>, element: E) -> Subtree<E> {
    let Some(node) = tree.as_node() else {
        return Subtree::red_leaf(element);
    };
    match element.cmp(&node.key) {
        Ordering::Less => balance(
            node.color,
            add(&node.left, element),
            node.key.clone(),
            node.right.clone(),
        ),
        Ordering::Greater => balance(
            node.color,
            node.left.clone(),
            node.key.clone(),
            add(&node.right, element),
        ),
        // Same shape, no rebalancing needed.
        Ordering::Equal => Subtree::node(node.color, node.left.clone(), element, node.right.clone()),
    }
}

/// Builds `(color left key right)`, rotating away a red-red child pair.
///
/// Only a black-like request (`Black` or `DoubleBlack`) can be rebalanced;
/// red and negative-black requests are built as given.
pub(super) fn balance<E: Clone>(
    color: Color,
    left: Subtree<E>,
    key: E,
    right: Subtree<E>,
) -> Subtree<E> {
    match color {
        Color::Black | Color::DoubleBlack => {
            if let Some(rotated) = rotate_red_red(color, &left, &key, &right) {
                return rotated;
            }
            if color == Color::DoubleBlack
                && let Some(rotated) = rotate_negative_black(&left, &key, &right)
            {
                return rotated;
            }
            Subtree::node(color, left, key, right)
        }
        Color::Red | Color::NegativeBlack => Subtree::node(color, left, key, right),
    }
}

/// The four classic cases, checked left-left, left-right, right-right,
/// right-left. The promoted key gets `color.redder()`, its children black.
fn rotate_red_red<E: Clone>(
    color: Color,
    left: &Subtree<E>,
    key: &E,
    right: &Subtree<E>,
) -> Option<Subtree<E>> {
    let promoted = color.redder();

    if let Some(left_node) = left.node_colored(Color::Red) {
        if let Some(outer) = left_node.left.node_colored(Color::Red) {
            return Some(Subtree::node(
                promoted,
                outer.recolored(Color::Black),
                left_node.key.clone(),
                Subtree::node(Color::Black, left_node.right.clone(), key.clone(), right.clone()),
            ));
        }
        if let Some(inner) = left_node.right.node_colored(Color::Red) {
            return Some(Subtree::node(
                promoted,
                Subtree::node(
                    Color::Black,
                    left_node.left.clone(),
                    left_node.key.clone(),
                    inner.left.clone(),
                ),
                inner.key.clone(),
                Subtree::node(Color::Black, inner.right.clone(), key.clone(), right.clone()),
            ));
        }
    }

    if let Some(right_node) = right.node_colored(Color::Red) {
        if let Some(outer) = right_node.right.node_colored(Color::Red) {
            return Some(Subtree::node(
                promoted,
                Subtree::node(Color::Black, left.clone(), key.clone(), right_node.left.clone()),
                right_node.key.clone(),
                outer.recolored(Color::Black),
            ));
        }
        if let Some(inner) = right_node.left.node_colored(Color::Red) {
            return Some(Subtree::node(
                promoted,
                Subtree::node(Color::Black, left.clone(), key.clone(), inner.left.clone()),
                inner.key.clone(),
                Subtree::node(
                    Color::Black,
                    inner.right.clone(),
                    right_node.key.clone(),
                    right_node.right.clone(),
                ),
            ));
        }
    }

    None
}

/// Absorbs a double-black parent together with a negative-black child.
///
/// A negative-black child always has two black node children; the inner one
/// is promoted to a black root and the outer one is reddened, which may in
/// turn need an ordinary `balance`.
fn rotate_negative_black<E: Clone>(
    left: &Subtree<E>,
    key: &E,
    right: &Subtree<E>,
) -> Option<Subtree<E>> {
    if let Some(right_node) = right.node_colored(Color::NegativeBlack)
        && let Some(inner) = right_node.left.node_colored(Color::Black)
        && right_node.right.node_colored(Color::Black).is_some()
    {
        return Some(Subtree::node(
            Color::Black,
            Subtree::node(Color::Black, left.clone(), key.clone(), inner.left.clone()),
            inner.key.clone(),
            balance(
                Color::Black,
                inner.right.clone(),
                right_node.key.clone(),
                right_node.right.redden(),
            ),
        ));
    }

    if let Some(left_node) = left.node_colored(Color::NegativeBlack)
        && left_node.left.node_colored(Color::Black).is_some()
        && let Some(inner) = left_node.right.node_colored(Color::Black)
    {
        return Some(Subtree::node(
            Color::Black,
            balance(
                Color::Black,
                left_node.left.redden(),
                left_node.key.clone(),
                inner.left.clone(),
            ),
            inner.key.clone(),
            Subtree::node(Color::Black, inner.right.clone(), key.clone(), right.clone()),
        ));
    }

    None
}
