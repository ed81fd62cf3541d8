//! Depth-first folds over a [`PersistentRedBlackTree`].

use super::PersistentRedBlackTree;
use super::node::Subtree;

/// The order in which a fold visits the keys of a tree.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Traversal {
    /// Root, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, then root, then right subtree (ascending key order).
    InOrder,
    /// Left subtree, then right subtree, then root.
    PostOrder,
}

impl<E> PersistentRedBlackTree<E> {
    /// Folds the keys from the first visited to the last.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_redblack::persistent::{PersistentRedBlackTree, Traversal};
    ///
    /// let tree: PersistentRedBlackTree<i32> = [2, 1, 3].into_iter().collect();
    ///
    /// let in_order = tree.fold_left(Traversal::InOrder, Vec::new(), |mut keys, key| {
    ///     keys.push(*key);
    ///     keys
    /// });
    /// assert_eq!(in_order, vec![1, 2, 3]);
    ///
    /// let pre_order = tree.fold_left(Traversal::PreOrder, Vec::new(), |mut keys, key| {
    ///     keys.push(*key);
    ///     keys
    /// });
    /// assert_eq!(pre_order, vec![2, 1, 3]);
    /// ```
    pub fn fold_left<B, F>(&self, traversal: Traversal, init: B, mut function: F) -> B
    where
        F: FnMut(B, &E) -> B,
    {
        fold_left_subtree(&self.root, traversal, init, &mut function)
    }

    /// Folds the keys from the last visited to the first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_redblack::persistent::{PersistentRedBlackTree, Traversal};
    ///
    /// let tree: PersistentRedBlackTree<i32> = [2, 1, 3].into_iter().collect();
    /// let rendered = tree.fold_right(Traversal::InOrder, String::new(), |key, text| {
    ///     format!("{key}{text}")
    /// });
    /// assert_eq!(rendered, "123");
    /// ```
    pub fn fold_right<B, F>(&self, traversal: Traversal, init: B, mut function: F) -> B
    where
        F: FnMut(&E, B) -> B,
    {
        fold_right_subtree(&self.root, traversal, init, &mut function)
    }

    /// Structural fold: every terminal becomes `leaf`, every node combines
    /// its left result, its key and its right result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_redblack::persistent::PersistentRedBlackTree;
    ///
    /// let tree: PersistentRedBlackTree<i32> = (1..=7).collect();
    /// let leaves = tree.fold_tree(1_usize, |left, _, right| left + right);
    /// assert_eq!(leaves, 8);
    /// ```
    pub fn fold_tree<B, F>(&self, leaf: B, mut function: F) -> B
    where
        B: Clone,
        F: FnMut(B, &E, B) -> B,
    {
        fold_tree_subtree(&self.root, &leaf, &mut function)
    }
}

fn fold_left_subtree<E, B, F>(
    tree: &Subtree<E>,
    traversal: Traversal,
    accumulator: B,
    function: &mut F,
) -> B
where
    F: FnMut(B, &E) -> B,
{
    let Some(node) = tree.as_node() else {
        return accumulator;
    };
    match traversal {
        Traversal::PreOrder => {
            let accumulator = function(accumulator, &node.key);
            let accumulator = fold_left_subtree(&node.left, traversal, accumulator, function);
            fold_left_subtree(&node.right, traversal, accumulator, function)
        }
        Traversal::InOrder => {
            let accumulator = fold_left_subtree(&node.left, traversal, accumulator, function);
            let accumulator = function(accumulator, &node.key);
            fold_left_subtree(&node.right, traversal, accumulator, function)
        }
        Traversal::PostOrder => {
            let accumulator = fold_left_subtree(&node.left, traversal, accumulator, function);
            let accumulator = fold_left_subtree(&node.right, traversal, accumulator, function);
            function(accumulator, &node.key)
        }
    }
}

fn fold_right_subtree<E, B, F>(
    tree: &Subtree<E>,
    traversal: Traversal,
    accumulator: B,
    function: &mut F,
) -> B
where
    F: FnMut(&E, B) -> B,
{
    let Some(node) = tree.as_node() else {
        return accumulator;
    };
    match traversal {
        Traversal::PreOrder => {
            let accumulator = fold_right_subtree(&node.right, traversal, accumulator, function);
            let accumulator = fold_right_subtree(&node.left, traversal, accumulator, function);
            function(&node.key, accumulator)
        }
        Traversal::InOrder => {
            let accumulator = fold_right_subtree(&node.right, traversal, accumulator, function);
            let accumulator = function(&node.key, accumulator);
            fold_right_subtree(&node.left, traversal, accumulator, function)
        }
        Traversal::PostOrder => {
            let accumulator = function(&node.key, accumulator);
            let accumulator = fold_right_subtree(&node.right, traversal, accumulator, function);
            fold_right_subtree(&node.left, traversal, accumulator, function)
        }
    }
}

fn fold_tree_subtree<E, B, F>(tree: &Subtree<E>, leaf: &B, function: &mut F) -> B
where
    B: Clone,
    F: FnMut(B, &E, B) -> B,
{
    let Some(node) = tree.as_node() else {
        return leaf.clone();
    };
    let left = fold_tree_subtree(&node.left, leaf, function);
    let right = fold_tree_subtree(&node.right, leaf, function);
    function(left, &node.key, right)
}
