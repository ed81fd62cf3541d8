//! In-order iteration.

use smallvec::SmallVec;

use super::node::{Node, Subtree};

/// Inline capacity of the iterator stack.
///
/// A red-black tree of height 32 already holds more than 65,000 keys.
const INLINE_DEPTH: usize = 32;

/// An iterator over the keys of a [`PersistentRedBlackTree`] in ascending
/// order.
///
/// [`PersistentRedBlackTree`]: super::PersistentRedBlackTree
pub struct PersistentRedBlackTreeIterator<'a, E> {
    /// Nodes whose key and right subtree are still to be visited.
    stack: SmallVec<[&'a Node<E>; INLINE_DEPTH]>,
    remaining: usize,
}

impl<'a, E> PersistentRedBlackTreeIterator<'a, E> {
    pub(super) fn new(root: &'a Subtree<E>) -> Self {
        let mut iterator = Self {
            stack: SmallVec::new(),
            remaining: root.size(),
        };
        iterator.push_left_spine(root);
        iterator
    }

    fn push_left_spine(&mut self, mut tree: &'a Subtree<E>) {
        while let Some(node) = tree.as_node() {
            self.stack.push(node);
            tree = &node.left;
        }
    }
}

impl<'a, E> Iterator for PersistentRedBlackTreeIterator<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E> ExactSizeIterator for PersistentRedBlackTreeIterator<'_, E> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<E> std::iter::FusedIterator for PersistentRedBlackTreeIterator<'_, E> {}

/// An owning iterator over the keys of a [`PersistentRedBlackTree`] in
/// ascending order.
///
/// Keys are cloned out of the shared nodes.
///
/// [`PersistentRedBlackTree`]: super::PersistentRedBlackTree
pub struct PersistentRedBlackTreeIntoIterator<E> {
    keys: std::vec::IntoIter<E>,
}

impl<E: Clone> PersistentRedBlackTreeIntoIterator<E> {
    pub(super) fn new(root: &Subtree<E>) -> Self {
        let keys: Vec<E> = PersistentRedBlackTreeIterator::new(root).cloned().collect();
        Self {
            keys: keys.into_iter(),
        }
    }
}

impl<E> Iterator for PersistentRedBlackTreeIntoIterator<E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<E> ExactSizeIterator for PersistentRedBlackTreeIntoIterator<E> {
    fn len(&self) -> usize {
        self.keys.len()
    }
}
