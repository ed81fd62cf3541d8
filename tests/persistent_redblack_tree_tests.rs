//! Unit tests for PersistentRedBlackTree.

use persistent_redblack::persistent::{PersistentRedBlackTree, Traversal};
use rstest::rstest;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Maximum height allowed for a red-black tree with `len` keys.
fn height_bound(len: usize) -> f64 {
    2.0 * ((len + 1) as f64).log2()
}

// =============================================================================
// Basic Construction Tests
// =============================================================================

#[rstest]
fn test_new_creates_empty_tree() {
    let tree: PersistentRedBlackTree<i32> = PersistentRedBlackTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), -1);
    assert_eq!(tree.min(), None);
    assert_eq!(tree.max(), None);
}

#[rstest]
fn test_default_creates_empty_tree() {
    let tree: PersistentRedBlackTree<String> = PersistentRedBlackTree::default();
    assert!(tree.is_empty());
}

#[rstest]
fn test_singleton_creates_black_root() {
    let tree = PersistentRedBlackTree::singleton(42);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.height(), 0);
    assert_eq!(format!("{tree:?}"), "(B E 42 E)");
}

// =============================================================================
// Insert Tests
// =============================================================================

#[rstest]
fn test_insert_keeps_keys_sorted() {
    let tree: PersistentRedBlackTree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    let keys: Vec<i32> = tree.iter().copied().collect();
    assert_eq!(keys, vec![1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(tree.min(), Some(&1));
    assert_eq!(tree.max(), Some(&9));
    assert!(tree.check_invariants().is_ok());
}

#[rstest]
fn test_duplicate_inserts_count_distinct_keys() {
    let tree: PersistentRedBlackTree<i32> = [3, 1, 3, 2, 1, 3].into_iter().collect();
    assert_eq!(tree.len(), 3);
    assert_eq!(format!("{tree}"), "{1, 2, 3}");
}

#[derive(Clone, Debug)]
struct Versioned {
    id: u32,
    revision: u32,
}

impl PartialEq for Versioned {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Versioned {}

impl PartialOrd for Versioned {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Versioned {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

#[rstest]
fn test_reinsert_overwrites_stored_key() {
    let tree = PersistentRedBlackTree::new()
        .insert(Versioned { id: 1, revision: 0 })
        .insert(Versioned { id: 2, revision: 0 });
    let updated = tree.insert(Versioned { id: 1, revision: 7 });

    let probe = Versioned { id: 1, revision: 99 };
    assert_eq!(updated.len(), 2);
    assert_eq!(updated.get(&probe).map(|stored| stored.revision), Some(7));
    assert_eq!(tree.get(&probe).map(|stored| stored.revision), Some(0));
}

#[rstest]
fn test_get_borrowed_form() {
    let tree: PersistentRedBlackTree<String> =
        ["pear", "apple", "fig"].into_iter().map(String::from).collect();
    assert_eq!(tree.get("fig").map(String::as_str), Some("fig"));
    assert!(tree.contains("apple"));
    assert!(!tree.contains("plum"));
}

#[rstest]
#[case::ascending((0..1000).collect::<Vec<i32>>())]
#[case::descending((0..1000).rev().collect::<Vec<i32>>())]
#[case::zigzag((0..500).flat_map(|index| [index, 999 - index]).collect::<Vec<i32>>())]
fn test_height_stays_logarithmic(#[case] keys: Vec<i32>) {
    let tree: PersistentRedBlackTree<i32> = keys.into_iter().collect();
    assert_eq!(tree.len(), 1000);
    assert!(tree.check_invariants().is_ok());
    assert!((tree.height() as f64) <= height_bound(tree.len()));
}

// =============================================================================
// Remove Tests
// =============================================================================

#[rstest]
fn test_remove_two_keys_from_seven() {
    let tree: PersistentRedBlackTree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    let removed = tree.remove(&3).remove(&8);

    let keys: Vec<i32> = removed.iter().copied().collect();
    assert_eq!(keys, vec![1, 4, 5, 7, 9]);
    assert!(removed.check_invariants().is_ok());
    assert!((removed.height() as f64) <= height_bound(removed.len()));
}

#[rstest]
fn test_remove_root_of_three() {
    let tree: PersistentRedBlackTree<i32> = [2, 1, 3].into_iter().collect();
    let removed = tree.remove(&2);

    let keys: Vec<i32> = removed.iter().copied().collect();
    assert_eq!(keys, vec![1, 3]);
    assert!(format!("{removed:?}").starts_with("(B "));
    assert!(removed.check_invariants().is_ok());
}

#[rstest]
fn test_remove_only_key_gives_empty_tree() {
    let tree = PersistentRedBlackTree::singleton("only");
    let removed = tree.remove(&"only");
    assert!(removed.is_empty());
    assert_eq!(format!("{removed:?}"), "E");
}

#[rstest]
fn test_remove_absent_key_returns_same_tree() {
    let tree: PersistentRedBlackTree<i32> = (0..50).collect();
    let removed = tree.remove(&1000);
    assert!(removed.ptr_eq(&tree));
    assert_eq!(removed.len(), 50);
}

#[rstest]
fn test_remove_from_empty_tree() {
    let tree: PersistentRedBlackTree<i32> = PersistentRedBlackTree::new();
    assert!(tree.remove(&1).is_empty());
}

#[rstest]
fn test_remove_every_key_in_turn() {
    let tree: PersistentRedBlackTree<i32> = (0..64).collect();
    let emptied = (0..64).fold(tree, |tree, key| {
        let next = tree.remove(&key);
        assert!(next.check_invariants().is_ok(), "after removing {key}");
        next
    });
    assert!(emptied.is_empty());
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[rstest]
fn test_older_versions_survive_updates() {
    let versions: Vec<PersistentRedBlackTree<i32>> = (0..20)
        .scan(PersistentRedBlackTree::new(), |tree, key| {
            *tree = tree.insert(key);
            Some(tree.clone())
        })
        .collect();

    for (index, version) in versions.iter().enumerate() {
        assert_eq!(version.len(), index + 1);
        assert!(version.iter().copied().eq(0..=index as i32));
    }

    let shrunk = versions[19].remove(&10);
    assert!(versions[19].contains(&10));
    assert!(!shrunk.contains(&10));
}

// =============================================================================
// Operator Tests
// =============================================================================

#[rstest]
fn test_add_and_sub_operators() {
    let tree = PersistentRedBlackTree::new() + 2 + 1 + 3;
    assert_eq!(format!("{tree}"), "{1, 2, 3}");

    let smaller = tree.clone() - &2;
    assert_eq!(format!("{smaller}"), "{1, 3}");
    assert_eq!(tree.len(), 3);
}

// =============================================================================
// Fold Tests
// =============================================================================

#[rstest]
fn test_in_order_folds_agree_with_iter() {
    let tree: PersistentRedBlackTree<i32> = [8, 3, 10, 1, 6, 14, 4, 7, 13].into_iter().collect();

    let ascending = tree.fold_left(Traversal::InOrder, Vec::new(), |mut keys, key| {
        keys.push(*key);
        keys
    });
    assert_eq!(ascending, tree.iter().copied().collect::<Vec<_>>());

    let descending = tree.fold_right(Traversal::InOrder, Vec::new(), |key, mut keys| {
        keys.push(*key);
        keys
    });
    assert_eq!(descending, ascending.iter().rev().copied().collect::<Vec<_>>());
}

#[rstest]
#[case(Traversal::PreOrder)]
#[case(Traversal::InOrder)]
#[case(Traversal::PostOrder)]
fn test_every_traversal_visits_every_key_once(#[case] traversal: Traversal) {
    let tree: PersistentRedBlackTree<i32> = (0..100).collect();
    let visited = tree.fold_left(traversal, HashSet::new(), |mut seen, key| {
        assert!(seen.insert(*key));
        seen
    });
    assert_eq!(visited.len(), 100);
}

#[rstest]
fn test_fold_tree_computes_height() {
    let tree: PersistentRedBlackTree<i32> = (0..100).collect();
    let height = tree.fold_tree(-1_isize, |left, _, right| 1 + left.max(right));
    assert_eq!(height, tree.height());
}

// =============================================================================
// Equality and Formatting Tests
// =============================================================================

#[rstest]
fn test_equality_ignores_insertion_order() {
    let ascending: PersistentRedBlackTree<i32> = (0..10).collect();
    let descending: PersistentRedBlackTree<i32> = (0..10).rev().collect();
    assert_eq!(ascending, descending);
    assert_ne!(ascending, ascending.remove(&5));
}

#[rstest]
fn test_display_empty_tree() {
    let tree: PersistentRedBlackTree<i32> = PersistentRedBlackTree::new();
    assert_eq!(format!("{tree}"), "{}");
}
