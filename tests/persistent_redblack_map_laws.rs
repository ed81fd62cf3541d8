//! Property-based tests for PersistentRedBlackMap.
//!
//! These tests verify that PersistentRedBlackMap satisfies the expected laws
//! and invariants using proptest.

use persistent_redblack::persistent::PersistentRedBlackMap;
use proptest::prelude::*;
use std::collections::BTreeMap;

// =============================================================================
// Strategies for Generating Test Data
// =============================================================================

/// Strategy for generating a PersistentRedBlackMap from a vector of key-value pairs.
fn arbitrary_map(max_size: usize) -> impl Strategy<Value = PersistentRedBlackMap<i32, i32>> {
    prop::collection::vec((any::<i32>(), any::<i32>()), 0..max_size)
        .prop_map(|entries| entries.into_iter().collect::<PersistentRedBlackMap<i32, i32>>())
}

// =============================================================================
// Get-Insert Laws
// =============================================================================

proptest! {
    /// Law: get after insert returns the inserted value.
    /// map.insert(key, value).get(&key) == Some(&value)
    #[test]
    fn prop_get_insert_law(map in arbitrary_map(20), key: i32, value: i32) {
        let updated = map.insert(key, value);
        prop_assert_eq!(updated.get(&key), Some(&value));
    }

    /// Law: insert does not affect other keys.
    /// key1 != key2 => map.insert(key1, value).get(&key2) == map.get(&key2)
    #[test]
    fn prop_get_insert_other_law(map in arbitrary_map(20), key1: i32, key2: i32, value: i32) {
        prop_assume!(key1 != key2);
        let updated = map.insert(key1, value);
        prop_assert_eq!(updated.get(&key2), map.get(&key2));
    }
}

// =============================================================================
// Remove Laws
// =============================================================================

proptest! {
    /// Law: get after remove returns None.
    /// map.remove(&key).get(&key) == None
    #[test]
    fn prop_get_remove_law(map in arbitrary_map(20), key: i32) {
        let removed = map.remove(&key);
        prop_assert_eq!(removed.get(&key), None);
    }

    /// Law: remove does not affect other keys.
    /// key1 != key2 => map.remove(&key1).get(&key2) == map.get(&key2)
    #[test]
    fn prop_get_remove_other_law(map in arbitrary_map(20), key1: i32, key2: i32) {
        prop_assume!(key1 != key2);
        let removed = map.remove(&key1);
        prop_assert_eq!(removed.get(&key2), map.get(&key2));
    }
}

// =============================================================================
// Length Laws
// =============================================================================

proptest! {
    /// Law: insert of a fresh key grows the map by one, of a present key by zero.
    #[test]
    fn prop_insert_len_law(map in arbitrary_map(50), key: i32, value: i32) {
        let expected = if map.contains_key(&key) { map.len() } else { map.len() + 1 };
        prop_assert_eq!(map.insert(key, value).len(), expected);
    }

    /// Law: the map agrees with BTreeMap built from the same entries.
    #[test]
    fn prop_matches_btreemap(
        entries in prop::collection::vec((0_i32..100, any::<i32>()), 0..200),
        removals in prop::collection::vec(0_i32..100, 0..50)
    ) {
        let mut model: BTreeMap<i32, i32> = entries.iter().copied().collect();
        let mut map: PersistentRedBlackMap<i32, i32> = entries.into_iter().collect();
        for key in &removals {
            model.remove(key);
            map = map.remove(key);
        }
        prop_assert_eq!(map.len(), model.len());
        prop_assert!(map.iter().eq(model.iter()));
    }
}
