#![cfg(test)]

use super::*;

#[test]
fn test_insert_keeps_values_sorted() {
    let mut list = SkipList::with_seed(42);
    for value in [5, 1, 9, 3, 7, 2, 8, 4, 6, 0] {
        assert!(list.insert(value));
    }
    assert_eq!(list.len(), 10);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), (0..10).collect::<Vec<_>>());
}

#[test]
fn test_duplicate_insert_rejected() {
    let mut list = SkipList::with_seed(1);
    assert!(list.insert(3));
    assert!(!list.insert(3));
    assert_eq!(list.len(), 1);
}

#[test]
fn test_contains_and_get() {
    let list: SkipList<_> = [10, 20, 30].into_iter().collect();
    assert!(list.contains(&20));
    assert!(!list.contains(&25));
    assert_eq!(list.get(&30), Some(&30));
    assert_eq!(list.get(&5), None);
}

#[test]
fn test_remove_relinks_every_level() {
    let mut list = SkipList::with_seed(99);
    for value in 0..100 {
        list.insert(value);
    }

    // Remove from the middle, the ends and nonexistent values.
    assert_eq!(list.remove(&50), Some(50));
    assert_eq!(list.remove(&0), Some(0));
    assert_eq!(list.remove(&99), Some(99));
    assert_eq!(list.remove(&50), None);
    assert_eq!(list.len(), 97);

    // Every survivor must remain reachable through the rebuilt towers.
    for value in 1..99 {
        assert_eq!(list.contains(&value), value != 50);
    }
    assert_eq!(list.iter().count(), 97);
}

#[test]
fn test_first_is_minimum() {
    let mut list = SkipList::with_seed(5);
    assert_eq!(list.first(), None);
    list.extend([4, 2, 8]);
    assert_eq!(list.first(), Some(&2));
    list.remove(&2);
    assert_eq!(list.first(), Some(&4));
}

#[test]
fn test_into_iter_ascending() {
    let list: SkipList<_> = [3, 1, 2].into_iter().collect();
    assert_eq!(list.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
}

#[test]
fn test_seeded_lists_are_reproducible() {
    let mut a = SkipList::with_seed(1234);
    let mut b = SkipList::with_seed(1234);
    for value in 0..50 {
        a.insert(value);
        b.insert(value);
    }
    assert_eq!(a, b);
}

#[test]
fn test_clear_then_reuse() {
    let mut list: SkipList<_> = (0..20).collect();
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.first(), None);

    assert!(list.insert(7));
    assert!(list.contains(&7));
    assert_eq!(list.len(), 1);
}

#[test]
fn test_interleaved_churn_matches_shadow_set() {
    use std::collections::BTreeSet;

    let mut list = SkipList::with_seed(77);
    let mut shadow = BTreeSet::new();

    // Interleave inserts and removes over a small key range so towers are torn down and
    // rebuilt constantly, then check the list against an ordered shadow.
    let mut key: u64 = 0xDEAD_BEEF;
    for _ in 0..4000 {
        key = key.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let value = (key >> 33) % 64;
        if key % 3 == 0 {
            assert_eq!(list.remove(&value), shadow.take(&value));
        } else {
            assert_eq!(list.insert(value), shadow.insert(value));
        }
        assert_eq!(list.len(), shadow.len());
    }

    assert!(list.iter().copied().eq(shadow.iter().copied()));
    assert!(list.into_iter().eq(shadow.into_iter()));
}

#[test]
fn test_large_list_stays_consistent() {
    let mut list = SkipList::with_seed(2024);
    for value in (0..2000).rev() {
        list.insert(value);
    }
    assert_eq!(list.len(), 2000);
    assert_eq!(list.first(), Some(&0));
    assert!(list.contains(&1999));

    for value in (0..2000).step_by(3) {
        assert_eq!(list.remove(&value), Some(value));
    }
    let expected: Vec<_> = (0..2000).filter(|v| v % 3 != 0).collect();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), expected);
}
