#![cfg(test)]

use super::*;
use crate::util::hash::{BadHasherBuilder, ManualHash};

#[test]
fn test_insert_contains_remove() {
    let mut set = HashSet::new();
    for i in 0..100 {
        assert!(set.insert(i));
    }
    assert_eq!(set.len(), 100);

    for i in 0..100 {
        assert!(set.contains(&i));
    }
    assert!(!set.contains(&100));

    for i in (0..100).step_by(2) {
        assert_eq!(set.remove(&i), Some(i));
    }
    assert_eq!(set.len(), 50);
    assert!(!set.contains(&0));
    assert!(set.contains(&1));
}

#[test]
fn test_duplicate_insert_keeps_original() {
    let mut set = HashSet::with_hasher(BadHasherBuilder);
    assert!(set.insert(ManualHash::new(7, "first")));
    assert!(!set.insert(ManualHash::new(7, "first")));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_collisions_probe_forward() {
    let mut set = HashSet::with_cap_and_hasher(8, BadHasherBuilder);
    // All three hash to the same home bucket.
    set.insert(ManualHash::new(1, 'a'));
    set.insert(ManualHash::new(1, 'b'));
    set.insert(ManualHash::new(1, 'c'));

    assert_eq!(set.len(), 3);
    assert!(set.contains(&ManualHash::new(1, 'a')));
    assert!(set.contains(&ManualHash::new(1, 'b')));
    assert!(set.contains(&ManualHash::new(1, 'c')));
}

#[test]
fn test_remove_shifts_probe_run() {
    let mut set = HashSet::with_cap_and_hasher(8, BadHasherBuilder);
    set.insert(ManualHash::new(1, 'a'));
    set.insert(ManualHash::new(1, 'b'));
    set.insert(ManualHash::new(2, 'c'));
    set.insert(ManualHash::new(1, 'd'));

    // Removing the head of the run must not strand the displaced values behind the gap.
    assert!(set.remove(&ManualHash::new(1, 'a')).is_some());
    assert!(set.contains(&ManualHash::new(1, 'b')));
    assert!(set.contains(&ManualHash::new(2, 'c')));
    assert!(set.contains(&ManualHash::new(1, 'd')));

    // 'c' must still be findable from its own home bucket after the shuffle.
    assert!(set.remove(&ManualHash::new(2, 'c')).is_some());
    assert!(set.contains(&ManualHash::new(1, 'b')));
    assert!(set.contains(&ManualHash::new(1, 'd')));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_wraparound_probing() {
    let mut set = HashSet::with_cap_and_hasher(8, BadHasherBuilder);
    // Home bucket 7 is the last slot; the run wraps to slot 0.
    set.insert(ManualHash::new(7, 'x'));
    set.insert(ManualHash::new(7, 'y'));
    assert!(set.contains(&ManualHash::new(7, 'y')));

    assert!(set.remove(&ManualHash::new(7, 'x')).is_some());
    assert!(set.contains(&ManualHash::new(7, 'y')));
}

#[test]
fn test_growth_keeps_all_values() {
    let mut set = HashSet::with_cap(2);
    for i in 0..1000 {
        set.insert(i);
    }
    assert_eq!(set.len(), 1000);
    assert!(set.cap() > 1000, "load factor must leave free buckets");
    for i in 0..1000 {
        assert!(set.contains(&i));
    }
}

#[test]
fn test_get_returns_stored_value() {
    let mut set = HashSet::new();
    set.insert(String::from("hello"));
    assert_eq!(set.get(&String::from("hello")), Some(&String::from("hello")));
    assert_eq!(set.get(&String::from("world")), None);
}

#[test]
fn test_empty_set_lookups() {
    let set: HashSet<u32> = HashSet::new();
    assert!(!set.contains(&1));
    assert_eq!(set.cap(), 0);
    assert!(set.iter().next().is_none());
}

#[test]
fn test_iterators_visit_every_value_once() {
    let set: HashSet<_> = (0..50).collect();
    let mut seen: Vec<_> = set.iter().copied().collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..50).collect::<Vec<_>>());

    let mut owned: Vec<_> = set.into_iter().collect();
    owned.sort_unstable();
    assert_eq!(owned, (0..50).collect::<Vec<_>>());
}

#[test]
fn test_equality_is_order_independent() {
    let forwards: HashSet<_> = (0..20).collect();
    let backwards: HashSet<_> = (0..20).rev().collect();
    assert_eq!(forwards, backwards);

    let smaller: HashSet<_> = (0..19).collect();
    assert_ne!(forwards, smaller);
}

#[test]
fn test_clear_keeps_table() {
    let mut set: HashSet<_> = (0..10).collect();
    let cap = set.cap();
    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.cap(), cap);
    assert!(set.insert(5));
}

#[test]
fn test_reserve_prevents_rehashing() {
    let mut set = HashSet::new();
    set.reserve(100);
    let cap = set.cap();
    for i in 0..100 {
        set.insert(i);
    }
    assert_eq!(set.cap(), cap);
    assert_eq!(set.len(), 100);
}
