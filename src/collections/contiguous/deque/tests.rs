#![cfg(test)]

use std::cell::Cell;

use super::*;

#[test]
fn test_push_pop_both_ends() {
    let mut dq = Deque::new();
    dq.push_back(2);
    dq.push_back(3);
    dq.push_front(1);
    dq.push_front(0);

    assert_eq!(dq.len(), 4);
    assert_eq!(dq.front(), Some(&0));
    assert_eq!(dq.back(), Some(&3));

    assert_eq!(dq.pop_front(), Some(0));
    assert_eq!(dq.pop_back(), Some(3));
    assert_eq!(dq.pop_front(), Some(1));
    assert_eq!(dq.pop_back(), Some(2));
    assert_eq!(dq.pop_front(), None);
    assert_eq!(dq.pop_back(), None);
}

#[test]
fn test_wraparound_survives_growth() {
    let mut dq = Deque::with_cap(4);
    dq.extend(0..4);
    // Rotate so the ring wraps around the end of the buffer.
    for _ in 0..3 {
        let front = dq.pop_front().unwrap();
        dq.push_back(front);
    }
    assert_eq!(dq.iter().copied().collect::<Vec<_>>(), [3, 0, 1, 2]);

    // Push past the capacity, forcing a repack.
    dq.extend(4..10);
    assert_eq!(dq.iter().copied().collect::<Vec<_>>(), [3, 0, 1, 2, 4, 5, 6, 7, 8, 9]);
    assert_eq!(dq.pop_back(), Some(9));
    assert_eq!(dq.pop_front(), Some(3));
}

#[test]
fn test_get_is_logical_indexing() {
    let mut dq: Deque<_> = (0..5).collect();
    dq.push_front(-1);
    assert_eq!(dq.get(0), Some(&-1));
    assert_eq!(dq.get(3), Some(&2));
    assert_eq!(dq.get(6), None);

    if let Some(item) = dq.get_mut(0) {
        *item = 100;
    }
    assert_eq!(dq.front(), Some(&100));
}

#[test]
fn test_iterators_cover_both_directions() {
    let dq: Deque<_> = (0..6).collect();
    assert_eq!(dq.iter().rev().copied().collect::<Vec<_>>(), [5, 4, 3, 2, 1, 0]);

    let mut iter = dq.into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(5));
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.collect::<Vec<_>>(), [1, 2, 3, 4]);
}

#[test]
fn test_iter_mut() {
    let mut dq: Deque<_> = (0..4).collect();
    for item in &mut dq {
        *item *= 10;
    }
    assert_eq!(dq.iter().copied().collect::<Vec<_>>(), [0, 10, 20, 30]);
}

#[test]
fn test_clear_and_reserve() {
    let mut dq: Deque<_> = (0..10).collect();
    let cap = dq.cap();
    dq.clear();
    assert!(dq.is_empty());
    assert_eq!(dq.cap(), cap, "clear must not release the allocation");

    dq.reserve(100);
    assert!(dq.cap() >= 100);
}

#[test]
fn test_drop_runs_exactly_once_per_element() {
    struct Counted<'a>(&'a Cell<usize>);

    impl Drop for Counted<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    let drops = Cell::new(0);

    let mut dq = Deque::new();
    for _ in 0..8 {
        dq.push_back(Counted(&drops));
    }
    dq.push_front(Counted(&drops));
    drop(dq.pop_back());
    assert_eq!(drops.get(), 1);
    drop(dq);
    assert_eq!(drops.get(), 9);
}

#[test]
fn test_equality_ignores_physical_layout() {
    // Same logical contents, but one ring wraps around the buffer end.
    let mut rotated = Deque::with_cap(4);
    rotated.extend(0..4);
    for _ in 0..2 {
        let front = rotated.pop_front().unwrap();
        rotated.push_back(front);
    }
    for _ in 0..2 {
        let back = rotated.pop_back().unwrap();
        rotated.push_front(back);
    }

    let plain: Deque<_> = (0..4).collect();
    assert_eq!(rotated, plain);
}
