#![cfg(test)]

use std::cell::Cell;

use super::*;
use crate::util::error::IndexOrCapOverflow;

#[test]
fn test_push_pop_ordering() {
    let mut vec = Vector::new();
    for i in 0..100 {
        vec.push(i);
    }
    assert_eq!(vec.len(), 100);
    assert!(vec.cap() >= 100, "Capacity must always cover the length.");

    for i in (0..100).rev() {
        assert_eq!(vec.pop(), Some(i));
    }
    assert_eq!(vec.pop(), None);
}

#[test]
fn test_insert_and_remove_shift() {
    let mut vec = Vector::from(0..5);
    vec.insert(0, 100);
    vec.insert(3, 200);
    vec.insert(7, 300);
    assert_eq!(&*vec, &[100, 0, 1, 200, 2, 3, 4, 300]);

    assert_eq!(vec.remove(3), 200);
    assert_eq!(vec.remove(0), 100);
    assert_eq!(vec.remove(5), 300);
    assert_eq!(&*vec, &[0, 1, 2, 3, 4]);
}

#[test]
fn test_try_insert_reports_bad_index() {
    let mut vec = Vector::from(0..3);
    assert!(vec.try_insert(3, 9).is_ok());
    assert!(matches!(
        vec.try_insert(5, 9),
        Err(IndexOrCapOverflow::IndexOutOfBounds(_))
    ));
    assert_eq!(&*vec, &[0, 1, 2, 9]);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_remove_out_of_bounds_panics() {
    let mut vec = Vector::from(0..3);
    vec.remove(3);
}

#[test]
fn test_capacity_management() {
    let mut vec: Vector<u32> = Vector::with_cap(10);
    assert_eq!(vec.cap(), 10);

    vec.extend(0..4);
    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 4);

    vec.reserve(10);
    assert_eq!(vec.cap(), 14);

    // Reserving less than the spare capacity does nothing.
    vec.reserve(1);
    assert_eq!(vec.cap(), 14);

    vec.clear();
    assert!(vec.is_empty());
    assert_eq!(vec.cap(), 14, "clear must not release the allocation");
}

#[test]
fn test_split_off() {
    let mut vec = Vector::from(0..8);
    let back = vec.split_off(5);
    assert_eq!(&*vec, &[0, 1, 2, 3, 4]);
    assert_eq!(&*back, &[5, 6, 7]);

    let empty = vec.split_off(5);
    assert!(empty.is_empty());
    assert_eq!(vec.len(), 5);
}

#[test]
fn test_into_iter_front_and_back() {
    let mut iter = Vector::from(0..6).into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(5));
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.collect::<Vector<_>>(), Vector::from(1..5));
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

    let mut vec = Vector::new();
    for _ in 0..10 {
        vec.push(Counted(&drops));
    }
    drop(vec.remove(3));
    assert_eq!(drops.get(), 1);

    let mut iter = vec.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(drops.get(), 10);
}

#[test]
fn test_zero_sized_types() {
    let mut vec = Vector::new();
    for _ in 0..1000 {
        vec.push(());
    }
    assert_eq!(vec.len(), 1000);
    assert_eq!(vec.pop(), Some(()));
    vec.clear();
    assert!(vec.is_empty());
}
