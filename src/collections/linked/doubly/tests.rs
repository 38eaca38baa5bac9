#![cfg(test)]

use super::*;

#[test]
fn test_push_pop_both_ends() {
    let mut list = DoublyLinkedList::new();
    list.push_back(2);
    list.push_front(1);
    list.push_back(3);

    assert_eq!(list.len(), 3);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));

    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_back(), Some(3));
    assert_eq!(list.pop_back(), Some(2));
    assert_eq!(list.pop_front(), None);
    assert!(list.is_empty());
}

#[test]
fn test_single_element_keeps_ends_consistent() {
    let mut list = DoublyLinkedList::new();
    list.push_front(1);
    assert_eq!(list.front(), list.back());
    assert_eq!(list.pop_back(), Some(1));
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);

    list.push_back(2);
    assert_eq!(list.pop_front(), Some(2));
    assert!(list.is_empty());
}

#[test]
fn test_seek_from_both_ends() {
    let list: DoublyLinkedList<_> = (0..10).collect();
    // Indices in the first half walk from the head, the rest from the tail.
    assert_eq!(list[1], 1);
    assert_eq!(list[8], 8);
    assert_eq!(list[5], 5);
    assert!(list.try_get(10).is_err());
}

#[test]
fn test_insert_and_remove_mid_list() {
    let mut list: DoublyLinkedList<_> = (0..5).collect();
    list.insert(2, 100);
    list.insert(6, 200);
    list.insert(0, 300);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [300, 0, 1, 100, 2, 3, 4, 200]);

    assert_eq!(list.remove(3), 100);
    assert_eq!(list.remove(0), 300);
    assert_eq!(list.remove(5), 200);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);

    assert!(list.try_remove(5).is_err());
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_insert_past_end_panics() {
    let mut list: DoublyLinkedList<_> = (0..3).collect();
    list.insert(5, 9);
}

#[test]
fn test_replace() {
    let mut list: DoublyLinkedList<_> = (0..3).collect();
    assert_eq!(list.replace(2, 100), 2);
    assert_eq!(list.back(), Some(&100));
}

#[test]
fn test_append_moves_everything() {
    let mut left: DoublyLinkedList<_> = (0..3).collect();
    let mut right: DoublyLinkedList<_> = (3..6).collect();
    left.append(&mut right);

    assert_eq!(left.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4, 5]);
    assert_eq!(left.len(), 6);
    assert!(right.is_empty());

    // The spliced list must still pop cleanly from the back.
    assert_eq!(left.pop_back(), Some(5));

    let mut empty = DoublyLinkedList::new();
    empty.append(&mut left);
    assert_eq!(empty.len(), 5);
}

#[test]
fn test_iter_both_directions() {
    let list: DoublyLinkedList<_> = (0..5).collect();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
    assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [4, 3, 2, 1, 0]);

    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(&0));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.len(), 3);
}

#[test]
fn test_iter_mut() {
    let mut list: DoublyLinkedList<_> = (0..4).collect();
    for value in list.iter_mut() {
        *value += 10;
    }
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [10, 11, 12, 13]);
}

#[test]
fn test_into_iter_double_ended() {
    let list: DoublyLinkedList<_> = (0..6).collect();
    let mut iter = list.into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(5));
    assert_eq!(iter.collect::<Vec<_>>(), [1, 2, 3, 4]);
}

#[test]
fn test_contains_and_index_of() {
    let list: DoublyLinkedList<_> = [7, 2, 9, 2].into_iter().collect();
    assert!(list.contains(&9));
    assert_eq!(list.index_of(&2), Some(1));
    assert_eq!(list.index_of(&1), None);
}

#[test]
fn test_clear_then_reuse() {
    let mut list: DoublyLinkedList<_> = (0..10).collect();
    list.clear();
    assert!(list.is_empty());
    list.push_back(1);
    list.push_front(0);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1]);
}

#[test]
fn test_long_list_drop_does_not_overflow() {
    let list: DoublyLinkedList<_> = (0..100_000).collect();
    assert_eq!(list.len(), 100_000);
    drop(list);
}
