#![cfg(test)]

use super::*;

#[test]
fn test_push_pop_front() {
    let mut list = SinglyLinkedList::new();
    list.push_front(3);
    list.push_front(2);
    list.push_front(1);

    assert_eq!(list.len(), 3);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_front(), Some(3));
    assert_eq!(list.pop_front(), None);
    assert!(list.is_empty());
}

#[test]
fn test_push_back_appends() {
    let mut list = SinglyLinkedList::new();
    for i in 0..5 {
        list.push_back(i);
    }
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
}

#[test]
fn test_indexed_access() {
    let list: SinglyLinkedList<_> = (10..15).collect();
    assert_eq!(list[0], 10);
    assert_eq!(list[4], 14);
    assert!(list.try_get(5).is_err());
}

#[test]
fn test_insert_and_remove_mid_list() {
    let mut list: SinglyLinkedList<_> = (0..5).collect();
    list.insert(2, 100);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 100, 2, 3, 4]);

    assert_eq!(list.remove(2), 100);
    assert_eq!(list.remove(0), 0);
    assert_eq!(list.remove(3), 4);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);

    assert!(list.try_remove(3).is_err());
    assert!(list.try_insert(4, 9).is_err());
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_index_out_of_bounds_panics() {
    let list: SinglyLinkedList<u32> = SinglyLinkedList::new();
    let _ = list[0];
}

#[test]
fn test_replace() {
    let mut list: SinglyLinkedList<_> = (0..3).collect();
    assert_eq!(list.replace(1, 100), 1);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 100, 2]);
}

#[test]
fn test_reverse() {
    let mut list: SinglyLinkedList<_> = (0..6).collect();
    list.reverse();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [5, 4, 3, 2, 1, 0]);
    assert_eq!(list.len(), 6);

    let mut empty: SinglyLinkedList<u32> = SinglyLinkedList::new();
    empty.reverse();
    assert!(empty.is_empty());

    let mut single: SinglyLinkedList<_> = [1].into_iter().collect();
    single.reverse();
    assert_eq!(single.front(), Some(&1));
}

#[test]
fn test_contains_and_index_of() {
    let list: SinglyLinkedList<_> = [5, 3, 8, 3].into_iter().collect();
    assert!(list.contains(&8));
    assert!(!list.contains(&4));
    assert_eq!(list.index_of(&3), Some(1));
    assert_eq!(list.index_of(&9), None);
}

#[test]
fn test_iter_mut() {
    let mut list: SinglyLinkedList<_> = (0..4).collect();
    for value in list.iter_mut() {
        *value *= 2;
    }
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 2, 4, 6]);
}

#[test]
fn test_into_iter_drains_in_order() {
    let list: SinglyLinkedList<_> = (0..5).collect();
    assert_eq!(list.into_iter().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
}

#[test]
fn test_long_list_drop_does_not_overflow() {
    let list: SinglyLinkedList<_> = (0..100_000).collect();
    assert_eq!(list.len(), 100_000);
    drop(list);
}

#[test]
fn test_back_walks_to_the_end() {
    let mut list: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();
    assert_eq!(list.back(), Some(&3));
    *list.back_mut().unwrap() = 30;
    assert_eq!(list.back(), Some(&30));

    let empty: SinglyLinkedList<u32> = SinglyLinkedList::new();
    assert_eq!(empty.back(), None);
}

#[test]
fn test_pop_back() {
    let mut list: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();
    assert_eq!(list.pop_back(), Some(3));
    assert_eq!(list.pop_back(), Some(2));
    assert_eq!(list.pop_back(), Some(1));
    assert_eq!(list.pop_back(), None);
    assert!(list.is_empty());
}
