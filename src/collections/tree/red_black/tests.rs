#![cfg(test)]

use super::*;

#[test]
fn test_sorted_insertion_keeps_invariants() {
    let mut tree = RedBlackTree::new();
    for value in 0..1000 {
        assert!(tree.insert(value));
        tree.verify_invariants();
    }
    assert_eq!(tree.len(), 1000);
    // Height is bounded by 2 * log2(n + 1).
    assert!(tree.height() <= 20, "height {} is too tall for 1000 nodes", tree.height());
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), (0..1000).collect::<Vec<_>>());
}

#[test]
fn test_reverse_and_shuffled_insertion() {
    let mut tree = RedBlackTree::new();
    for value in (0..500).rev() {
        tree.insert(value);
    }
    tree.verify_invariants();

    let mut shuffled = RedBlackTree::new();
    // A fixed pseudo-shuffle: multiples of a coprime step cover 0..500 in scattered order.
    for i in 0..500 {
        shuffled.insert(i * 211 % 500);
    }
    shuffled.verify_invariants();
    assert_eq!(tree, shuffled);
}

#[test]
fn test_duplicate_insert_rejected() {
    let mut tree: RedBlackTree<_> = [1, 2, 3].into_iter().collect();
    assert!(!tree.insert(2));
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_remove_every_value() {
    let mut tree: RedBlackTree<_> = (0..200).collect();

    // Mixed removal order: front, back, then middle.
    for value in 0..50 {
        assert_eq!(tree.remove(&value), Some(value));
        tree.verify_invariants();
    }
    for value in (150..200).rev() {
        assert_eq!(tree.remove(&value), Some(value));
        tree.verify_invariants();
    }
    for value in 50..150 {
        assert_eq!(tree.remove(&value), Some(value));
        tree.verify_invariants();
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), -1);
}

#[test]
fn test_remove_two_child_node() {
    let mut tree: RedBlackTree<_> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
    assert_eq!(tree.remove(&4), Some(4));
    tree.verify_invariants();
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 5, 6, 7]);
}

#[test]
fn test_remove_missing_value() {
    let mut tree: RedBlackTree<_> = [1, 2, 3].into_iter().collect();
    assert_eq!(tree.remove(&9), None);
    assert_eq!(tree.len(), 3);
    tree.verify_invariants();
}

#[test]
fn test_interleaved_operations() {
    let mut tree = RedBlackTree::new();
    for value in 0..300 {
        tree.insert(value);
        if value % 3 == 0 {
            tree.remove(&(value / 2));
            tree.verify_invariants();
        }
    }

    // The survivors must be exactly the values never removed.
    let mut expected: Vec<_> = (0..300).collect();
    for value in 0..300 {
        if value % 3 == 0 {
            expected.retain(|v| *v != value / 2);
        }
    }
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), expected);
}

#[test]
fn test_first_and_last() {
    let tree: RedBlackTree<_> = [42, 17, 99, 3].into_iter().collect();
    assert_eq!(tree.first(), Some(&3));
    assert_eq!(tree.last(), Some(&99));

    let empty: RedBlackTree<u32> = RedBlackTree::new();
    assert_eq!(empty.first(), None);
    assert_eq!(empty.last(), None);
}

#[test]
fn test_into_iter_ascending() {
    let tree: RedBlackTree<_> = [3, 1, 4, 1, 5].into_iter().collect();
    assert_eq!(tree.into_iter().collect::<Vec<_>>(), [1, 3, 4, 5]);
}

#[test]
fn test_clear_then_reuse() {
    let mut tree: RedBlackTree<_> = (0..50).collect();
    tree.clear();
    assert!(tree.is_empty());
    assert!(tree.insert(1));
    tree.verify_invariants();
}
