#![cfg(test)]

use super::*;

#[test]
fn test_sorted_insertion_stays_balanced() {
    let mut tree = AvlTree::new();
    for value in 0..1000 {
        assert!(tree.insert(value));
        tree.verify_balanced();
    }
    assert_eq!(tree.len(), 1000);
    // An AVL tree of n nodes is no taller than 1.44 * log2(n).
    assert!(tree.height() <= 14, "height {} is too tall for 1000 nodes", tree.height());
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), (0..1000).collect::<Vec<_>>());
}

#[test]
fn test_left_right_and_right_left_rotations() {
    // Each triple forces a double rotation at the root.
    let lr: AvlTree<_> = [3, 1, 2].into_iter().collect();
    lr.verify_balanced();
    assert_eq!(lr.height(), 1);

    let rl: AvlTree<_> = [1, 3, 2].into_iter().collect();
    rl.verify_balanced();
    assert_eq!(rl.height(), 1);
}

#[test]
fn test_duplicate_insert_rejected() {
    let mut tree: AvlTree<_> = [1, 2, 3].into_iter().collect();
    assert!(!tree.insert(2));
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_remove_rebalances() {
    let mut tree: AvlTree<_> = (0..100).collect();

    // Stripping out one side forces rebalancing on the way back up.
    for value in 0..50 {
        assert_eq!(tree.remove(&value), Some(value));
        tree.verify_balanced();
    }
    assert_eq!(tree.len(), 50);
    assert_eq!(tree.first(), Some(&50));

    for value in 50..100 {
        assert!(tree.contains(&value));
    }
}

#[test]
fn test_remove_two_child_node() {
    let mut tree: AvlTree<_> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
    assert_eq!(tree.remove(&4), Some(4));
    tree.verify_balanced();
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 5, 6, 7]);
}

#[test]
fn test_remove_missing_value() {
    let mut tree: AvlTree<_> = [1, 2, 3].into_iter().collect();
    assert_eq!(tree.remove(&9), None);
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_first_last_and_height_on_empty() {
    let tree: AvlTree<u32> = AvlTree::new();
    assert_eq!(tree.first(), None);
    assert_eq!(tree.last(), None);
    assert_eq!(tree.height(), -1);
}

#[test]
fn test_interleaved_operations() {
    let mut tree = AvlTree::new();
    for value in (0..500).rev() {
        tree.insert(value);
    }
    for value in (0..500).step_by(3) {
        tree.remove(&value);
    }
    tree.verify_balanced();

    let expected: Vec<_> = (0..500).filter(|v| v % 3 != 0).collect();
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), expected);
    assert_eq!(tree.len(), expected.len());
}

#[test]
fn test_into_iter_ascending() {
    let tree: AvlTree<_> = [5, 2, 8, 1, 9].into_iter().collect();
    assert_eq!(tree.into_iter().collect::<Vec<_>>(), [1, 2, 5, 8, 9]);
}

#[test]
fn test_clear_then_reuse() {
    let mut tree: AvlTree<_> = (0..50).collect();
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.height(), -1);
    assert!(tree.insert(7));
    tree.verify_balanced();
}
