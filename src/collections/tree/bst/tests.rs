#![cfg(test)]

use super::*;

#[test]
fn test_insert_and_contains() {
    let mut tree = BinarySearchTree::new();
    for value in [5, 3, 8, 1, 4, 7, 9] {
        assert!(tree.insert(value));
    }
    assert_eq!(tree.len(), 7);

    for value in [5, 3, 8, 1, 4, 7, 9] {
        assert!(tree.contains(&value));
    }
    assert!(!tree.contains(&6));
    assert!(!tree.insert(5));
    assert_eq!(tree.len(), 7);
}

#[test]
fn test_iter_is_sorted() {
    let tree: BinarySearchTree<_> = [5, 3, 8, 1, 4, 7, 9, 2, 6, 0].into_iter().collect();
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), (0..10).collect::<Vec<_>>());
}

#[test]
fn test_remove_leaf() {
    let mut tree: BinarySearchTree<_> = [5, 3, 8].into_iter().collect();
    assert_eq!(tree.remove(&3), Some(3));
    assert_eq!(tree.len(), 2);
    assert!(!tree.contains(&3));
    assert!(tree.contains(&5));
    assert!(tree.contains(&8));
}

#[test]
fn test_remove_single_child_node() {
    let mut tree: BinarySearchTree<_> = [5, 3, 2].into_iter().collect();
    assert_eq!(tree.remove(&3), Some(3));
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [2, 5]);
}

#[test]
fn test_remove_two_child_node_uses_successor() {
    let mut tree: BinarySearchTree<_> = [5, 3, 8, 7, 9, 6].into_iter().collect();
    assert_eq!(tree.remove(&8), Some(8));
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 5, 6, 7, 9]);

    // Removing the root exercises the same path.
    assert_eq!(tree.remove(&5), Some(5));
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 6, 7, 9]);
}

#[test]
fn test_remove_missing_value() {
    let mut tree: BinarySearchTree<_> = [1, 2, 3].into_iter().collect();
    assert_eq!(tree.remove(&4), None);
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_first_and_last() {
    let tree: BinarySearchTree<_> = [5, 3, 8, 1, 9].into_iter().collect();
    assert_eq!(tree.first(), Some(&1));
    assert_eq!(tree.last(), Some(&9));

    let empty: BinarySearchTree<u32> = BinarySearchTree::new();
    assert_eq!(empty.first(), None);
    assert_eq!(empty.last(), None);
}

#[test]
fn test_height() {
    let mut tree = BinarySearchTree::new();
    assert_eq!(tree.height(), -1);
    tree.insert(5);
    assert_eq!(tree.height(), 0);
    tree.insert(3);
    tree.insert(8);
    assert_eq!(tree.height(), 1);

    // Sorted input degenerates into a chain.
    let chain: BinarySearchTree<_> = (0..10).collect();
    assert_eq!(chain.height(), 9);
}

#[test]
fn test_traversal_orders() {
    let tree: BinarySearchTree<_> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();

    let mut in_order = Vec::new();
    tree.for_each_in_order(|v| in_order.push(*v));
    assert_eq!(in_order, [1, 2, 3, 4, 5, 6, 7]);

    let mut pre_order = Vec::new();
    tree.for_each_pre_order(|v| pre_order.push(*v));
    assert_eq!(pre_order, [4, 2, 1, 3, 6, 5, 7]);

    let mut post_order = Vec::new();
    tree.for_each_post_order(|v| post_order.push(*v));
    assert_eq!(post_order, [1, 3, 2, 5, 7, 6, 4]);
}

#[test]
fn test_into_iter_ascending() {
    let tree: BinarySearchTree<_> = [3, 1, 4, 1, 5, 9, 2, 6].into_iter().collect();
    assert_eq!(tree.into_iter().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6, 9]);
}

#[test]
fn test_clear_then_reuse() {
    let mut tree: BinarySearchTree<_> = (0..10).collect();
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.height(), -1);
    assert!(tree.insert(1));
}

#[test]
fn test_degenerate_tree_drop_is_iterative() {
    // Sorted insertion builds a 5_000-deep chain; drop must not recurse through it.
    let tree: BinarySearchTree<_> = (0..5_000).collect();
    assert_eq!(tree.len(), 5_000);
    drop(tree);
}
