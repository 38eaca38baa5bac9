use std::iter::FusedIterator;

use super::{BinarySearchTree, Branch, Node};
use crate::collections::contiguous::Stack;

impl<T: Ord> IntoIterator for BinarySearchTree<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut iter = IntoIter {
            spine: Stack::new(),
            remaining: self.len,
        };
        iter.descend(self.root.0.take());
        self.len = 0;
        iter
    }
}

/// An owned iterator over a [`BinarySearchTree`]'s values, from smallest to largest.
///
/// The tree is dissolved as it is walked: the stack holds each node whose left subtree has
/// already been yielded.
pub struct IntoIter<T: Ord> {
    spine: Stack<Box<Node<T>>>,
    remaining: usize,
}

impl<T: Ord> IntoIter<T> {
    /// Pushes the left spine of the provided subtree, making its minimum the top of the stack.
    fn descend(&mut self, mut branch: Option<Box<Node<T>>>) {
        while let Some(mut node) = branch {
            branch = node.left.0.take();
            self.spine.push(node);
        }
    }
}

impl<T: Ord> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.spine.pop()?;
        self.descend(node.right.0.take());
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Ord> FusedIterator for IntoIter<T> {}

impl<T: Ord> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<'a, T: Ord> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = Iter {
            spine: Stack::new(),
            remaining: self.len,
        };
        iter.descend(&self.root);
        iter
    }
}

/// A borrowing iterator over a [`BinarySearchTree`]'s values, from smallest to largest. See
/// [`BinarySearchTree::iter`].
pub struct Iter<'a, T: Ord> {
    spine: Stack<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T: Ord> Iter<'a, T> {
    fn descend(&mut self, mut branch: &'a Branch<T>) {
        while let Some(node) = &branch.0 {
            self.spine.push(node);
            branch = &node.left;
        }
    }
}

impl<'a, T: Ord> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.spine.pop()?;
        self.descend(&node.right);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Ord> FusedIterator for Iter<'_, T> {}

impl<T: Ord> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Iterates over the tree's values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}
