use std::iter::FusedIterator;
use std::slice;

use super::{Rope, RopeNode};
use crate::collections::contiguous::{Stack, Vector, vector};

impl<T> IntoIterator for Rope<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut iter = IntoIter {
            spine: Stack::new(),
            current: Vector::new().into_iter(),
            remaining: self.len,
        };
        iter.descend(self.root.take());
        self.len = 0;
        iter
    }
}

/// An owned iterator over a [`Rope`]'s values, front to back.
pub struct IntoIter<T> {
    spine: Stack<Box<RopeNode<T>>>,
    current: vector::IntoIter<T>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    /// Walks to the leftmost leaf of `branch`, parking pending right subtrees on the spine.
    fn descend(&mut self, mut branch: Option<Box<RopeNode<T>>>) {
        while let Some(node) = branch {
            match *node {
                RopeNode::Leaf(chunk) => {
                    self.current = chunk.into_iter();
                    return;
                },
                RopeNode::Inner { left, right, .. } => {
                    self.spine.push(right);
                    branch = Some(left);
                },
            }
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.current.next() {
                self.remaining -= 1;
                return Some(value);
            }
            let right = self.spine.pop()?;
            self.descend(Some(right));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<'a, T> IntoIterator for &'a Rope<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = Iter {
            spine: Stack::new(),
            current: [].iter(),
            remaining: self.len,
        };
        iter.descend(self.root.as_deref());
        iter
    }
}

/// A borrowing iterator over a [`Rope`]'s values, front to back. See [`Rope::iter`].
pub struct Iter<'a, T> {
    spine: Stack<&'a RopeNode<T>>,
    current: slice::Iter<'a, T>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn descend(&mut self, mut branch: Option<&'a RopeNode<T>>) {
        while let Some(node) = branch {
            match node {
                RopeNode::Leaf(chunk) => {
                    self.current = chunk.iter();
                    return;
                },
                RopeNode::Inner { left, right, .. } => {
                    self.spine.push(right);
                    branch = Some(left);
                },
            }
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.current.next() {
                self.remaining -= 1;
                return Some(value);
            }
            let right = self.spine.pop()?;
            self.descend(Some(right));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> Rope<T> {
    /// Iterates over the rope's values from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}
