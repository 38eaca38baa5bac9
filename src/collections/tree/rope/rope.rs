use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use crate::collections::contiguous::Vector;

/// The largest number of values stored in a single leaf chunk.
pub(crate) const MAX_LEAF: usize = 8;

pub(crate) enum RopeNode<T> {
    Leaf(Vector<T>),
    Inner {
        /// The total number of values in the left subtree.
        weight: usize,
        left: Box<RopeNode<T>>,
        right: Box<RopeNode<T>>,
    },
}

/// A sequence of values stored as a binary tree of small chunks, supporting cheap concatenation
/// and splitting.
///
/// Leaves hold up to [`MAX_LEAF`] values in a [`Vector`]; inner nodes hold no values, only the
/// length of their left subtree as a `weight`. Indexing walks the weights: an index smaller than
/// the weight descends left, anything else subtracts the weight and descends right. Joining two
/// ropes therefore needs only a single new root, and splitting re-joins the fringe nodes along
/// one root-to-leaf path.
///
/// Unlike the ordered trees in this module, a [`Rope`] imposes no order on its values; it is a
/// sequence, positioned by index.
///
/// # Time Complexity
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(log n)` |
/// | `concat` | `O(1)` |
/// | `split` | `O(log n)` joins over an `O(n)` walk* |
///
/// *`split` recomputes subtree lengths while re-joining, so it is linear in the worst case.
pub struct Rope<T> {
    pub(crate) root: Option<Box<RopeNode<T>>>,
    pub(crate) len: usize,
}

impl<T> Rope<T> {
    /// Creates a new Rope with no values.
    pub const fn new() -> Rope<T> {
        Rope { root: None, len: 0 }
    }

    /// Returns the number of values in the rope.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the rope holds no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the value at `index`, if it is in bounds.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::tree::Rope;
    /// let rope: Rope<_> = (0..20).collect();
    /// assert_eq!(rope.get(13), Some(&13));
    /// assert_eq!(rope.get(20), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }

        let mut node = self.root.as_deref()?;
        let mut index = index;
        loop {
            match node {
                RopeNode::Leaf(chunk) => return chunk.get(index),
                RopeNode::Inner { weight, left, right } => {
                    if index < *weight {
                        node = left;
                    } else {
                        index -= *weight;
                        node = right;
                    }
                },
            }
        }
    }

    /// Joins two ropes end to end, consuming both. Only a single new root is allocated; the
    /// operands' trees are reused whole.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::tree::Rope;
    /// let left: Rope<_> = (0..10).collect();
    /// let right: Rope<_> = (10..20).collect();
    /// let rope = left.concat(right);
    /// assert_eq!(rope.iter().copied().collect::<Vec<_>>(), (0..20).collect::<Vec<_>>());
    /// ```
    pub fn concat(mut self, mut other: Rope<T>) -> Rope<T> {
        let (left_len, right_len) = (self.len, other.len);
        match (self.root.take(), other.root.take()) {
            (None, root) => Rope {
                root,
                len: right_len,
            },
            (root, None) => Rope { root, len: left_len },
            (Some(left), Some(right)) => Rope {
                root: Some(Box::new(RopeNode::Inner {
                    weight: left_len,
                    left,
                    right,
                })),
                len: left_len + right_len,
            },
        }
    }

    /// Cuts the rope in two, with the first `at` values on the left, consuming it.
    ///
    /// # Panics
    /// Panics if `at > len`.
    pub fn split(mut self, at: usize) -> (Rope<T>, Rope<T>) {
        let len = self.len;
        if at > len {
            panic!("rope split index {at} is out of bounds (len {len})");
        }

        let (left_root, right_root) = match self.root.take() {
            Some(root) => split_node(root, at),
            None => (None, None),
        };
        (
            Rope {
                root: left_root,
                len: at,
            },
            Rope {
                root: right_root,
                len: len - at,
            },
        )
    }

    /// Removes all values from the rope.
    pub fn clear(&mut self) {
        // An iterative teardown, so deep concat chains can't overflow the stack.
        let mut pending = Vector::new();
        pending.extend(self.root.take());
        while let Some(node) = pending.pop() {
            if let RopeNode::Inner { left, right, .. } = *node {
                pending.push(left);
                pending.push(right);
            }
        }
        self.len = 0;
    }
}

/// Splits a subtree at `at`, which must be within it, returning the two halves.
fn split_node<T>(node: Box<RopeNode<T>>, at: usize) -> (Option<Box<RopeNode<T>>>, Option<Box<RopeNode<T>>>) {
    match *node {
        RopeNode::Leaf(mut chunk) => {
            if at == 0 {
                (None, Some(Box::new(RopeNode::Leaf(chunk))))
            } else if at == chunk.len() {
                (Some(Box::new(RopeNode::Leaf(chunk))), None)
            } else {
                let tail = chunk.split_off(at);
                (
                    Some(Box::new(RopeNode::Leaf(chunk))),
                    Some(Box::new(RopeNode::Leaf(tail))),
                )
            }
        },
        RopeNode::Inner { weight, left, right } => {
            if at < weight {
                let (ll, lr) = split_node(left, at);
                (ll, join(lr, Some(right)))
            } else if at == weight {
                (Some(left), Some(right))
            } else {
                let (rl, rr) = split_node(right, at - weight);
                (join(Some(left), rl), rr)
            }
        },
    }
}

/// Joins two optional subtrees under a fresh root, weighted by the left subtree's length.
fn join<T>(
    left: Option<Box<RopeNode<T>>>,
    right: Option<Box<RopeNode<T>>>,
) -> Option<Box<RopeNode<T>>> {
    match (left, right) {
        (None, right) => right,
        (left, None) => left,
        (Some(left), Some(right)) => {
            let weight = subtree_len(&left);
            Some(Box::new(RopeNode::Inner { weight, left, right }))
        },
    }
}

pub(crate) fn subtree_len<T>(node: &RopeNode<T>) -> usize {
    match node {
        RopeNode::Leaf(chunk) => chunk.len(),
        RopeNode::Inner { weight, right, .. } => weight + subtree_len(right),
    }
}

impl<T> Rope<T> {
    /// Builds a balanced rope from `count` leaves drawn off the front of `leaves`.
    fn build_balanced<I: Iterator<Item = Vector<T>>>(
        leaves: &mut I,
        count: usize,
    ) -> Option<(Box<RopeNode<T>>, usize)> {
        match count {
            0 => None,
            1 => {
                let chunk = leaves.next()?;
                let len = chunk.len();
                Some((Box::new(RopeNode::Leaf(chunk)), len))
            },
            _ => {
                let (left, left_len) = Self::build_balanced(leaves, count / 2)?;
                let (right, right_len) = Self::build_balanced(leaves, count - count / 2)?;
                Some((
                    Box::new(RopeNode::Inner {
                        weight: left_len,
                        left,
                        right,
                    }),
                    left_len + right_len,
                ))
            },
        }
    }

    fn from_leaves(leaves: Vector<Vector<T>>, len: usize) -> Rope<T> {
        let count = leaves.len();
        let mut leaves = leaves.into_iter();
        Rope {
            root: Self::build_balanced(&mut leaves, count).map(|(root, _)| root),
            len,
        }
    }

    /// Checks that every inner node's weight matches its left subtree's length, and that the
    /// recorded length matches the tree. Panics on any mismatch.
    #[cfg(test)]
    pub(crate) fn verify_weights(&self) {
        fn check<T>(node: &RopeNode<T>) -> usize {
            match node {
                RopeNode::Leaf(chunk) => chunk.len(),
                RopeNode::Inner { weight, left, right } => {
                    let left_len = check(left);
                    assert_eq!(
                        left_len, *weight,
                        "inner node records weight {weight} but its left subtree holds {left_len}"
                    );
                    left_len + check(right)
                },
            }
        }

        let total = self.root.as_deref().map_or(0, check);
        assert_eq!(total, self.len, "rope records len {} but holds {}", self.len, total);
    }
}

impl<T> Drop for Rope<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for Rope<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Rope<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut leaves = Vector::new();
        let mut chunk = Vector::with_cap(MAX_LEAF);
        let mut len = 0;
        for value in iter.into_iter() {
            if chunk.len() == MAX_LEAF {
                leaves.push(mem::replace(&mut chunk, Vector::with_cap(MAX_LEAF)));
            }
            chunk.push(value);
            len += 1;
        }
        if !chunk.is_empty() {
            leaves.push(chunk);
        }
        Rope::from_leaves(leaves, len)
    }
}

impl<T: Clone> From<&[T]> for Rope<T> {
    fn from(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }
}

impl<T: Clone> Clone for Rope<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Rope<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Rope<T> {}

impl<T: Debug> Debug for Rope<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rope")
            .field_with("values", |f| f.debug_list().entries(self.iter()).finish())
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Display> Display for Rope<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut iter = self.iter();
        if let Some(value) = iter.next() {
            write!(f, "{value}")?;
        }
        for value in iter {
            write!(f, ", {value}")?;
        }
        write!(f, "]")
    }
}
