use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use crate::collections::contiguous::Vector;
use crate::util::option::OptionExtension;

pub(crate) struct Branch<T: Ord>(pub Option<Box<Node<T>>>);

pub(crate) struct Node<T: Ord> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub value: T,
}

/// An ordered set of unique values in a plain, unbalanced binary search tree.
///
/// Every node's value is greater than everything in its left subtree and less than everything in
/// its right. No rebalancing happens on insertion or removal, so the tree's shape (and with it
/// the cost of every operation) depends entirely on the order values arrive in: random orders
/// give `O(log n)` expected depth, sorted input degenerates into a linked list. [`AvlTree`] and
/// [`RedBlackTree`] trade extra bookkeeping for a guaranteed `O(log n)`.
///
/// # Time Complexity
/// For this analysis of time complexity, `n` is the number of items in the tree and `h` its
/// height, which ranges from `log n` to `n - 1`.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(h)` |
/// | `contains` / `get` | `O(h)` |
/// | `remove` | `O(h)` |
/// | `first` / `last` | `O(h)` |
/// | `height` | `O(n)` |
///
/// [`AvlTree`]: crate::collections::tree::AvlTree
/// [`RedBlackTree`]: crate::collections::tree::RedBlackTree
pub struct BinarySearchTree<T: Ord> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates a new BinarySearchTree with no elements.
    pub const fn new() -> BinarySearchTree<T> {
        BinarySearchTree {
            root: Branch(None),
            len: 0,
        }
    }

    /// Returns the number of values in the tree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds a value to the tree. Returns true if it was added and false if an equal value was
    /// already present, in which case the existing value is kept.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::tree::BinarySearchTree;
    /// let mut tree = BinarySearchTree::new();
    /// assert!(tree.insert(2));
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(2));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let added = self.root.insert(value);
        if added {
            self.len += 1;
        }
        added
    }

    /// Returns true if the tree contains a value equal to the one provided.
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Returns a reference to the stored value equal to the one provided, if present.
    pub fn get(&self, value: &T) -> Option<&T> {
        self.root.get(value)
    }

    /// Removes and returns the stored value equal to the one provided, or None if the tree
    /// doesn't contain it.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let removed = self.root.remove(value);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Returns a reference to the smallest value in the tree, if it isn't empty.
    pub fn first(&self) -> Option<&T> {
        self.root.first()
    }

    /// Returns a reference to the largest value in the tree, if it isn't empty.
    pub fn last(&self) -> Option<&T> {
        self.root.last()
    }

    /// Returns the height of the tree: the number of links on the longest path from the root down
    /// to a leaf. An empty tree has height -1 and a single node height 0.
    pub fn height(&self) -> isize {
        self.root.height()
    }

    /// Removes all values from the tree.
    pub fn clear(&mut self) {
        self.root.clear();
        self.len = 0;
    }

    /// Visits every value in ascending order.
    pub fn for_each_in_order(&self, mut visit: impl FnMut(&T)) {
        self.root.in_order(&mut visit);
    }

    /// Visits every value in pre-order: each node before both of its subtrees.
    pub fn for_each_pre_order(&self, mut visit: impl FnMut(&T)) {
        self.root.pre_order(&mut visit);
    }

    /// Visits every value in post-order: each node after both of its subtrees.
    pub fn for_each_post_order(&self, mut visit: impl FnMut(&T)) {
        self.root.post_order(&mut visit);
    }
}

impl<T: Ord> Branch<T> {
    pub fn insert(&mut self, value: T) -> bool {
        match &mut self.0 {
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => node.left.insert(value),
                Ordering::Greater => node.right.insert(value),
                Ordering::Equal => false,
            },
            None => {
                self.0 = Some(Box::new(Node {
                    left: Branch(None),
                    right: Branch(None),
                    value,
                }));
                true
            },
        }
    }

    pub fn get(&self, value: &T) -> Option<&T> {
        match &self.0 {
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => node.left.get(value),
                Ordering::Greater => node.right.get(value),
                Ordering::Equal => Some(&node.value),
            },
            None => None,
        }
    }

    pub fn remove(&mut self, value: &T) -> Option<T> {
        match &mut self.0 {
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => node.left.remove(value),
                Ordering::Greater => node.right.remove(value),
                Ordering::Equal => Some(self.remove_root()),
            },
            None => None,
        }
    }

    /// Unlinks this branch's own node, which must exist, and returns its value. The node's
    /// subtrees are stitched back into the tree.
    pub(crate) fn remove_root(&mut self) -> T {
        // SAFETY: Only called on branches already matched as Some.
        let mut node = unsafe { mem::take(&mut self.0).unreachable() };

        match (node.left.0.take(), node.right.0.take()) {
            (None, None) => node.value,
            (Some(child), None) | (None, Some(child)) => {
                self.0 = Some(child);
                node.value
            },
            (Some(left), Some(right)) => {
                // Two children: the in-order successor (the right subtree's minimum) replaces the
                // removed value, preserving the ordering around both subtrees.
                node.left = Branch(Some(left));
                node.right = Branch(Some(right));
                let successor = node.right.take_first();
                let removed = mem::replace(&mut node.value, successor);
                self.0 = Some(node);
                removed
            },
        }
    }

    /// Unlinks the smallest value in this subtree, which must exist, and returns it.
    pub(crate) fn take_first(&mut self) -> T {
        // SAFETY: Only called on non-empty subtrees.
        let node = unsafe { self.0.as_mut().unreachable() };
        if node.left.0.is_some() {
            node.left.take_first()
        } else {
            // SAFETY: as above; the borrow is re-taken because remove_root needs the branch.
            let mut node = unsafe { mem::take(&mut self.0).unreachable() };
            self.0 = node.right.0.take();
            node.value
        }
    }

    pub fn first(&self) -> Option<&T> {
        match &self.0 {
            Some(node) => match node.left.first() {
                Some(value) => Some(value),
                None => Some(&node.value),
            },
            None => None,
        }
    }

    pub fn last(&self) -> Option<&T> {
        match &self.0 {
            Some(node) => match node.right.last() {
                Some(value) => Some(value),
                None => Some(&node.value),
            },
            None => None,
        }
    }

    pub fn height(&self) -> isize {
        match &self.0 {
            Some(node) => 1 + cmp::max(node.left.height(), node.right.height()),
            None => -1,
        }
    }

    /// Drops the subtree iteratively, so a degenerate chain can't overflow the stack.
    pub fn clear(&mut self) {
        let mut pending = Vector::new();
        pending.extend(mem::take(&mut self.0));

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.0.take());
            pending.extend(node.right.0.take());
        }
    }

    pub fn in_order(&self, visit: &mut impl FnMut(&T)) {
        if let Some(node) = &self.0 {
            node.left.in_order(visit);
            visit(&node.value);
            node.right.in_order(visit);
        }
    }

    pub fn pre_order(&self, visit: &mut impl FnMut(&T)) {
        if let Some(node) = &self.0 {
            visit(&node.value);
            node.left.pre_order(visit);
            node.right.pre_order(visit);
        }
    }

    pub fn post_order(&self, visit: &mut impl FnMut(&T)) {
        if let Some(node) = &self.0 {
            node.left.post_order(visit);
            node.right.post_order(visit);
            visit(&node.value);
        }
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for value in iter.into_iter() {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> PartialEq for BinarySearchTree<T> {
    /// Compares the stored values in order, ignoring tree shape.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Ord> Eq for BinarySearchTree<T> {}

impl<T: Ord + Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field_with("contents", |f| f.debug_list().entries(self.iter()).finish())
            .field("len", &self.len)
            .field("height", &self.height())
            .finish()
    }
}

impl<T: Ord + Debug> Display for BinarySearchTree<T> {
    /// Draws the tree sideways, one node per line, right subtree on top.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fn draw<T: Ord + Debug>(
            branch: &Branch<T>,
            f: &mut Formatter<'_>,
            depth: usize,
        ) -> fmt::Result {
            if let Some(node) = &branch.0 {
                draw(&node.right, f, depth + 1)?;
                writeln!(f, "{}{:?}", "    ".repeat(depth), node.value)?;
                draw(&node.left, f, depth + 1)?;
            }
            Ok(())
        }

        draw(&self.root, f, 0)
    }
}
