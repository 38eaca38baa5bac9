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
    /// Links on the longest path from this node down to a leaf. A leaf stores 0.
    pub height: isize,
}

/// An ordered set of unique values in a height-balanced binary search tree.
///
/// Every node carries its height, and the tree maintains the AVL invariant: the heights of a
/// node's two subtrees never differ by more than one. Insertions and removals repair the
/// invariant on their way back up with at most two rotations per level, which pins the height at
/// `O(log n)` regardless of input order. Compared to [`RedBlackTree`] the balance is tighter, so
/// lookups are slightly faster and updates slightly more rotation-happy.
///
/// # Time Complexity
/// For this analysis of time complexity, `n` is the number of items in the tree.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(log n)` |
/// | `contains` / `get` | `O(log n)` |
/// | `remove` | `O(log n)` |
/// | `first` / `last` | `O(log n)` |
/// | `height` | `O(1)` |
///
/// [`RedBlackTree`]: crate::collections::tree::RedBlackTree
pub struct AvlTree<T: Ord> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
}

impl<T: Ord> AvlTree<T> {
    /// Creates a new AvlTree with no elements.
    pub const fn new() -> AvlTree<T> {
        AvlTree {
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

    /// Adds a value to the tree, rebalancing as required. Returns true if it was added and false
    /// if an equal value was already present.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::tree::AvlTree;
    /// let mut tree: AvlTree<_> = (0..100).collect();
    /// assert!(tree.height() <= 8, "a thousand-fold speedup over the unbalanced chain");
    /// assert!(!tree.insert(42));
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
        let mut branch = &self.root;
        while let Some(node) = &branch.0 {
            branch = match value.cmp(&node.value) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
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
        let mut branch = &self.root;
        let mut first = None;
        while let Some(node) = &branch.0 {
            first = Some(&node.value);
            branch = &node.left;
        }
        first
    }

    /// Returns a reference to the largest value in the tree, if it isn't empty.
    pub fn last(&self) -> Option<&T> {
        let mut branch = &self.root;
        let mut last = None;
        while let Some(node) = &branch.0 {
            last = Some(&node.value);
            branch = &node.right;
        }
        last
    }

    /// Returns the height of the tree: the number of links on the longest path from the root down
    /// to a leaf. An empty tree has height -1 and a single node height 0.
    pub const fn height(&self) -> isize {
        match &self.root.0 {
            Some(node) => node.height,
            None => -1,
        }
    }

    /// Removes all values from the tree.
    pub fn clear(&mut self) {
        // The height bound makes recursive dropping safe, but iterating costs nothing extra.
        let mut pending = Vector::new();
        pending.extend(mem::take(&mut self.root.0));

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.0.take());
            pending.extend(node.right.0.take());
        }
        self.len = 0;
    }
}

impl<T: Ord> Node<T> {
    fn update_height(&mut self) {
        self.height = 1 + cmp::max(self.left.height(), self.right.height());
    }

    /// Positive when the left subtree is taller, negative when the right is.
    fn balance_factor(&self) -> isize {
        self.left.height() - self.right.height()
    }
}

impl<T: Ord> Branch<T> {
    pub(crate) const fn height(&self) -> isize {
        match &self.0 {
            Some(node) => node.height,
            None => -1,
        }
    }

    fn insert(&mut self, value: T) -> bool {
        let added = match &mut self.0 {
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
                    height: 0,
                }));
                return true;
            },
        };

        if added {
            self.rebalance();
        }
        added
    }

    fn remove(&mut self, value: &T) -> Option<T> {
        let removed = match &mut self.0 {
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => node.left.remove(value),
                Ordering::Greater => node.right.remove(value),
                Ordering::Equal => Some(self.remove_root()),
            },
            None => None,
        };

        if removed.is_some() {
            self.rebalance();
        }
        removed
    }

    fn remove_root(&mut self) -> T {
        // SAFETY: Only called on branches already matched as Some.
        let mut node = unsafe { mem::take(&mut self.0).unreachable() };

        match (node.left.0.take(), node.right.0.take()) {
            (None, None) => node.value,
            (Some(child), None) | (None, Some(child)) => {
                self.0 = Some(child);
                node.value
            },
            (Some(left), Some(right)) => {
                node.left = Branch(Some(left));
                node.right = Branch(Some(right));
                // The in-order successor replaces the removed value; take_first has already
                // rebalanced the right spine on its way out.
                let successor = node.right.take_first();
                let removed = mem::replace(&mut node.value, successor);
                self.0 = Some(node);
                removed
            },
        }
    }

    fn take_first(&mut self) -> T {
        // SAFETY: Only called on non-empty subtrees.
        let node = unsafe { self.0.as_mut().unreachable() };
        if node.left.0.is_some() {
            let value = node.left.take_first();
            self.rebalance();
            value
        } else {
            // SAFETY: As matched above; the branch itself is needed mutably here.
            let mut node = unsafe { mem::take(&mut self.0).unreachable() };
            self.0 = node.right.0.take();
            node.value
        }
    }

    /// Restores the AVL invariant at this node, assuming both subtrees already satisfy it and
    /// their heights are correct.
    fn rebalance(&mut self) {
        let Some(node) = &mut self.0 else {
            return;
        };
        node.update_height();

        match node.balance_factor() {
            2 => {
                // SAFETY: A balance factor of 2 requires a left subtree of height >= 1.
                let left = unsafe { node.left.0.as_ref().unreachable() };
                if left.balance_factor() < 0 {
                    // Left-right: fold the grandchild outward first.
                    node.left.rotate_left();
                }
                self.rotate_right();
            },
            -2 => {
                // SAFETY: A balance factor of -2 requires a right subtree of height >= 1.
                let right = unsafe { node.right.0.as_ref().unreachable() };
                if right.balance_factor() > 0 {
                    node.right.rotate_right();
                }
                self.rotate_left();
            },
            _ => {},
        }
    }

    /// Rotates this branch's node down to the left, lifting its right child into its place.
    fn rotate_left(&mut self) {
        // SAFETY: Rotations are only requested when the node and the child being lifted exist.
        let mut node = unsafe { mem::take(&mut self.0).unreachable() };
        // SAFETY: As above.
        let mut lifted = unsafe { node.right.0.take().unreachable() };

        node.right.0 = lifted.left.0.take();
        node.update_height();
        lifted.left.0 = Some(node);
        lifted.update_height();
        self.0 = Some(lifted);
    }

    /// Rotates this branch's node down to the right, lifting its left child into its place.
    fn rotate_right(&mut self) {
        // SAFETY: Rotations are only requested when the node and the child being lifted exist.
        let mut node = unsafe { mem::take(&mut self.0).unreachable() };
        // SAFETY: As above.
        let mut lifted = unsafe { node.left.0.take().unreachable() };

        node.left.0 = lifted.right.0.take();
        node.update_height();
        lifted.right.0 = Some(node);
        lifted.update_height();
        self.0 = Some(lifted);
    }
}

#[cfg(test)]
impl<T: Ord> AvlTree<T> {
    /// Walks the whole tree checking stored heights and the AVL invariant at every node.
    pub(crate) fn verify_balanced(&self) {
        fn check<T: Ord>(branch: &Branch<T>) -> isize {
            match &branch.0 {
                Some(node) => {
                    let left = check(&node.left);
                    let right = check(&node.right);
                    assert_eq!(node.height, 1 + left.max(right), "stale height");
                    assert!((left - right).abs() <= 1, "AVL invariant violated");
                    node.height
                },
                None => -1,
            }
        }

        check(&self.root);
    }
}

impl<T: Ord> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Drop for AvlTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Ord> Extend<T> for AvlTree<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for value in iter.into_iter() {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> PartialEq for AvlTree<T> {
    /// Compares the stored values in order, ignoring tree shape.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Ord> Eq for AvlTree<T> {}

impl<T: Ord + Debug> Debug for AvlTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvlTree")
            .field_with("contents", |f| f.debug_list().entries(self.iter()).finish())
            .field("len", &self.len)
            .field("height", &self.height())
            .finish()
    }
}

impl<T: Ord + Debug> Display for AvlTree<T> {
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
