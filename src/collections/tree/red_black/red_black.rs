use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use crate::collections::contiguous::Vector;
use crate::util::option::OptionExtension;

use Colour::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Colour {
    Red,
    Black,
}

pub(crate) struct Branch<T: Ord>(pub Option<Box<Node<T>>>);

pub(crate) struct Node<T: Ord> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub value: T,
    pub colour: Colour,
}

/// An ordered set of unique values in a red-black balanced binary search tree.
///
/// Each node is red or black, the root is black, no red node has a red child, and every path
/// from the root to a missing leaf crosses the same number of black nodes. Together these cap
/// the height at twice the shortest path, so all operations stay `O(log n)` while doing fewer
/// rotations than [`AvlTree`] on update-heavy workloads.
///
/// Insertion repairs red-red violations with at most one rotation pair per level on the way back
/// up. Removal tracks where a black node went missing and restores the black-height with the
/// usual sibling recolourings and rotations.
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
/// | `height` | `O(n)` |
///
/// [`AvlTree`]: crate::collections::tree::AvlTree
pub struct RedBlackTree<T: Ord> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
}

impl<T: Ord> RedBlackTree<T> {
    /// Creates a new RedBlackTree with no elements.
    pub const fn new() -> RedBlackTree<T> {
        RedBlackTree {
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
    /// # use classic_collections::collections::tree::RedBlackTree;
    /// let mut tree = RedBlackTree::new();
    /// assert!(tree.insert(3));
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(3));
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3]);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let added = self.root.insert(value);
        if added {
            self.len += 1;
        }
        // A red root breaks no ordering, so it is simply painted over.
        if let Some(root) = &mut self.root.0 {
            root.colour = Black;
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
        // A shortfall that bubbles all the way up just lowers the whole tree's black-height.
        let (removed, _) = self.root.remove(value);
        if removed.is_some() {
            self.len -= 1;
        }
        if let Some(root) = &mut self.root.0 {
            root.colour = Black;
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
    pub fn height(&self) -> isize {
        fn measure<T: Ord>(branch: &Branch<T>) -> isize {
            match &branch.0 {
                Some(node) => 1 + cmp::max(measure(&node.left), measure(&node.right)),
                None => -1,
            }
        }

        measure(&self.root)
    }

    /// Removes all values from the tree.
    pub fn clear(&mut self) {
        let mut pending = Vector::new();
        pending.extend(mem::take(&mut self.root.0));

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.0.take());
            pending.extend(node.right.0.take());
        }
        self.len = 0;
    }
}

impl<T: Ord> Branch<T> {
    const fn colour(&self) -> Colour {
        // Missing leaves count as black.
        match &self.0 {
            Some(node) => node.colour,
            None => Black,
        }
    }

    const fn is_red(&self) -> bool {
        matches!(self.colour(), Red)
    }

    fn insert(&mut self, value: T) -> bool {
        let Some(node) = &mut self.0 else {
            // New nodes start red: black-heights are untouched, and any red-red clash is
            // repaired on the way back up.
            self.0 = Some(Box::new(Node {
                left: Branch(None),
                right: Branch(None),
                value,
                colour: Red,
            }));
            return true;
        };

        let added = match value.cmp(&node.value) {
            Ordering::Less => node.left.insert(value),
            Ordering::Greater => node.right.insert(value),
            Ordering::Equal => false,
        };

        if added {
            self.balance_after_insert();
        }
        added
    }

    /// Repairs a red child with a red grandchild under a black node by rotating the middle value
    /// to the top, red, with two black children. Any other configuration is left alone.
    fn balance_after_insert(&mut self) {
        // SAFETY: Only called on branches the caller just inserted beneath.
        let node = unsafe { self.0.as_mut().unreachable() };
        if node.colour == Red {
            // A red-red clash under a red node is this node's grandparent's problem.
            return;
        }

        if node.left.is_red() {
            // SAFETY: Red branches hold nodes by definition.
            let left = unsafe { node.left.0.as_mut().unreachable() };
            if left.right.is_red() {
                // Left-right: fold the inner grandchild outward first.
                node.left.rotate_left();
            }
            // SAFETY: As above; rotation keeps the branch occupied.
            if unsafe { node.left.0.as_ref().unreachable() }.left.is_red() {
                self.rotate_right();
                self.repaint_after_balance();
                return;
            }
        }

        // SAFETY: Checked Some at the top; the left arm returns whenever it rotates self.
        let node = unsafe { self.0.as_mut().unreachable() };
        if node.right.is_red() {
            // SAFETY: Red branches hold nodes by definition.
            let right = unsafe { node.right.0.as_mut().unreachable() };
            if right.left.is_red() {
                node.right.rotate_right();
            }
            // SAFETY: As above.
            if unsafe { node.right.0.as_ref().unreachable() }.right.is_red() {
                self.rotate_left();
                self.repaint_after_balance();
            }
        }
    }

    /// After a balancing rotation the lifted node goes red and both of its children black.
    fn repaint_after_balance(&mut self) {
        // SAFETY: A rotation has just placed a node here.
        let top = unsafe { self.0.as_mut().unreachable() };
        top.colour = Red;
        if let Some(left) = &mut top.left.0 {
            left.colour = Black;
        }
        if let Some(right) = &mut top.right.0 {
            right.colour = Black;
        }
    }

    /// Removes a value from this subtree. The second field of the return value reports whether
    /// the subtree's black-height shrank by one.
    fn remove(&mut self, value: &T) -> (Option<T>, bool) {
        let Some(node) = &mut self.0 else {
            return (None, false);
        };

        match value.cmp(&node.value) {
            Ordering::Less => {
                let (removed, shorter) = node.left.remove(value);
                match removed {
                    Some(_) => (removed, shorter && self.fix_left()),
                    None => (None, false),
                }
            },
            Ordering::Greater => {
                let (removed, shorter) = node.right.remove(value);
                match removed {
                    Some(_) => (removed, shorter && self.fix_right()),
                    None => (None, false),
                }
            },
            Ordering::Equal => {
                if node.left.0.is_some() && node.right.0.is_some() {
                    // Two children: the in-order successor replaces the value, and the shortfall
                    // (if any) surfaces at the right subtree.
                    let (successor, shorter) = node.right.take_first();
                    let removed = mem::replace(&mut node.value, successor);
                    (Some(removed), shorter && self.fix_right())
                } else {
                    let (removed, shorter) = self.unlink_unary();
                    (Some(removed), shorter)
                }
            },
        }
    }

    /// Unlinks the smallest value in this subtree, which must exist. The bool reports whether the
    /// subtree's black-height shrank.
    fn take_first(&mut self) -> (T, bool) {
        // SAFETY: Only called on non-empty subtrees.
        let node = unsafe { self.0.as_mut().unreachable() };
        if node.left.0.is_some() {
            let (value, shorter) = node.left.take_first();
            (value, shorter && self.fix_left())
        } else {
            self.unlink_unary()
        }
    }

    /// Detaches this branch's node, which must exist and have at most one child, splicing the
    /// child (if any) into its place. Returns the detached value and whether the subtree's
    /// black-height shrank.
    fn unlink_unary(&mut self) -> (T, bool) {
        // SAFETY: Only called on branches already matched as Some.
        let node = unsafe { mem::take(&mut self.0).unreachable() };
        let Node { left, right, value, colour } = *node;

        match left.0.or(right.0) {
            Some(mut child) => {
                // The lone child of a node is necessarily red, so repainting it black restores
                // the black-height on the spot.
                child.colour = Black;
                self.0 = Some(child);
                (value, false)
            },
            None => (value, matches!(colour, Black)),
        }
    }

    /// The left subtree is one black level short. Repairs what it can with the sibling's help and
    /// reports whether this subtree as a whole is still short.
    fn fix_left(&mut self) -> bool {
        // SAFETY: A shortfall can only be reported out of a non-empty branch.
        let node = unsafe { self.0.as_mut().unreachable() };

        if node.right.is_red() {
            // Red sibling: lift it, leaving the short side under a red parent with a black
            // sibling, which the cases below always resolve.
            self.rotate_left();
            // SAFETY: The rotation just placed a node here, with a left child.
            let top = unsafe { self.0.as_mut().unreachable() };
            top.colour = Black;
            if let Some(below) = &mut top.left.0 {
                below.colour = Red;
            }
            top.left.fix_left();
            return false;
        }

        // SAFETY: The left subtree has black-height >= 1 (it just shrank), so the black sibling
        // on the taller side exists.
        let sibling = unsafe { node.right.0.as_mut().unreachable() };

        if !sibling.left.is_red() && !sibling.right.is_red() {
            // All-black sibling: pull one black out of both sides and push the debt upward.
            sibling.colour = Red;
            if node.colour == Red {
                node.colour = Black;
                return false;
            }
            return true;
        }

        if !sibling.right.is_red() {
            // Near child red, far child black: swap their roles so the far case applies.
            node.right.rotate_right();
            // SAFETY: The rotation lifted the red near child into the sibling position.
            let new_sibling = unsafe { node.right.0.as_mut().unreachable() };
            new_sibling.colour = Black;
            if let Some(far) = &mut new_sibling.right.0 {
                far.colour = Red;
            }
        }

        // Far child red: one rotation rebalances, with the lifted sibling taking this node's
        // colour and both of its new children going black.
        let colour = node.colour;
        self.rotate_left();
        // SAFETY: The rotation just placed a node here.
        let top = unsafe { self.0.as_mut().unreachable() };
        top.colour = colour;
        if let Some(left) = &mut top.left.0 {
            left.colour = Black;
        }
        if let Some(right) = &mut top.right.0 {
            right.colour = Black;
        }
        false
    }

    /// Mirror of [`Self::fix_left`]: the right subtree is one black level short.
    fn fix_right(&mut self) -> bool {
        // SAFETY: A shortfall can only be reported out of a non-empty branch.
        let node = unsafe { self.0.as_mut().unreachable() };

        if node.left.is_red() {
            self.rotate_right();
            // SAFETY: The rotation just placed a node here, with a right child.
            let top = unsafe { self.0.as_mut().unreachable() };
            top.colour = Black;
            if let Some(below) = &mut top.right.0 {
                below.colour = Red;
            }
            top.right.fix_right();
            return false;
        }

        // SAFETY: The right subtree has black-height >= 1 (it just shrank), so the black sibling
        // on the taller side exists.
        let sibling = unsafe { node.left.0.as_mut().unreachable() };

        if !sibling.left.is_red() && !sibling.right.is_red() {
            sibling.colour = Red;
            if node.colour == Red {
                node.colour = Black;
                return false;
            }
            return true;
        }

        if !sibling.left.is_red() {
            node.left.rotate_left();
            // SAFETY: The rotation lifted the red near child into the sibling position.
            let new_sibling = unsafe { node.left.0.as_mut().unreachable() };
            new_sibling.colour = Black;
            if let Some(far) = &mut new_sibling.left.0 {
                far.colour = Red;
            }
        }

        let colour = node.colour;
        self.rotate_right();
        // SAFETY: The rotation just placed a node here.
        let top = unsafe { self.0.as_mut().unreachable() };
        top.colour = colour;
        if let Some(left) = &mut top.left.0 {
            left.colour = Black;
        }
        if let Some(right) = &mut top.right.0 {
            right.colour = Black;
        }
        false
    }

    /// Rotates this branch's node down to the left, lifting its right child into its place.
    /// Colours are left untouched; callers repaint afterwards.
    fn rotate_left(&mut self) {
        // SAFETY: Rotations are only requested when the node and the child being lifted exist.
        let mut node = unsafe { mem::take(&mut self.0).unreachable() };
        // SAFETY: As above.
        let mut lifted = unsafe { node.right.0.take().unreachable() };

        node.right.0 = lifted.left.0.take();
        lifted.left.0 = Some(node);
        self.0 = Some(lifted);
    }

    /// Rotates this branch's node down to the right, lifting its left child into its place.
    /// Colours are left untouched; callers repaint afterwards.
    fn rotate_right(&mut self) {
        // SAFETY: Rotations are only requested when the node and the child being lifted exist.
        let mut node = unsafe { mem::take(&mut self.0).unreachable() };
        // SAFETY: As above.
        let mut lifted = unsafe { node.left.0.take().unreachable() };

        node.left.0 = lifted.right.0.take();
        lifted.right.0 = Some(node);
        self.0 = Some(lifted);
    }
}

#[cfg(test)]
impl<T: Ord> RedBlackTree<T> {
    /// Walks the whole tree checking all three red-black invariants: a black root, no red node
    /// with a red child, and equal black-heights on every path.
    pub(crate) fn verify_invariants(&self) {
        fn check<T: Ord>(branch: &Branch<T>, parent_is_red: bool) -> usize {
            match &branch.0 {
                Some(node) => {
                    let is_red = node.colour == Red;
                    assert!(!(parent_is_red && is_red), "red node with a red child");

                    let left = check(&node.left, is_red);
                    let right = check(&node.right, is_red);
                    assert_eq!(left, right, "unequal black-heights");

                    left + usize::from(!is_red)
                },
                None => 1,
            }
        }

        assert!(!self.root.is_red(), "red root");
        check(&self.root, false);
    }
}

impl<T: Ord> Default for RedBlackTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Drop for RedBlackTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Ord> Extend<T> for RedBlackTree<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for value in iter.into_iter() {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for RedBlackTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = RedBlackTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> PartialEq for RedBlackTree<T> {
    /// Compares the stored values in order, ignoring tree shape.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Ord> Eq for RedBlackTree<T> {}

impl<T: Ord + Debug> Debug for RedBlackTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedBlackTree")
            .field_with("contents", |f| f.debug_list().entries(self.iter()).finish())
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Ord + Debug> Display for RedBlackTree<T> {
    /// Draws the tree sideways, one node per line, right subtree on top, with each node's colour
    /// initial ahead of its value.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fn draw<T: Ord + Debug>(
            branch: &Branch<T>,
            f: &mut Formatter<'_>,
            depth: usize,
        ) -> fmt::Result {
            if let Some(node) = &branch.0 {
                draw(&node.right, f, depth + 1)?;
                let initial = match node.colour {
                    Red => 'R',
                    Black => 'B',
                };
                writeln!(f, "{}{} {:?}", "    ".repeat(depth), initial, node.value)?;
                draw(&node.left, f, depth + 1)?;
            }
            Ok(())
        }

        draw(&self.root, f, 0)
    }
}
