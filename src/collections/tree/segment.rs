use std::fmt::{self, Debug, Formatter};
use std::ops::Add;

use crate::collections::contiguous::Vector;

/// A fixed-length sequence supporting point assignment and range sums, stored as an implicit
/// binary tree.
///
/// The tree lives in a flat array of `4 * len` slots with the root at slot 1; slot `i`'s children
/// sit at `2i` and `2i + 1`, and each slot holds the sum of its segment of the sequence. Both
/// updates and queries recurse from the root, touching only the `O(log n)` slots whose segments
/// overlap the target.
///
/// Unlike [`FenwickTree`](super::FenwickTree), values are assigned rather than adjusted, and the
/// element type is generic over anything summable.
///
/// # Time Complexity
///
/// | Method | Complexity |
/// |-|-|
/// | `update` | `O(log n)` |
/// | `query` | `O(log n)` |
/// | `From<&[T]>` | `O(n)` |
pub struct SegmentTree<T> {
    slots: Vector<T>,
    len: usize,
}

impl<T: Copy + Default + Add<Output = T>> SegmentTree<T> {
    /// Creates a new SegmentTree of `len` default values.
    pub fn new(len: usize) -> SegmentTree<T> {
        let mut slots = Vector::with_cap(4 * len.max(1));
        slots.extend((0..4 * len.max(1)).map(|_| T::default()));
        SegmentTree { slots, len }
    }

    /// Returns the number of positions in the tree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree has no positions at all.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Assigns `value` to the position at `index`.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn update(&mut self, index: usize, value: T) {
        if index >= self.len {
            panic!("index {} is out of bounds (len {})", index, self.len);
        }
        self.update_segment(1, 0, self.len - 1, index, value);
    }

    /// Returns the sum of the values at positions `from..=to`, or None when the range is
    /// backwards, out of bounds or the tree is empty.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::tree::SegmentTree;
    /// let tree = SegmentTree::from(&[1, 2, 3, 4][..]);
    /// assert_eq!(tree.query(1, 2), Some(5));
    /// assert_eq!(tree.query(2, 1), None);
    /// assert_eq!(tree.query(0, 4), None);
    /// ```
    pub fn query(&self, from: usize, to: usize) -> Option<T> {
        if self.is_empty() || from > to || to >= self.len {
            return None;
        }
        Some(self.query_segment(1, 0, self.len - 1, from, to))
    }

    /// Recurses towards the leaf for `index`, re-summing each slot on the way back up.
    fn update_segment(&mut self, slot: usize, lo: usize, hi: usize, index: usize, value: T) {
        if lo == hi {
            self.slots[slot] = value;
            return;
        }
        let mid = lo + (hi - lo) / 2;
        if index <= mid {
            self.update_segment(2 * slot, lo, mid, index, value);
        } else {
            self.update_segment(2 * slot + 1, mid + 1, hi, index, value);
        }
        self.slots[slot] = self.slots[2 * slot] + self.slots[2 * slot + 1];
    }

    /// Sums the part of `from..=to` covered by this slot's segment `lo..=hi`. Only called with
    /// overlapping ranges, so the recursion never reaches a disjoint slot.
    fn query_segment(&self, slot: usize, lo: usize, hi: usize, from: usize, to: usize) -> T {
        if from <= lo && hi <= to {
            return self.slots[slot];
        }
        let mid = lo + (hi - lo) / 2;
        if to <= mid {
            self.query_segment(2 * slot, lo, mid, from, to)
        } else if from > mid {
            self.query_segment(2 * slot + 1, mid + 1, hi, from, to)
        } else {
            self.query_segment(2 * slot, lo, mid, from, mid)
                + self.query_segment(2 * slot + 1, mid + 1, hi, mid + 1, to)
        }
    }
}

impl<T: Copy + Default + Add<Output = T>> From<&[T]> for SegmentTree<T> {
    fn from(values: &[T]) -> Self {
        let mut tree = SegmentTree::new(values.len());
        if !values.is_empty() {
            tree.build_segment(1, 0, values.len() - 1, values);
        }
        tree
    }
}

impl<T: Copy + Default + Add<Output = T>> SegmentTree<T> {
    fn build_segment(&mut self, slot: usize, lo: usize, hi: usize, values: &[T]) {
        if lo == hi {
            self.slots[slot] = values[lo];
            return;
        }
        let mid = lo + (hi - lo) / 2;
        self.build_segment(2 * slot, lo, mid, values);
        self.build_segment(2 * slot + 1, mid + 1, hi, values);
        self.slots[slot] = self.slots[2 * slot] + self.slots[2 * slot + 1];
    }
}

impl<T: Copy + Default + Add<Output = T> + Debug> Debug for SegmentTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentTree")
            .field_with("values", |f| {
                f.debug_list()
                    .entries((0..self.len).map(|i| {
                        // query over a single in-bounds position always succeeds
                        self.query(i, i).unwrap_or_default()
                    }))
                    .finish()
            })
            .field("len", &self.len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_and_query() {
        let tree = SegmentTree::from(&[1_i64, 2, 3, 4, 5, 6, 7, 8][..]);
        assert_eq!(tree.query(0, 7), Some(36));
        assert_eq!(tree.query(0, 0), Some(1));
        assert_eq!(tree.query(3, 5), Some(15));
        assert_eq!(tree.query(7, 7), Some(8));
    }

    #[test]
    fn test_invalid_ranges() {
        let tree = SegmentTree::from(&[1_i64, 2, 3][..]);
        assert_eq!(tree.query(2, 1), None);
        assert_eq!(tree.query(0, 3), None);

        let empty: SegmentTree<i64> = SegmentTree::new(0);
        assert_eq!(empty.query(0, 0), None);
    }

    #[test]
    fn test_update_then_query() {
        let mut tree = SegmentTree::from(&[10_i64, 20, 30, 40][..]);
        tree.update(1, 5);
        assert_eq!(tree.query(0, 3), Some(85));
        assert_eq!(tree.query(1, 1), Some(5));
        assert_eq!(tree.query(0, 1), Some(15));
    }

    #[test]
    fn test_matches_naive_recomputation() {
        let mut values = [0_i64; 33];
        let mut tree: SegmentTree<i64> = SegmentTree::new(33);

        for step in 0..100_i64 {
            let index = (step * 29 % 33) as usize;
            let value = step * step % 47 - 23;
            values[index] = value;
            tree.update(index, value);
        }

        for from in 0..33 {
            for to in from..33 {
                let naive: i64 = values[from..=to].iter().sum();
                assert_eq!(tree.query(from, to), Some(naive), "mismatch on [{from}, {to}]");
            }
        }
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_update_out_of_bounds_panics() {
        let mut tree: SegmentTree<i64> = SegmentTree::new(3);
        tree.update(3, 1);
    }

    #[test]
    fn test_non_power_of_two_len() {
        let tree = SegmentTree::from(&[2_u32, 4, 6, 8, 10][..]);
        assert_eq!(tree.query(0, 4), Some(30));
        assert_eq!(tree.query(2, 4), Some(24));
    }

    #[test]
    fn test_single_element() {
        let mut tree = SegmentTree::from(&[7_i64][..]);
        assert_eq!(tree.query(0, 0), Some(7));
        tree.update(0, -7);
        assert_eq!(tree.query(0, 0), Some(-7));
    }
}
