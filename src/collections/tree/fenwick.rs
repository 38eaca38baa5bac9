use std::fmt::{self, Debug, Formatter};

use crate::collections::contiguous::Vector;

/// A prefix-sum accumulator over a fixed-length sequence of [`i64`] values.
///
/// Internally the tree is a flat array indexed from 1, where slot `i` holds the sum of the
/// `i & i.wrapping_neg()` values ending at position `i`. Walking indices by adding or clearing
/// that lowest set bit visits `O(log n)` slots, which makes both point updates and prefix sums
/// logarithmic without any pointer structure. The public API is indexed from 0 like every other
/// sequence here; the offset is internal.
///
/// The length is fixed at construction. Values are adjusted by deltas rather than overwritten,
/// since the slots store overlapping partial sums, not the values themselves.
///
/// # Time Complexity
///
/// | Method | Complexity |
/// |-|-|
/// | `update` | `O(log n)` |
/// | `prefix_sum` | `O(log n)` |
/// | `range_sum` | `O(log n)` |
/// | `From<&[i64]>` | `O(n)` |
pub struct FenwickTree {
    /// Slot 0 is unused; the low-bit index walk needs indices to start at 1.
    slots: Vector<i64>,
}

impl FenwickTree {
    /// Creates a new FenwickTree of `len` zeroes.
    pub fn new(len: usize) -> FenwickTree {
        let mut slots = Vector::with_cap(len + 1);
        slots.extend((0..=len).map(|_| 0));
        FenwickTree { slots }
    }

    /// Returns the number of positions in the tree.
    pub fn len(&self) -> usize {
        self.slots.len() - 1
    }

    /// Returns true if the tree has no positions at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `delta` to the value at `index`.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::tree::FenwickTree;
    /// let mut tree = FenwickTree::new(8);
    /// tree.update(3, 10);
    /// tree.update(3, -4);
    /// assert_eq!(tree.range_sum(3, 3), 6);
    /// ```
    pub fn update(&mut self, index: usize, delta: i64) {
        if index >= self.len() {
            panic!("index {} is out of bounds (len {})", index, self.len());
        }

        let mut i = index + 1;
        while i < self.slots.len() {
            self.slots[i] += delta;
            i += lowest_bit(i);
        }
    }

    /// Returns the sum of the values at positions `0..=index`, clamped to the tree's length.
    pub fn prefix_sum(&self, index: usize) -> i64 {
        let mut i = (index + 1).min(self.len());
        let mut sum = 0;
        while i > 0 {
            sum += self.slots[i];
            i -= lowest_bit(i);
        }
        sum
    }

    /// Returns the sum of the values at positions `from..=to`, or 0 when the range is empty.
    pub fn range_sum(&self, from: usize, to: usize) -> i64 {
        if from > to {
            return 0;
        }
        let total = self.prefix_sum(to);
        match from {
            0 => total,
            _ => total - self.prefix_sum(from - 1),
        }
    }

    /// Returns the sum of every value in the tree.
    pub fn total(&self) -> i64 {
        match self.len() {
            0 => 0,
            len => self.prefix_sum(len - 1),
        }
    }
}

const fn lowest_bit(i: usize) -> usize {
    i & i.wrapping_neg()
}

impl From<&[i64]> for FenwickTree {
    /// Builds the tree in a single pass: each slot pushes its running sum up to its parent slot,
    /// which is cheaper than `len` separate updates.
    fn from(values: &[i64]) -> Self {
        let mut tree = FenwickTree::new(values.len());
        for (index, value) in values.iter().enumerate() {
            let i = index + 1;
            tree.slots[i] += *value;
            let parent = i + lowest_bit(i);
            if parent < tree.slots.len() {
                let carried = tree.slots[i];
                tree.slots[parent] += carried;
            }
        }
        tree
    }
}

impl Debug for FenwickTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FenwickTree")
            .field_with("values", |f| {
                f.debug_list()
                    .entries((0..self.len()).map(|i| self.range_sum(i, i)))
                    .finish()
            })
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_prefix(values: &[i64], index: usize) -> i64 {
        values[..=index].iter().sum()
    }

    #[test]
    fn test_updates_match_naive_sums() {
        let mut tree = FenwickTree::new(50);
        let mut shadow = [0_i64; 50];

        // A fixed pseudo-random-ish update pattern.
        for step in 0..200_i64 {
            let index = (step * 37 % 50) as usize;
            let delta = step % 13 - 6;
            tree.update(index, delta);
            shadow[index] += delta;
        }

        for i in 0..50 {
            assert_eq!(tree.prefix_sum(i), naive_prefix(&shadow, i), "prefix mismatch at {i}");
        }
    }

    #[test]
    fn test_from_slice_matches_individual_updates() {
        let values = [5, -3, 0, 12, 7, -9, 1, 1, 100];
        let built = FenwickTree::from(&values[..]);

        let mut updated = FenwickTree::new(values.len());
        for (i, v) in values.iter().enumerate() {
            updated.update(i, *v);
        }

        for i in 0..values.len() {
            assert_eq!(built.prefix_sum(i), updated.prefix_sum(i));
        }
    }

    #[test]
    fn test_range_sum() {
        let tree = FenwickTree::from(&[1, 2, 3, 4, 5][..]);
        assert_eq!(tree.range_sum(0, 4), 15);
        assert_eq!(tree.range_sum(1, 3), 9);
        assert_eq!(tree.range_sum(2, 2), 3);
        assert_eq!(tree.range_sum(3, 1), 0);
        assert_eq!(tree.total(), 15);
    }

    #[test]
    fn test_negative_values() {
        let tree = FenwickTree::from(&[-5, 10, -5][..]);
        assert_eq!(tree.total(), 0);
        assert_eq!(tree.prefix_sum(0), -5);
        assert_eq!(tree.range_sum(1, 2), 5);
    }

    #[test]
    fn test_empty_tree() {
        let tree = FenwickTree::new(0);
        assert!(tree.is_empty());
        assert_eq!(tree.total(), 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_update_out_of_bounds_panics() {
        let mut tree = FenwickTree::new(4);
        tree.update(4, 1);
    }

    #[test]
    fn test_prefix_sum_clamps_to_len() {
        let tree = FenwickTree::from(&[1, 2, 3][..]);
        assert_eq!(tree.prefix_sum(99), 6);
    }
}
