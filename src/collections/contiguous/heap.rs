use std::fmt::{self, Debug, Display, Formatter};
use std::slice;

use super::Vector;

/// A min-heap over a [`Vector`], yielding the smallest element first.
///
/// The elements form an implicit complete binary tree: the children of the element at index `i`
/// sit at `2i + 1` and `2i + 2`, and every parent is ordered before (or equal to) its children.
/// Only the minimum is directly accessible; the rest of the ordering is produced lazily as
/// elements are extracted.
///
/// # Time Complexity
/// For this analysis of time complexity, `n` is the number of items in the BinaryHeap.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(log n)`*, `O(n)` |
/// | `extract_min` | `O(log n)` |
/// | `peek_min` | `O(1)` |
/// | `from_iter` | `O(n)`** |
/// | `clear` | `O(n)` |
///
/// \* Inserting into a full BinaryHeap reallocates, which takes `O(n)`.
///
/// \** Heapifying bottom-up is linear, cheaper than `n` repeated inserts.
pub struct BinaryHeap<T: Ord> {
    items: Vector<T>,
}

impl<T: Ord> BinaryHeap<T> {
    /// Creates a new, empty BinaryHeap. No memory is allocated until the first insert.
    pub const fn new() -> BinaryHeap<T> {
        BinaryHeap {
            items: Vector::new(),
        }
    }

    /// Creates a new BinaryHeap with capacity for `cap` elements.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    pub fn with_cap(cap: usize) -> BinaryHeap<T> {
        BinaryHeap {
            items: Vector::with_cap(cap),
        }
    }

    /// Returns the number of elements in the BinaryHeap.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the current capacity of the BinaryHeap.
    pub const fn cap(&self) -> usize {
        self.items.cap()
    }

    /// Returns true if the BinaryHeap holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a value to the BinaryHeap, keeping the min-heap order.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::BinaryHeap;
    /// let mut heap = BinaryHeap::new();
    /// heap.insert(3);
    /// heap.insert(1);
    /// heap.insert(2);
    /// assert_eq!(heap.peek_min(), Some(&1));
    /// ```
    pub fn insert(&mut self, value: T) {
        self.items.push(value);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the smallest element, or None if the BinaryHeap is empty.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::BinaryHeap;
    /// let mut heap: BinaryHeap<_> = [5, 1, 4, 2, 3].into_iter().collect();
    /// assert_eq!(heap.extract_min(), Some(1));
    /// assert_eq!(heap.extract_min(), Some(2));
    /// ```
    pub fn extract_min(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }

        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let min = self.items.pop();
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        min
    }

    /// Returns a reference to the smallest element without removing it.
    pub fn peek_min(&self) -> Option<&T> {
        self.items.first()
    }

    /// Removes all elements, keeping the allocation for reuse.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Ensures capacity for `extra` elements beyond the current length.
    ///
    /// # Panics
    /// Panics if the resulting capacity would overflow.
    pub fn reserve(&mut self, extra: usize) {
        self.items.reserve(extra);
    }

    /// Iterates over the BinaryHeap's elements in storage order, which is not sorted.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consumes the BinaryHeap, returning every element from smallest to largest.
    pub fn into_sorted(mut self) -> Vector<T> {
        let mut sorted = Vector::with_cap(self.len());
        while let Some(min) = self.extract_min() {
            sorted.push(min);
        }
        sorted
    }
}

impl<T: Ord> BinaryHeap<T> {
    /// Moves the element at `index` towards the root until its parent is no larger.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.items[parent] <= self.items[index] {
                break;
            }
            self.items.swap(parent, index);
            index = parent;
        }
    }

    /// Moves the element at `index` towards the leaves until both children are no smaller.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.items[left] < self.items[smallest] {
                smallest = left;
            }
            if right < len && self.items[right] < self.items[smallest] {
                smallest = right;
            }
            if smallest == index {
                break;
            }

            self.items.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: Ord> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for BinaryHeap<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter.into_iter() {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinaryHeap<T> {
    /// Collects the elements and heapifies them bottom-up in `O(n)`.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = BinaryHeap {
            items: iter.into_iter().collect(),
        };

        // Leaves are already valid one-element heaps; sift down each internal node.
        for index in (0..heap.items.len() / 2).rev() {
            heap.sift_down(index);
        }

        heap
    }
}

impl<T: Ord> From<Vector<T>> for BinaryHeap<T> {
    fn from(items: Vector<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Ord + Debug> Debug for BinaryHeap<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field_with("contents", |f| f.debug_list().entries(self.iter()).finish())
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Ord + Debug> Display for BinaryHeap<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_yields_sorted_order() {
        let heap: BinaryHeap<_> = [9, 3, 7, 1, 8, 2, 6, 4, 5, 0].into_iter().collect();
        assert_eq!(heap.into_sorted(), Vector::from(0..10));
    }

    #[test]
    fn test_insert_updates_min() {
        let mut heap = BinaryHeap::new();
        heap.insert(5);
        assert_eq!(heap.peek_min(), Some(&5));
        heap.insert(7);
        assert_eq!(heap.peek_min(), Some(&5));
        heap.insert(2);
        assert_eq!(heap.peek_min(), Some(&2));
    }

    #[test]
    fn test_duplicates_all_come_out() {
        let mut heap: BinaryHeap<_> = [3, 1, 3, 1, 2].into_iter().collect();
        let mut drained = Vec::new();
        while let Some(min) = heap.extract_min() {
            drained.push(min);
        }
        assert_eq!(drained, [1, 1, 2, 3, 3]);
    }

    #[test]
    fn test_empty_heap() {
        let mut heap: BinaryHeap<u32> = BinaryHeap::new();
        assert_eq!(heap.extract_min(), None);
        assert_eq!(heap.peek_min(), None);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_heap_property_holds_after_heapify() {
        let heap: BinaryHeap<_> = (0..64).rev().collect();
        let items: Vec<_> = heap.iter().copied().collect();
        for (i, parent) in items.iter().enumerate() {
            for child in [2 * i + 1, 2 * i + 2] {
                if child < items.len() {
                    assert!(parent <= &items[child], "parent {i} out of order with child {child}");
                }
            }
        }
    }
}
