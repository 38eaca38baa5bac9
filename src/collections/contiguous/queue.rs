use std::fmt::{self, Debug, Display, Formatter};

use super::deque::{self, Deque, Iter};
use crate::collections::contiguous::Vector;

/// A first-in first-out queue backed by a [`Deque`]'s ring buffer.
///
/// The Deque already provides `O(1)` operations at both ends; the Queue narrows that interface to
/// enqueue-at-back, dequeue-at-front.
///
/// # Time Complexity
/// For this analysis of time complexity, `n` is the number of items in the Queue.
///
/// | Method | Complexity |
/// |-|-|
/// | `enqueue` | `O(1)`*, `O(n)` |
/// | `dequeue` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `len` | `O(1)` |
/// | `clear` | `O(n)` |
///
/// \* Enqueueing into a full Queue reallocates, which takes `O(n)`.
pub struct Queue<T> {
    items: Deque<T>,
}

impl<T> Queue<T> {
    /// Creates a new, empty Queue. No memory is allocated until the first enqueue.
    pub const fn new() -> Queue<T> {
        Queue {
            items: Deque::new(),
        }
    }

    /// Creates a new Queue with capacity for `cap` elements.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    pub fn with_cap(cap: usize) -> Queue<T> {
        Queue {
            items: Deque::with_cap(cap),
        }
    }

    /// Returns the number of elements in the Queue.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the current capacity of the Queue.
    pub const fn cap(&self) -> usize {
        self.items.cap()
    }

    /// Returns true if the Queue holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a value at the back of the Queue, growing the capacity if required.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::Queue;
    /// let mut queue = Queue::new();
    /// queue.enqueue(1);
    /// queue.enqueue(2);
    /// assert_eq!(queue.dequeue(), Some(1));
    /// assert_eq!(queue.dequeue(), Some(2));
    /// assert_eq!(queue.dequeue(), None);
    /// ```
    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Removes and returns the value at the front of the Queue, or None if it is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns a reference to the value at the front of the Queue without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns a mutable reference to the value at the front of the Queue.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.front_mut()
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

    /// Iterates over the Queue's elements from the front to the back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> From<Deque<T>> for Queue<T> {
    fn from(items: Deque<T>) -> Self {
        Queue {
            items,
        }
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;

    type IntoIter = deque::IntoIter<T>;

    /// Consumes the Queue, iterating in dequeueing order.
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field_with("contents", |f| f.debug_list().entries(self.iter()).finish())
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Front element first, leaving through the open end.
        write!(
            f, "<{}<",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vector<String>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_ordering() {
        let mut queue: Queue<_> = (0..10).collect();
        for i in 0..10 {
            assert_eq!(queue.peek(), Some(&i));
            assert_eq!(queue.dequeue(), Some(i));
        }
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_interleaved_use_reuses_slots() {
        let mut queue = Queue::with_cap(4);
        for i in 0..32 {
            queue.enqueue(i);
            if i % 2 == 1 {
                queue.dequeue();
            }
        }
        assert_eq!(queue.len(), 16);
        assert_eq!(queue.dequeue(), Some(16));
    }

    #[test]
    fn test_peek_mut_changes_front() {
        let mut queue: Queue<_> = (0..3).collect();
        if let Some(front) = queue.peek_mut() {
            *front = 100;
        }
        assert_eq!(queue.dequeue(), Some(100));
        assert_eq!(queue.dequeue(), Some(1));
    }

    #[test]
    fn test_into_iter_matches_dequeue_order() {
        let queue: Queue<_> = (0..5).collect();
        assert_eq!(queue.into_iter().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
    }
}
