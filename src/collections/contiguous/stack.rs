use std::fmt::{self, Debug, Display, Formatter};
use std::slice;

use super::Vector;

/// A last-in first-out stack backed by a [`Vector`], with the top at the end of the allocation.
///
/// # Time Complexity
/// For this analysis of time complexity, `n` is the number of items in the Stack.
///
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `len` | `O(1)` |
/// | `clear` | `O(n)` |
///
/// \* Pushing onto a full Stack reallocates, which takes `O(n)`.
pub struct Stack<T> {
    items: Vector<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty Stack. No memory is allocated until the first push.
    pub const fn new() -> Stack<T> {
        Stack {
            items: Vector::new(),
        }
    }

    /// Creates a new Stack with capacity for `cap` elements.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    pub fn with_cap(cap: usize) -> Stack<T> {
        Stack {
            items: Vector::with_cap(cap),
        }
    }

    /// Returns the number of elements on the Stack.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the current capacity of the Stack.
    pub const fn cap(&self) -> usize {
        self.items.cap()
    }

    /// Returns true if the Stack holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a value onto the top of the Stack, growing the capacity if required.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::Stack;
    /// let mut stack = Stack::new();
    /// stack.push(1);
    /// stack.push(2);
    /// assert_eq!(stack.pop(), Some(2));
    /// assert_eq!(stack.pop(), Some(1));
    /// assert_eq!(stack.pop(), None);
    /// ```
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes and returns the value on top of the Stack, or None if it is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns a reference to the value on top of the Stack without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns a mutable reference to the value on top of the Stack.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
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

    /// Iterates over the Stack's elements from the bottom to the top.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> From<Vector<T>> for Stack<T> {
    fn from(items: Vector<T>) -> Self {
        Stack {
            items,
        }
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;

    type IntoIter = super::vector::IntoIter<T>;

    /// Consumes the Stack, iterating from the bottom to the top. Reverse for popping order.
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field_with("contents", |f| f.debug_list().entries(self.iter()).finish())
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Top element first, marked with the open end.
        write!(
            f, "[{}>",
            self.iter()
                .rev()
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
    fn test_lifo_ordering() {
        let mut stack: Stack<_> = (0..10).collect();
        for i in (0..10).rev() {
            assert_eq!(stack.peek(), Some(&i));
            assert_eq!(stack.pop(), Some(i));
        }
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_peek_mut_changes_top() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        if let Some(top) = stack.peek_mut() {
            *top = 20;
        }
        assert_eq!(stack.pop(), Some(20));
        assert_eq!(stack.pop(), Some(1));
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut stack = Stack::with_cap(8);
        stack.extend(0..5);
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.cap(), 8);
    }
}
