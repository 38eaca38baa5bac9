use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::ops::{Index, IndexMut};

use super::{Link, Node, NodeRef};
use crate::collections::contiguous::Vector;
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in both directions, giving `O(1)` access to both ends and allowing indexed
/// operations to walk from whichever end is nearer.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` / `back` | `O(1)` |
/// | `push_front` / `push_back` | `O(1)` |
/// | `pop_front` / `pop_back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` / `remove` | `O(min(i, n-i))` |
/// | `append` | `O(1)` |
/// | `contains` | `O(n)` |
pub struct DoublyLinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) tail: Link<T>,
    pub(crate) len: usize,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new DoublyLinkedList with no elements.
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the length of the DoublyLinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DoublyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub const fn front(&self) -> Option<&T> {
        match &self.head {
            Some(head) => Some(head.value()),
            None => None,
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub const fn front_mut(&mut self) -> Option<&mut T> {
        match &mut self.head {
            Some(head) => Some(head.value_mut()),
            None => None,
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub const fn back(&self) -> Option<&T> {
        match &self.tail {
            Some(tail) => Some(tail.value()),
            None => None,
        }
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub const fn back_mut(&mut self) -> Option<&mut T> {
        match &mut self.tail {
            Some(tail) => Some(tail.value_mut()),
            None => None,
        }
    }

    /// Adds the provided element to the front of the DoublyLinkedList.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::linked::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::new();
    /// list.push_front(2);
    /// list.push_front(1);
    /// list.push_back(3);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn push_front(&mut self, value: T) {
        let node = NodeRef::alloc(Node {
            value,
            prev: None,
            next: self.head,
        });

        match &mut self.head {
            Some(old_head) => old_head.set_prev(Some(node)),
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Adds the provided element to the back of the DoublyLinkedList.
    pub fn push_back(&mut self, value: T) {
        let node = NodeRef::alloc(Node {
            value,
            prev: self.tail,
            next: None,
        });

        match &mut self.tail {
            Some(old_tail) => old_tail.set_next(Some(node)),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: The head handle is replaced below and no copy of it survives.
        let node = unsafe { head.dealloc() };

        self.head = node.next;
        match &mut self.head {
            Some(new_head) => new_head.set_prev(None),
            None => self.tail = None,
        }
        self.len -= 1;

        Some(node.value)
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        // SAFETY: The tail handle is replaced below and no copy of it survives.
        let node = unsafe { tail.dealloc() };

        self.tail = node.prev;
        match &mut self.tail {
            Some(new_tail) => new_tail.set_next(None),
            None => self.head = None,
        }
        self.len -= 1;

        Some(node.value)
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the DoublyLinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the DoublyLinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Inserts the provided element at `index`, shifting the rest of the list towards the tail.
    /// `index` may equal the length, in which case the element is appended.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the DoublyLinkedList.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided element at `index`, returning an [`Err`] on a failure rather than
    /// panicking.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        if index == 0 {
            self.push_front(value);
        } else if index == self.len {
            self.push_back(value);
        } else {
            // Neither end, so the node lands between two existing nodes.
            let mut next = self.checked_seek(index)?;
            // SAFETY: index > 0, so the sought node has a predecessor.
            let mut prev = unsafe { next.prev().unreachable() };

            let node = NodeRef::alloc(Node {
                value,
                prev: Some(prev),
                next: Some(next),
            });

            prev.set_next(Some(node));
            next.set_prev(Some(node));
            self.len += 1;
        }
        Ok(())
    }

    /// Removes and returns the element at `index`, linking its neighbours together.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the DoublyLinkedList.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at `index`, returning an [`Err`] on a failure rather than
    /// panicking.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        if index == 0 {
            return self.pop_front().ok_or(IndexOutOfBounds {
                index,
                len: 0,
            });
        }
        if index == self.len.wrapping_sub(1) {
            // SAFETY: index + 1 == len != 0, so the list has a tail to pop.
            return Ok(unsafe { self.pop_back().unreachable() });
        }

        let target = self.checked_seek(index)?;
        // SAFETY: The handle is unlinked below and no copy of it survives.
        let node = unsafe { target.dealloc() };

        // SAFETY: The node is neither head nor tail, so both neighbours exist.
        let (mut prev, mut next) = unsafe { (node.prev.unreachable(), node.next.unreachable()) };
        prev.set_next(Some(next));
        next.set_prev(Some(prev));
        self.len -= 1;

        Ok(node.value)
    }

    /// Replaces the element at `index` with a new value, returning the old one.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the DoublyLinkedList.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    /// Replaces the element at `index`, returning an [`Err`] on a failure rather than panicking.
    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_get_mut(index)?, new_value))
    }

    /// Moves every element of `other` to the back of this list, leaving `other` empty.
    pub fn append(&mut self, other: &mut DoublyLinkedList<T>) {
        let Some(mut other_head) = other.head else {
            return;
        };

        match self.tail {
            Some(mut tail) => {
                tail.set_next(Some(other_head));
                other_head.set_prev(Some(tail));
                self.tail = other.tail;
            },
            None => {
                self.head = other.head;
                self.tail = other.tail;
            },
        }
        self.len += other.len;

        other.head = None;
        other.tail = None;
        other.len = 0;
    }

    /// Removes all elements from the DoublyLinkedList.
    pub fn clear(&mut self) {
        let mut curr = self.head;
        while let Some(node) = curr {
            // SAFETY: The traversal moves past the node before freeing it and no other handle to
            // it remains.
            curr = unsafe { node.dealloc() }.next;
        }

        self.head = None;
        self.tail = None;
        self.len = 0;
    }
}

impl<T: Eq> DoublyLinkedList<T> {
    /// Returns the index of the first element equal to `item`, if any.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        for (index, element) in self.iter().enumerate() {
            if element == item { return Some(index); }
        }
        None
    }

    /// Returns true if any element of the list is equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }
}

impl<T> DoublyLinkedList<T> {
    /// Finds the node at `index`, walking from whichever end is nearer.
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodeRef<T>, IndexOutOfBounds> {
        if index >= self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        let node = if index < self.len / 2 {
            // SAFETY: index < len, so the head and every next link on the path exist.
            unsafe {
                let mut node = self.head.unreachable();
                for _ in 0..index {
                    node = node.next().unreachable();
                }
                node
            }
        } else {
            // SAFETY: index < len, so the tail and every prev link on the path exist.
            unsafe {
                let mut node = self.tail.unreachable();
                for _ in 0..(self.len - 1 - index) {
                    node = node.prev().unreachable();
                }
                node
            }
        };

        Ok(node)
    }
}

impl<T> Index<usize> for DoublyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for DoublyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        for item in iter.into_iter() {
            list.push_back(item);
        }
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter.into_iter() {
            self.push_back(item);
        }
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field_with("contents", |f| f.debug_list().entries(self.iter()).finish())
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vector<String>>()
                .join(") <-> (")
        )
    }
}

// SAFETY: The list owns its nodes outright; sending it moves unique ownership of every T.
unsafe impl<T: Send> Send for DoublyLinkedList<T> {}
// SAFETY: Shared access only reads through the links; no interior mutability is exposed.
unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}
