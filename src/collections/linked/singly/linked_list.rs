use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::ops::{Index, IndexMut};

use crate::collections::contiguous::Vector;
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

/// A list with links in one direction only, from head to tail.
///
/// Each node owns the next through a [`Box`], so the whole structure is expressible without raw
/// pointers. The price of the single direction is that only the head is reachable in `O(1)`;
/// every other position costs a walk from the front.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `push_front` / `pop_front` | `O(1)` |
/// | `push_back` | `O(n)` |
/// | `get` | `O(i)` |
/// | `insert` / `remove` | `O(i)` |
/// | `reverse` | `O(n)` |
/// | `contains` | `O(n)` |
pub struct SinglyLinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new SinglyLinkedList with no elements.
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            head: None,
            len: 0,
        }
    }

    /// Returns the length of the SinglyLinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the SinglyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    /// Returns a reference to the last element in the list, walking the entire list to reach it.
    pub fn back(&self) -> Option<&T> {
        let mut node = self.head.as_deref()?;
        while let Some(next) = node.next.as_deref() {
            node = next;
        }
        Some(&node.value)
    }

    /// Returns a mutable reference to the last element in the list, walking the entire list to
    /// reach it.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let mut node = self.head.as_deref_mut()?;
        while node.next.is_some() {
            node = node.next.as_deref_mut()?;
        }
        Some(&mut node.value)
    }

    /// Adds the provided element to the front of the SinglyLinkedList.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::linked::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::new();
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn push_front(&mut self, value: T) {
        self.head = Some(Box::new(Node {
            value,
            next: self.head.take(),
        }));
        self.len += 1;
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        self.head = node.next;
        self.len -= 1;
        Some(node.value)
    }

    /// Adds the provided element to the back of the SinglyLinkedList, walking the entire list to
    /// reach it.
    pub fn push_back(&mut self, value: T) {
        let len = self.len;
        // index == len is always a valid insertion point, so this never fails.
        self.try_insert(len, value).throw();
    }

    /// Removes the last element from the list and returns it, walking the entire list to
    /// reach it.
    pub fn pop_back(&mut self) -> Option<T> {
        match self.len {
            0 => None,
            len => self.try_remove(len - 1).ok(),
        }
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SinglyLinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let mut link = &self.head;
        for _ in 0..index {
            link = match link {
                Some(node) => &node.next,
                None => break,
            };
        }

        match link {
            Some(node) if index < self.len => Ok(&node.value),
            _ => Err(IndexOutOfBounds {
                index,
                len: self.len,
            }),
        }
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SinglyLinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len;
        if index >= len {
            return Err(IndexOutOfBounds {
                index,
                len,
            });
        }

        let mut link = &mut self.head;
        for _ in 0..index {
            // The bounds check above guarantees every step lands on a node.
            link = &mut link.as_mut().ok_or(IndexOutOfBounds { index, len }).throw().next;
        }
        Ok(&mut link.as_mut().ok_or(IndexOutOfBounds { index, len }).throw().value)
    }

    /// Inserts the provided element at `index`, shifting the rest of the list towards the tail.
    /// `index` may equal the length, in which case the element is appended.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the SinglyLinkedList.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided element at `index`, returning an [`Err`] on a failure rather than
    /// panicking.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let len = self.len;
        if index > len {
            return Err(IndexOutOfBounds {
                index,
                len,
            });
        }

        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut().ok_or(IndexOutOfBounds { index, len }).throw().next;
        }

        *link = Some(Box::new(Node {
            value,
            next: link.take(),
        }));
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, linking its neighbours together.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SinglyLinkedList.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at `index`, returning an [`Err`] on a failure rather than
    /// panicking.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let len = self.len;
        if index >= len {
            return Err(IndexOutOfBounds {
                index,
                len,
            });
        }

        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut().ok_or(IndexOutOfBounds { index, len }).throw().next;
        }

        let node = *link.take().ok_or(IndexOutOfBounds { index, len }).throw();
        *link = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    /// Replaces the element at `index` with a new value, returning the old one.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SinglyLinkedList.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    /// Replaces the element at `index`, returning an [`Err`] on a failure rather than panicking.
    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_get_mut(index)?, new_value))
    }

    /// Reverses the SinglyLinkedList in place by relinking every node, without moving any values.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::linked::SinglyLinkedList;
    /// let mut list: SinglyLinkedList<_> = (0..5).collect();
    /// list.reverse();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [4, 3, 2, 1, 0]);
    /// ```
    pub fn reverse(&mut self) {
        let mut reversed = None;
        let mut rest = self.head.take();

        while let Some(mut node) = rest {
            rest = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }

        self.head = reversed;
    }

    /// Removes all elements from the SinglyLinkedList.
    pub fn clear(&mut self) {
        // Unlink each node in turn rather than dropping the chain recursively, which would
        // overflow the stack on a long list.
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
        self.len = 0;
    }
}

impl<T: Eq> SinglyLinkedList<T> {
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

impl<T> Index<usize> for SinglyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for SinglyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        // Push to the front, then reverse: O(n) rather than O(n^2) of repeated push_back.
        let mut list = SinglyLinkedList::new();
        for item in iter.into_iter() {
            list.push_front(item);
        }
        list.reverse();
        list
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field_with("contents", |f| f.debug_list().entries(self.iter()).finish())
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vector<String>>()
                .join(") -> (")
        )
    }
}
