use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::ptr;

use super::Iter;
use crate::collections::contiguous::{RawBuf, Vector};

const MIN_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// A double-ended queue over a growable ring buffer.
///
/// Elements live in a single allocation at positions `(front + i) % cap`, wrapping around the end
/// of the buffer. Both ends support `O(1)` insertion and removal, which is what distinguishes this
/// from [`Vector`]. When the buffer grows, the ring is repacked to start at slot 0.
///
/// # Time Complexity
/// For this analysis of time complexity, `n` is the number of items in the Deque.
///
/// | Method | Complexity |
/// |-|-|
/// | `push_front` / `push_back` | `O(1)`*, `O(n)` |
/// | `pop_front` / `pop_back` | `O(1)` |
/// | `front` / `back` | `O(1)` |
/// | `get` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `reserve` | `O(n)`**, `O(1)` |
///
/// \* Pushing into a full Deque reallocates, which takes `O(n)`.
///
/// \** If the Deque already has enough capacity, `reserve` is `O(1)`.
pub struct Deque<T> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) front: usize,
    pub(crate) len: usize,
}

impl<T> Deque<T> {
    /// Creates a new, empty Deque. No memory is allocated until the first push.
    pub const fn new() -> Deque<T> {
        Deque {
            buf: RawBuf::dangling(),
            front: 0,
            len: 0,
        }
    }

    /// Creates a new Deque with capacity for `cap` elements.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    pub fn with_cap(cap: usize) -> Deque<T> {
        Deque {
            buf: RawBuf::with_cap(cap),
            front: 0,
            len: 0,
        }
    }

    /// Returns the number of elements in the Deque.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the current capacity of the Deque.
    pub const fn cap(&self) -> usize {
        self.buf.cap
    }

    /// Returns true if the Deque contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds a value at the front of the Deque, growing the capacity if required.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::Deque;
    /// let mut dq = Deque::new();
    /// dq.push_front(1);
    /// dq.push_front(2);
    /// dq.push_back(3);
    /// assert_eq!(dq.iter().copied().collect::<Vec<_>>(), [2, 1, 3]);
    /// ```
    pub fn push_front(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        self.front = self.wrap_sub(self.front, 1);
        // SAFETY: The capacity now exceeds len, so the slot one before the old front is free; the
        // physical index is in bounds by construction.
        unsafe { self.buf.ptr.add(self.front).write(value); }
        self.len += 1;
    }

    /// Adds a value at the back of the Deque, growing the capacity if required.
    pub fn push_back(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        let slot = self.physical(self.len);
        // SAFETY: The capacity now exceeds len, so the slot after the last element is free; the
        // physical index is in bounds by construction.
        unsafe { self.buf.ptr.add(slot).write(value); }
        self.len += 1;
    }

    /// Removes and returns the value at the front of the Deque, or None if it is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        // SAFETY: The front slot holds an initialized value; advancing front and shrinking len
        // afterwards moves it out of the ring for good.
        let value = unsafe { self.buf.ptr.add(self.front).read() };
        self.front = self.wrap_add(self.front, 1);
        self.len -= 1;
        Some(value)
    }

    /// Removes and returns the value at the back of the Deque, or None if it is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        let slot = self.physical(self.len);
        // SAFETY: len has just been decremented, so the slot holds the initialized last element
        // and is now outside the live range.
        Some(unsafe { self.buf.ptr.add(slot).read() })
    }

    /// Returns a reference to the first element, or None if the Deque is empty.
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a mutable reference to the first element.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns a reference to the last element, or None if the Deque is empty.
    pub fn back(&self) -> Option<&T> {
        self.get(self.len.wrapping_sub(1))
    }

    /// Returns a mutable reference to the last element.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.len.wrapping_sub(1))
    }

    /// Returns a reference to the element at the provided logical index, counted from the front.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }

        let slot = self.physical(index);
        // SAFETY: index < len, so the slot holds an initialized value and the shared borrow keeps
        // it alive and unmutated.
        Some(unsafe { self.buf.ptr.add(slot).as_ref() })
    }

    /// Returns a mutable reference to the element at the provided logical index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }

        let slot = self.physical(index);
        // SAFETY: index < len, so the slot holds an initialized value; the exclusive borrow of
        // self makes the reference unique.
        Some(unsafe { self.buf.ptr.add(slot).as_mut() })
    }

    /// Removes all elements, keeping the allocation for reuse.
    pub fn clear(&mut self) {
        let len = self.len;
        // Zero the length first so a panicking Drop can't cause a double drop.
        self.len = 0;

        for i in 0..len {
            let slot = self.wrap_add(self.front, i);
            // SAFETY: Every logical index below the old len maps to an initialized slot; len is
            // already 0 so nothing observes them again.
            unsafe {
                ptr::drop_in_place(self.buf.ptr.add(slot).as_ptr());
            }
        }
        self.front = 0;
    }

    /// Ensures the Deque has capacity for `extra` elements beyond its current length. Never
    /// shrinks.
    ///
    /// # Panics
    /// Panics if the resulting capacity would overflow.
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.strict_add(extra);
        if new_cap > self.cap() {
            self.repack_into(new_cap);
        }
    }

    /// Iterates over the Deque's elements from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T> Deque<T> {
    /// Maps a logical index (0 = front) to a physical slot in the ring.
    pub(crate) const fn physical(&self, index: usize) -> usize {
        self.wrap_add(self.front, index)
    }

    pub(crate) const fn wrap_add(&self, base: usize, offset: usize) -> usize {
        match self.buf.cap {
            // An empty ring has no valid slots; 0 keeps the arithmetic harmless.
            0 => 0,
            cap => (base + offset) % cap,
        }
    }

    pub(crate) const fn wrap_sub(&self, base: usize, offset: usize) -> usize {
        match self.buf.cap {
            0 => 0,
            cap => (base + cap - offset % cap) % cap,
        }
    }

    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(self.cap() * GROWTH_FACTOR, MIN_CAP);
        self.repack_into(new_cap);
    }

    /// Moves the ring into a fresh allocation of `new_cap` slots, unwrapping it so the front lands
    /// at slot 0.
    pub(crate) fn repack_into(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);

        let new_buf = RawBuf::with_cap(new_cap);

        let head_len = cmp::min(self.len, self.cap() - self.front);
        let tail_len = self.len - head_len;

        if size_of::<T>() != 0 {
            // SAFETY: The ring holds exactly len initialized values in the two (possibly empty)
            // contiguous runs [front, front + head_len) and [0, tail_len); both fit the fresh
            // allocation, and source and destination never overlap.
            unsafe {
                ptr::copy_nonoverlapping(
                    self.buf.ptr.add(self.front).as_ptr(),
                    new_buf.ptr.as_ptr(),
                    head_len
                );
                ptr::copy_nonoverlapping(
                    self.buf.ptr.as_ptr(),
                    new_buf.ptr.add(head_len).as_ptr(),
                    tail_len
                );
            }
        }

        // The old RawBuf frees its allocation here; the values inside it have been moved.
        self.buf = new_buf;
        self.front = 0;
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Deque<T> {
    fn drop(&mut self) {
        self.clear();
        // The RawBuf releases the allocation itself.
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter.into_iter() {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut deque = Deque::with_cap(iter.size_hint().0);

        for item in iter {
            deque.push_back(item);
        }

        deque
    }
}

impl<T: Clone> Clone for Deque<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: Debug> Debug for Deque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deque")
            .field_with("contents", |f| f.debug_list().entries(self.iter()).finish())
            .field("front", &self.front)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Deque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f, "<{}>",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vector<String>>()
                .join(", ")
        )
    }
}
