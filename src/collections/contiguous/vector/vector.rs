use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::iter::TrustedLen;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::RawBuf;
pub use crate::util::error::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds};

const MIN_CAP: usize = 2;
const MAX_CAP: usize = isize::MAX as usize;

const GROWTH_FACTOR: usize = 2;

/// A growable contiguous collection; the crate's replacement for [`Vec`].
///
/// Elements occupy a single allocation, preserving insertion order and giving `O(1)` random
/// access. The capacity is always exactly what the last capacity-changing call established, unlike
/// [`Vec`] which is free to over-allocate.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `replace` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `split_off` | `O(n-i)` |
/// | `contains` | `O(n)` |
///
/// \* Pushing into a full Vector reallocates, which takes `O(n)`.
///
/// \** If the Vector already has enough capacity, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Returns the number of elements in the Vector.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::Vector;
    /// let vec = Vector::from(1_u8..=3);
    /// assert_eq!(vec.len(), 3);
    /// ```
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the current capacity of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub const fn cap(&self) -> usize {
        self.buf.cap
    }

    /// Returns true if the Vector contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// assert!(vec.is_empty());
    /// vec.push(1);
    /// assert!(!vec.is_empty())
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Creates a new Vector with length and capacity 0. No memory is allocated until elements are
    /// added or capacity is reserved.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            buf: RawBuf::dangling(),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing that many
    /// elements to be added without reallocation.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            buf: RawBuf::with_cap(cap),
            len: 0,
        }
    }

    /// Pushes the provided value onto the end of the Vector, growing the capacity if required.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }
        // SAFETY: The capacity has just been adjusted to fit the new element.
        unsafe { self.push_unchecked(value) }
    }

    /// Pushes the provided value onto the end of the Vector, assuming that there is capacity for
    /// it.
    ///
    /// # Safety
    /// The caller must ensure that `len < cap`, using methods like [`reserve`](Vector::reserve) or
    /// [`with_cap`](Vector::with_cap) beforehand. Pushing into a full Vector this way is undefined
    /// behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: The caller guarantees len < cap, so the write is in bounds of the allocation.
        unsafe { self.buf.ptr.add(self.len).write(value); }
        self.len += 1;
    }

    /// Removes the last value from the Vector and returns it, or None if the Vector is empty.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::from(0..5);
    /// for i in (0..5).rev() {
    ///     assert_eq!(vec.pop(), Some(i));
    /// }
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: len has just been decremented, so the slot holds the initialized last
            // element. Reading it moves the value out; len now excludes the slot, so it won't be
            // touched or dropped again.
            Some(unsafe { self.buf.ptr.add(self.len).read() })
        }
    }

    /// Inserts the provided value at the given index, shifting everything at or after it one slot
    /// towards the end. Inserting at `len` is equivalent to [`push`](Vector::push).
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::from(0..3);
    /// vec.insert(1, 100);
    /// vec.insert(4, 200);
    /// assert_eq!(&*vec, &[0, 100, 1, 2, 200]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(
            index <= self.len,
            "insertion index {} out of bounds for collection with {} elements",
            index,
            self.len
        );

        if self.len == self.cap() {
            self.grow();
        }

        // SAFETY: index <= len < cap, so both the copy region and the write slot are in bounds.
        // The copy moves [index, len) to [index + 1, len + 1), leaving the slot at index free.
        unsafe {
            let slot = self.buf.ptr.add(index);
            ptr::copy(slot.as_ptr(), slot.as_ptr().add(1), self.len - index);
            slot.write(value);
        }
        self.len += 1;
    }

    /// A fallible version of [`insert`](Vector::insert) which reports invalid indices and
    /// impossible capacities instead of panicking.
    ///
    /// # Errors
    /// Returns an error if `index > len`, or if the Vector is full and cannot grow any further.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOrCapOverflow> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len }.into());
        }
        if self.len == self.cap() && self.cap() == MAX_CAP / cmp::max(size_of::<T>(), 1) {
            return Err(CapacityOverflow.into());
        }

        self.insert(index, value);
        Ok(())
    }

    /// Removes and returns the element at the provided index, shifting all following values one
    /// slot towards the start.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.check_index(index);

        // SAFETY: index < len, so the read is of an initialized slot. The copy then moves
        // [index + 1, len) down over it, and the decremented len excludes the now-duplicated last
        // slot from any further access.
        unsafe {
            let slot = self.buf.ptr.add(index);
            let value = slot.read();
            ptr::copy(slot.as_ptr().add(1), slot.as_ptr(), self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Replaces the element at the provided index with a new value, returning the old one.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.check_index(index);

        // SAFETY: index < len, so the slot is initialized; read + write moves the old value out
        // and the new one in without dropping either in place.
        unsafe {
            let slot = self.buf.ptr.add(index);
            let old = slot.read();
            slot.write(new_value);
            old
        }
    }

    /// Removes all elements, keeping the allocation for reuse.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::from(0..4);
    /// vec.clear();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.cap(), 4);
    /// ```
    pub fn clear(&mut self) {
        let len = self.len;
        // Zero the length first so a panicking Drop can't cause a double drop.
        self.len = 0;

        for i in 0..len {
            // SAFETY: All slots below the old len are initialized, properly aligned and ready to
            // drop; len is already 0 so nothing will observe them again.
            unsafe {
                ptr::drop_in_place(self.buf.ptr.add(i).as_ptr());
            }
        }
    }

    /// Ensures the Vector has capacity for `extra` elements beyond its current length. Never
    /// shrinks.
    ///
    /// # Panics
    /// Panics if the resulting capacity would overflow.
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.strict_add(extra);
        if new_cap > self.cap() {
            self.buf.realloc(new_cap);
        }
    }

    /// Reduces the capacity to exactly the current length, releasing any spare memory.
    pub fn shrink_to_fit(&mut self) {
        self.buf.realloc(self.len);
    }

    /// Splits the Vector in two at the provided index, returning a new Vector containing
    /// `[at, len)` and leaving `[0, at)` in self.
    ///
    /// # Panics
    /// Panics if `at > len`.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::from(0..6);
    /// let back = vec.split_off(4);
    /// assert_eq!(&*vec, &[0, 1, 2, 3]);
    /// assert_eq!(&*back, &[4, 5]);
    /// ```
    pub fn split_off(&mut self, at: usize) -> Vector<T> {
        assert!(
            at <= self.len,
            "split index {} out of bounds for collection with {} elements",
            at,
            self.len
        );

        let back_len = self.len - at;
        let mut back = Vector::with_cap(back_len);

        // SAFETY: The source range [at, len) is initialized and the freshly allocated destination
        // has exactly back_len slots. Truncating self.len first transfers ownership of the moved
        // values to the new Vector.
        unsafe {
            self.len = at;
            ptr::copy_nonoverlapping(
                self.buf.ptr.add(at).as_ptr(),
                back.buf.ptr.as_ptr(),
                back_len
            );
            back.len = back_len;
        }

        back
    }
}

impl<T> Vector<T> {
    pub(crate) fn grow(&mut self) {
        let mut new_cap = cmp::max(self.cap() * GROWTH_FACTOR, MIN_CAP);

        // If doubling would pass the maximum capacity, use the maximum if it still represents
        // growth.
        let elem_size = cmp::max(size_of::<T>(), 1);
        if new_cap > MAX_CAP / elem_size && self.cap() < MAX_CAP / elem_size {
            new_cap = MAX_CAP / elem_size;
        }

        self.buf.realloc(new_cap);
    }

    pub(crate) fn check_index(&self, index: usize) {
        assert!(
            index < self.len,
            "index {} out of bounds for collection with {} elements",
            index,
            self.len
        );
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter.into_iter() {
            self.push(item);
        }
    }

    fn extend_one(&mut self, item: T) {
        self.push(item);
    }

    fn extend_reserve(&mut self, additional: usize) {
        self.reserve(additional);
    }

    unsafe fn extend_one_unchecked(&mut self, item: T) where Self: Sized {
        // SAFETY: extend_reserve is implemented correctly, so the remaining safety requirements
        // rest with the caller.
        unsafe { self.push_unchecked(item) }
    }
}

impl<T, I> From<I> for Vector<T>
where
    I: Iterator<Item = T> + ExactSizeIterator + TrustedLen
{
    fn from(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap(iter.len());

        for item in iter {
            // SAFETY: The Vector was created with capacity for every element the trusted iterator
            // yields.
            unsafe { vec.push_unchecked(item); }
        }

        vec
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap(iter.size_hint().0);

        for item in iter {
            vec.push(item);
        }

        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        self.clear();
        // The RawBuf releases the allocation itself.
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: All slots below len are initialized, the allocation is properly aligned and no
        // larger than isize::MAX bytes. The borrow checker prevents mutation for the borrow's
        // lifetime.
        unsafe {
            slice::from_raw_parts(self.buf.ptr.as_ptr(), self.len)
        }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for Deref; the mutable borrow is exclusive for its lifetime.
        unsafe {
            slice::from_raw_parts_mut(self.buf.ptr.as_ptr(), self.len)
        }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.len);

        for value in self.iter() {
            // SAFETY: The clone was created with capacity for every element of self.
            unsafe { vec.push_unchecked(value.clone()); }
        }

        vec
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field_with("contents", |f| f.debug_list().entries(self.iter()).finish())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
