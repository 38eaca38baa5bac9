use std::iter::{FusedIterator, TrustedLen};
use std::ptr;

use super::Vector;
use crate::collections::contiguous::RawBuf;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = self.len;
        // Transfer the allocation to the iterator; self is left empty so its Drop is a no-op.
        self.len = 0;
        IntoIter {
            buf: self.buf.take(),
            front: 0,
            back: len,
        }
    }
}

/// An owned iterator over a [`Vector`]'s elements. See [`Vector::into_iter`].
///
/// Elements in `[front, back)` are still owned by the iterator and are dropped with it.
pub struct IntoIter<T> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            // SAFETY: front is within the initialized range; incrementing it afterwards moves the
            // value out so it can't be read or dropped twice.
            let value = unsafe { self.buf.ptr.add(self.front).read() };
            self.front += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: back has just been decremented into the initialized range; the slot is
            // excluded from the range afterwards so the value is moved, not copied.
            Some(unsafe { self.buf.ptr.add(self.back).read() })
        } else {
            None
        }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for i in self.front..self.back {
            // SAFETY: The range [front, back) holds the initialized values which haven't been
            // yielded; each is dropped exactly once. The RawBuf then frees the allocation.
            unsafe { ptr::drop_in_place(self.buf.ptr.add(i).as_ptr()) }
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

// SAFETY: size_hint returns the exact number of remaining elements.
unsafe impl<T> TrustedLen for IntoIter<T> {}

// Borrowed iteration comes for free through Deref<Target = [T]>.
