use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{SkipLink, SkipList};

impl<T: Ord> IntoIterator for SkipList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// An owned iterator over a [`SkipList`]'s values, from smallest to largest.
pub struct IntoIter<T: Ord>(SkipList<T>);

impl<T: Ord> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.0.head[0]?;
        // SAFETY: The node is alive and owned by the list; rewiring the head links first means
        // no link into it survives the Box round trip.
        let node = unsafe {
            // Strip the departing node out of every level of the head tower. The tower is
            // reborrowed so indexing goes through a real reference, not the raw-deref place.
            for level in 0..(*node.as_ptr()).next.len() {
                self.0.head[level] = (&(*node.as_ptr()).next)[level];
            }
            *Box::from_non_null(node)
        };
        self.0.len -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T: Ord> FusedIterator for IntoIter<T> {}

impl<T: Ord> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.0.len
    }
}

impl<'a, T: Ord> IntoIterator for &'a SkipList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            next: self.head[0],
            remaining: self.len,
            _phantom: PhantomData,
        }
    }
}

/// A borrowing iterator over a [`SkipList`]'s values, from smallest to largest. See
/// [`SkipList::iter`].
pub struct Iter<'a, T: Ord> {
    next: SkipLink<T>,
    remaining: usize,
    _phantom: PhantomData<&'a SkipList<T>>,
}

impl<'a, T: Ord> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        // SAFETY: The borrow of the list keeps every node alive and unmodified for 'a.
        unsafe {
            self.next = (&(*node.as_ptr()).next)[0];
            self.remaining -= 1;
            Some(&(*node.as_ptr()).value)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Ord> FusedIterator for Iter<'_, T> {}

impl<T: Ord> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T: Ord> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            next: self.next,
            remaining: self.remaining,
            _phantom: PhantomData,
        }
    }
}

impl<T: Ord> SkipList<T> {
    /// Iterates over the SkipList's values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}
