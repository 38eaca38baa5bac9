use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::mem;

use super::Iter;
use crate::collections::contiguous::Vector;
use crate::util::fmt::DebugRaw;

const MIN_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// The table grows once it is more than four fifths full.
const LOAD_FACTOR: (usize, usize) = (4, 5);

/// An unordered set of unique values, stored in an open-addressed hash table.
///
/// Each value hashes to a home bucket; collisions are resolved by linear probing, walking forward
/// (with wraparound) until a free bucket is found. Removal backward-shifts the following probe run
/// instead of leaving tombstones, so lookups never scan deleted slots.
///
/// `B` selects the hash algorithm through [`BuildHasher`] and defaults to the standard library's
/// [`RandomState`].
///
/// # Time Complexity
/// For this analysis of time complexity, `n` is the number of items in the HashSet. Hashing a
/// value is taken to be `O(1)`.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(1)`*, `O(n)` |
/// | `contains` / `get` | `O(1)`*, `O(n)` |
/// | `remove` | `O(1)`*, `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* Expected. A pathological hasher puts every value in one probe run, which degrades all
/// operations to `O(n)`; insertion also pays `O(n)` whenever the table grows.
pub struct HashSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    pub(crate) buckets: Vector<Option<T>>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

impl<T: Hash + Eq> HashSet<T> {
    /// Creates a new, empty HashSet with a randomly seeded hasher. No memory is allocated until
    /// the first insert.
    pub fn new() -> HashSet<T> {
        HashSet {
            buckets: Vector::new(),
            len: 0,
            hasher: RandomState::new(),
        }
    }

    /// Creates a new HashSet with at least `cap` buckets.
    pub fn with_cap(cap: usize) -> HashSet<T> {
        HashSet::with_cap_and_hasher(cap, RandomState::new())
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashSet<T, B> {
    /// Creates a new, empty HashSet which hashes values with `hasher`.
    pub const fn with_hasher(hasher: B) -> HashSet<T, B> {
        HashSet {
            buckets: Vector::new(),
            len: 0,
            hasher,
        }
    }

    /// Creates a new HashSet with at least `cap` buckets, hashing values with `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashSet<T, B> {
        let mut set = HashSet::with_hasher(hasher);
        set.grow_to(cap);
        set
    }

    /// Returns the number of values in the HashSet.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of buckets in the HashSet's table.
    pub const fn cap(&self) -> usize {
        self.buckets.len()
    }

    /// Returns true if the HashSet holds no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds a value to the HashSet. Returns true if it was added and false if an equal value was
    /// already present, in which case the existing value is kept.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::hash::HashSet;
    /// let mut set = HashSet::new();
    /// assert!(set.insert("a"));
    /// assert!(!set.insert("a"));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        if self.should_grow() {
            self.grow_to(cmp::max(self.cap() * GROWTH_FACTOR, MIN_CAP));
        }

        let mut slot = self.home_of(&value);
        loop {
            match &self.buckets[slot] {
                Some(existing) if *existing == value => return false,
                Some(_) => slot = self.next_slot(slot),
                None => {
                    self.buckets[slot] = Some(value);
                    self.len += 1;
                    return true;
                },
            }
        }
    }

    /// Returns true if the HashSet contains a value equal to the one provided.
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Returns a reference to the stored value equal to the one provided, if present.
    pub fn get(&self, value: &T) -> Option<&T> {
        self.slot_of(value)
            .and_then(|slot| self.buckets[slot].as_ref())
    }

    /// Removes and returns the stored value equal to the one provided, or None if the HashSet
    /// doesn't contain it.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::hash::HashSet;
    /// let mut set: HashSet<_> = (0..4).collect();
    /// assert_eq!(set.remove(&2), Some(2));
    /// assert_eq!(set.remove(&2), None);
    /// assert_eq!(set.len(), 3);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let slot = self.slot_of(value)?;
        let removed = self.buckets[slot].take();
        self.len -= 1;

        // Backward-shift the rest of the probe run so no value is stranded behind the gap.
        let mut gap = slot;
        let mut probe = self.next_slot(slot);
        while let Some(follower) = &self.buckets[probe] {
            let home = self.home_of(follower);
            if self.probe_distance(home, probe) > self.probe_distance(home, gap) {
                self.buckets.swap(gap, probe);
                gap = probe;
            }
            probe = self.next_slot(probe);
        }

        removed
    }

    /// Grows the table until it can take `extra` more values without rehashing.
    pub fn reserve(&mut self, extra: usize) {
        // The smallest capacity that keeps len + extra insertions under the load factor.
        let needed = ((self.len + extra) * LOAD_FACTOR.1).div_ceil(LOAD_FACTOR.0);
        self.grow_to(cmp::max(needed, MIN_CAP));
    }

    /// Removes all values, keeping the table for reuse.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            *bucket = None;
        }
        self.len = 0;
    }

    /// Iterates over the HashSet's values in an arbitrary order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashSet<T, B> {
    /// The bucket this value hashes to before probing.
    pub(crate) fn home_of(&self, value: &T) -> usize {
        // Only called once the table is non-empty.
        (self.hasher.hash_one(value) % self.cap() as u64) as usize
    }

    pub(crate) const fn next_slot(&self, slot: usize) -> usize {
        (slot + 1) % self.buckets.len()
    }

    /// The number of probe steps from a value's home bucket to the provided slot.
    pub(crate) const fn probe_distance(&self, home: usize, slot: usize) -> usize {
        (slot + self.buckets.len() - home) % self.buckets.len()
    }

    /// Finds the bucket holding a value equal to the provided one, probing from its home bucket.
    pub(crate) fn slot_of(&self, value: &T) -> Option<usize> {
        if self.cap() == 0 {
            return None;
        }

        let mut slot = self.home_of(value);
        loop {
            match &self.buckets[slot] {
                Some(existing) if existing == value => return Some(slot),
                Some(_) => slot = self.next_slot(slot),
                None => return None,
            }
        }
    }

    pub(crate) const fn should_grow(&self) -> bool {
        // Grow when the next insertion would push past the load factor.
        (self.len + 1) * LOAD_FACTOR.1 > self.cap() * LOAD_FACTOR.0
    }

    /// Rebuilds the table with at least `new_cap` buckets, rehashing every value.
    pub(crate) fn grow_to(&mut self, new_cap: usize) {
        if new_cap <= self.cap() {
            return;
        }

        let old = mem::replace(
            &mut self.buckets,
            (0..new_cap).map(|_| None).collect()
        );

        for value in old.into_iter().flatten() {
            let mut slot = self.home_of(&value);
            while self.buckets[slot].is_some() {
                slot = self.next_slot(slot);
            }
            self.buckets[slot] = Some(value);
        }
    }
}

impl<T: Hash + Eq> Default for HashSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for HashSet<T, B> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for value in iter.into_iter() {
            self.insert(value);
        }
    }
}

impl<T: Hash + Eq> FromIterator<T> for HashSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = HashSet::with_cap(iter.size_hint().0);

        for value in iter {
            set.insert(value);
        }

        set
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for HashSet<T, B> {
    /// Order-independent equality: both sets must contain exactly the same values.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|value| other.contains(value))
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for HashSet<T, B> {}

impl<T: Hash + Eq + Debug, B: BuildHasher> Debug for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSet")
            .field_with("buckets", |f| {
                f.debug_list()
                    .entries(self.buckets.iter().map(|b| DebugRaw(
                        match b {
                            Some(value) => format!("{value:?}"),
                            None => "_".to_string(),
                        }
                    )))
                    .finish()
            })
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher> Display for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
