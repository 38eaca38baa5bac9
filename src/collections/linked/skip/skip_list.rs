use std::fmt::{self, Debug, Display, Formatter};
use std::ptr::{self, NonNull};

use crate::collections::contiguous::Vector;
use crate::util::random::XorShift64;

/// The tallest tower a node can roll. With p = 1/2, sixteen levels comfortably cover lists of
/// tens of thousands of elements.
pub(crate) const MAX_LEVEL: usize = 16;

pub(crate) type SkipLink<T> = Option<NonNull<SkipNode<T>>>;

pub(crate) struct SkipNode<T> {
    pub value: T,
    /// One forward link per level this node participates in. The length is the node's height.
    pub next: Vector<SkipLink<T>>,
}

/// An ordered set of unique values over a probabilistic multi-level linked list.
///
/// Every value lives in a node on the bottom level, which is an ordinary sorted singly linked
/// list. Each node additionally appears on higher levels with probability 1/2 per level, and
/// those sparser lists act as an express lane: a search drops from the fastest level to the
/// slowest as it closes in on its target, skipping most nodes entirely.
///
/// The level of each node is chosen by a coin-flipping [`XorShift64`] generator, so all bounds
/// below are expected rather than worst-case.
///
/// # Time Complexity
/// For this analysis of time complexity, `n` is the number of items in the SkipList.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(log n)` |
/// | `contains` / `get` | `O(log n)` |
/// | `remove` | `O(log n)` |
/// | `first` | `O(1)` |
/// | `clear` | `O(n)` |
pub struct SkipList<T: Ord> {
    /// The virtual head's forward links, one per level.
    pub(crate) head: [SkipLink<T>; MAX_LEVEL],
    pub(crate) len: usize,
    pub(crate) rng: XorShift64,
}

impl<T: Ord> SkipList<T> {
    /// Creates a new, empty SkipList with a randomly seeded level generator.
    pub fn new() -> SkipList<T> {
        SkipList {
            head: [None; MAX_LEVEL],
            len: 0,
            rng: XorShift64::from_entropy(),
        }
    }

    /// Creates a new, empty SkipList whose level generator starts from the provided seed.
    /// Identical seeds and insertion orders produce identical towers, which makes behaviour
    /// reproducible.
    pub const fn with_seed(seed: u64) -> SkipList<T> {
        SkipList {
            head: [None; MAX_LEVEL],
            len: 0,
            rng: XorShift64::with_seed(seed),
        }
    }

    /// Returns the number of values in the SkipList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the SkipList holds no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds a value to the SkipList, keeping every level sorted. Returns true if it was added and
    /// false if an equal value was already present.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::linked::SkipList;
    /// let mut list = SkipList::with_seed(7);
    /// assert!(list.insert(2));
    /// assert!(list.insert(1));
    /// assert!(!list.insert(2));
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2]);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let preds = self.find_preds(&value);

        // SAFETY: preds[0] points at a live link slot; its target node (if any) is alive.
        unsafe {
            if let Some(found) = *preds[0]
                && (*found.as_ptr()).value == value
            {
                return false;
            }
        }

        let height = self.roll_height();
        let mut next = Vector::with_cap(height);
        for level in 0..height {
            // SAFETY: Each pred slot is a live link; copying it seeds the new node's tower.
            next.push(unsafe { *preds[level] });
        }

        let node = NonNull::from(Box::leak(Box::new(SkipNode {
            value,
            next,
        })));

        for level in 0..height {
            // SAFETY: The slots are still live; nothing has modified the list since find_preds.
            unsafe { *preds[level] = Some(node); }
        }
        self.len += 1;
        true
    }

    /// Returns true if the SkipList contains a value equal to the one provided.
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Returns a reference to the stored value equal to the one provided, if present.
    pub fn get(&self, value: &T) -> Option<&T> {
        let mut links: *const SkipLink<T> = self.head.as_ptr();

        for level in (0..MAX_LEVEL).rev() {
            // SAFETY: links always points at the base of a live tower with more than `level`
            // slots: the head has MAX_LEVEL of them, and a node reached through its level-`level`
            // link has a tower at least that tall.
            unsafe {
                loop {
                    match *links.add(level) {
                        Some(node) if (*node.as_ptr()).value < *value => {
                            links = (*node.as_ptr()).next.as_ptr();
                        },
                        _ => break,
                    }
                }
            }
        }

        // SAFETY: The bottom link of the final tower targets the first node with a value >= the
        // one sought, if any such node exists.
        unsafe {
            match *links {
                Some(node) if (*node.as_ptr()).value == *value => Some(&(*node.as_ptr()).value),
                _ => None,
            }
        }
    }

    /// Removes and returns the stored value equal to the one provided, or None if the SkipList
    /// doesn't contain it.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let preds = self.find_preds(value);

        // SAFETY: preds[0] points at a live link slot.
        let target = unsafe { (*preds[0])? };
        // SAFETY: The target node is alive until deallocated below.
        unsafe {
            if (*target.as_ptr()).value != *value {
                return None;
            }

            // Splice the node out of every level it participates in. Because values are unique,
            // each of these pred links targets exactly this node. The tower is reborrowed so
            // indexing goes through a real reference, not the raw-deref place.
            for level in 0..(*target.as_ptr()).next.len() {
                *preds[level] = (&(*target.as_ptr()).next)[level];
            }

            let node = *Box::from_non_null(target);
            self.len -= 1;
            Some(node.value)
        }
    }

    /// Returns a reference to the smallest value in the SkipList, if it isn't empty.
    pub fn first(&self) -> Option<&T> {
        // SAFETY: The bottom head link targets the live node holding the smallest value.
        self.head[0].map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Removes all values from the SkipList.
    pub fn clear(&mut self) {
        // The bottom level links every node.
        let mut curr = self.head[0];
        while let Some(node) = curr {
            // SAFETY: Each node is freed exactly once and never revisited; all links into it are
            // discarded when head is reset below.
            let node = unsafe { *Box::from_non_null(node) };
            curr = node.next[0];
        }

        self.head = [None; MAX_LEVEL];
        self.len = 0;
    }
}

impl<T: Ord> SkipList<T> {
    /// For each level, finds the link slot after which a node with the provided value belongs.
    /// The returned pointers stay valid until the list is next modified.
    fn find_preds(&mut self, value: &T) -> [*mut SkipLink<T>; MAX_LEVEL] {
        let mut preds = [ptr::null_mut(); MAX_LEVEL];
        let mut links: *mut SkipLink<T> = self.head.as_mut_ptr();

        for level in (0..MAX_LEVEL).rev() {
            // SAFETY: links always points at the base of a live tower with more than `level`
            // slots, by the same argument as in `get`.
            unsafe {
                loop {
                    match *links.add(level) {
                        Some(node) if (*node.as_ptr()).value < *value => {
                            links = (*node.as_ptr()).next.as_mut_ptr();
                        },
                        _ => break,
                    }
                }
                preds[level] = links.add(level);
            }
        }

        preds
    }

    /// Rolls the height of a new tower: each level beyond the first is reached with
    /// probability 1/2, capped at [`MAX_LEVEL`].
    fn roll_height(&mut self) -> usize {
        let mut height = 1;
        while height < MAX_LEVEL && self.rng.coin_flip() {
            height += 1;
        }
        height
    }
}

impl<T: Ord> Default for SkipList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Drop for SkipList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Ord> Extend<T> for SkipList<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for value in iter.into_iter() {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for SkipList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SkipList::new();
        list.extend(iter);
        list
    }
}

impl<T: Ord> PartialEq for SkipList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Ord> Eq for SkipList<T> {}

impl<T: Ord + Debug> Debug for SkipList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipList")
            .field_with("contents", |f| f.debug_list().entries(self.iter()).finish())
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Ord + Debug> Display for SkipList<T> {
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

// SAFETY: The list owns its nodes outright; sending it moves unique ownership of every T.
unsafe impl<T: Ord + Send> Send for SkipList<T> {}
// SAFETY: Shared access only reads through the links; no interior mutability is exposed.
unsafe impl<T: Ord + Sync> Sync for SkipList<T> {}
