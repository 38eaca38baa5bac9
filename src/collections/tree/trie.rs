use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::contiguous::Vector;
use crate::util::option::OptionExtension;

/// Keys are walked from the most significant bit down, one tree level per bit.
const KEY_BITS: u32 = u32::BITS;

#[derive(Default)]
pub(crate) struct TrieNode {
    /// Children indexed by the next key bit: 0 on the left, 1 on the right.
    pub children: [Option<Box<TrieNode>>; 2],
}

/// A set of [`u32`] keys stored bit by bit in a fixed-depth binary trie.
///
/// Each key traces a 32-link path from the root, branching left on 0 bits and right on 1 bits,
/// most significant bit first. A key is present exactly when its whole path exists; removal prunes
/// the path's nodes as they become childless, so the trie never holds dangling partial paths.
/// Shared prefixes share nodes, and because 0 sorts before 1 at every level, a depth-first walk
/// yields the keys in ascending order for free.
///
/// Every operation touches at most [`u32::BITS`] nodes, making the costs independent of how many
/// keys are stored.
///
/// # Time Complexity
///
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(1)` |
/// | `contains` | `O(1)` |
/// | `remove` | `O(1)` |
/// | `first` / `last` | `O(1)` |
/// | `max_xor_with` | `O(1)` |
/// | `keys` | `O(n)` |
pub struct BitwiseTrie {
    pub(crate) root: TrieNode,
    pub(crate) len: usize,
}

impl BitwiseTrie {
    /// Creates a new BitwiseTrie with no keys.
    pub const fn new() -> BitwiseTrie {
        BitwiseTrie {
            root: TrieNode {
                children: [None, None],
            },
            len: 0,
        }
    }

    /// Returns the number of keys in the trie.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the trie holds no keys.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds a key to the trie, building out its bit path. Returns true if it was added and false
    /// if it was already present.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::tree::BitwiseTrie;
    /// let mut trie = BitwiseTrie::new();
    /// assert!(trie.insert(0b1010));
    /// assert!(!trie.insert(0b1010));
    /// assert!(trie.contains(0b1010));
    /// assert!(!trie.contains(0b1011));
    /// ```
    pub fn insert(&mut self, key: u32) -> bool {
        let mut node = &mut self.root;
        let mut created = false;

        for depth in 0..KEY_BITS {
            let bit = Self::bit_at(key, depth);
            let child = &mut node.children[bit];
            if child.is_none() {
                *child = Some(Box::default());
                created = true;
            }
            // SAFETY: The child was just created if it was missing.
            node = unsafe { child.as_mut().unreachable() };
        }

        if created {
            self.len += 1;
        }
        created
    }

    /// Returns true if the trie contains the provided key.
    pub fn contains(&self, key: u32) -> bool {
        let mut node = &self.root;
        for depth in 0..KEY_BITS {
            match &node.children[Self::bit_at(key, depth)] {
                Some(child) => node = child,
                None => return false,
            }
        }
        true
    }

    /// Removes a key from the trie, pruning every node of its path that no longer leads anywhere.
    /// Returns true if the key was present.
    pub fn remove(&mut self, key: u32) -> bool {
        if !self.contains(key) {
            return false;
        }

        /// Unlinks the path below `node` and reports whether `node` itself became childless.
        fn prune(node: &mut TrieNode, key: u32, depth: u32) -> bool {
            if depth < KEY_BITS {
                let bit = BitwiseTrie::bit_at(key, depth);
                // SAFETY: The whole path exists; membership was checked before pruning started.
                let child = unsafe { node.children[bit].as_mut().unreachable() };
                if prune(child, key, depth + 1) {
                    node.children[bit] = None;
                }
            }
            node.children[0].is_none() && node.children[1].is_none()
        }

        prune(&mut self.root, key, 0);
        self.len -= 1;
        true
    }

    /// Returns the smallest key in the trie, if it isn't empty.
    pub fn first(&self) -> Option<u32> {
        self.edge_key(0)
    }

    /// Returns the largest key in the trie, if it isn't empty.
    pub fn last(&self) -> Option<u32> {
        self.edge_key(1)
    }

    /// Returns the stored key whose XOR with `query` is largest, or None if the trie is empty.
    ///
    /// At each level the walk prefers the child whose bit differs from the query's, which sets
    /// the highest possible bit of the XOR first.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::tree::BitwiseTrie;
    /// let trie: BitwiseTrie = [0b0011, 0b1100, 0b1010].into_iter().collect();
    /// assert_eq!(trie.max_xor_with(0b0011), Some(0b1100));
    /// ```
    pub fn max_xor_with(&self, query: u32) -> Option<u32> {
        if self.is_empty() {
            return None;
        }

        let mut node = &self.root;
        let mut key = 0_u32;
        for depth in 0..KEY_BITS {
            let wanted = 1 - Self::bit_at(query, depth);
            let bit = match &node.children[wanted] {
                Some(_) => wanted,
                None => 1 - wanted,
            };
            // SAFETY: Paths are never partial, so each node on one has at least one child.
            node = unsafe { node.children[bit].as_ref().unreachable() };
            key = (key << 1) | bit as u32;
        }
        Some(key)
    }

    /// Collects every key in ascending order.
    pub fn keys(&self) -> Vector<u32> {
        fn walk(node: &TrieNode, prefix: u32, depth: u32, out: &mut Vector<u32>) {
            if depth == KEY_BITS {
                out.push(prefix);
                return;
            }
            // Visiting the 0 branch first yields ascending order.
            for bit in 0..2_u32 {
                if let Some(child) = &node.children[bit as usize] {
                    walk(child, (prefix << 1) | bit, depth + 1, out);
                }
            }
        }

        let mut keys = Vector::with_cap(self.len);
        walk(&self.root, 0, 0, &mut keys);
        keys
    }

    /// Removes all keys from the trie.
    pub fn clear(&mut self) {
        // Dropping the boxes recursively is fine: the depth is fixed at KEY_BITS.
        self.root.children = [None, None];
        self.len = 0;
    }
}

impl BitwiseTrie {
    const fn bit_at(key: u32, depth: u32) -> usize {
        ((key >> (KEY_BITS - 1 - depth)) & 1) as usize
    }

    /// Follows the `preferred` bit wherever possible, which traces the minimum (0) or
    /// maximum (1) key.
    fn edge_key(&self, preferred: usize) -> Option<u32> {
        if self.is_empty() {
            return None;
        }

        let mut node = &self.root;
        let mut key = 0_u32;
        for _ in 0..KEY_BITS {
            let bit = match &node.children[preferred] {
                Some(_) => preferred,
                None => 1 - preferred,
            };
            // SAFETY: Paths are never partial, so each node on one has at least one child.
            node = unsafe { node.children[bit].as_ref().unreachable() };
            key = (key << 1) | bit as u32;
        }
        Some(key)
    }
}

impl Default for BitwiseTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<u32> for BitwiseTrie {
    fn extend<A: IntoIterator<Item = u32>>(&mut self, iter: A) {
        for key in iter.into_iter() {
            self.insert(key);
        }
    }
}

impl FromIterator<u32> for BitwiseTrie {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut trie = BitwiseTrie::new();
        trie.extend(iter);
        trie
    }
}

impl PartialEq for BitwiseTrie {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.keys() == other.keys()
    }
}

impl Eq for BitwiseTrie {}

impl Debug for BitwiseTrie {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitwiseTrie")
            .field_with("keys", |f| f.debug_set().entries(self.keys().iter()).finish())
            .field("len", &self.len)
            .finish()
    }
}

impl Display for BitwiseTrie {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.keys().iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_contains_remove() {
        let mut trie = BitwiseTrie::new();
        for key in [0, 1, 2, u32::MAX, 0x8000_0000, 12345] {
            assert!(trie.insert(key));
        }
        assert_eq!(trie.len(), 6);

        assert!(trie.contains(0));
        assert!(trie.contains(u32::MAX));
        assert!(!trie.contains(3));

        assert!(trie.remove(2));
        assert!(!trie.remove(2));
        assert!(!trie.contains(2));
        assert_eq!(trie.len(), 5);
    }

    #[test]
    fn test_shared_prefixes_survive_removal() {
        let mut trie = BitwiseTrie::new();
        // These keys differ only in their lowest bits, sharing almost the whole path.
        trie.insert(0b1100);
        trie.insert(0b1101);
        trie.insert(0b1110);

        assert!(trie.remove(0b1101));
        assert!(trie.contains(0b1100));
        assert!(trie.contains(0b1110));
        assert!(!trie.contains(0b1101));
    }

    #[test]
    fn test_keys_are_ascending() {
        let trie: BitwiseTrie = [500, 2, u32::MAX, 0, 77, 501].into_iter().collect();
        assert_eq!(&*trie.keys(), &[0, 2, 77, 500, 501, u32::MAX]);
    }

    #[test]
    fn test_first_and_last() {
        let mut trie = BitwiseTrie::new();
        assert_eq!(trie.first(), None);
        assert_eq!(trie.last(), None);

        trie.extend([42, 7, 1000]);
        assert_eq!(trie.first(), Some(7));
        assert_eq!(trie.last(), Some(1000));

        trie.remove(7);
        assert_eq!(trie.first(), Some(42));
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let mut trie = BitwiseTrie::new();
        assert!(trie.insert(9));
        assert!(!trie.insert(9));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_zero_and_max_are_distinct_paths() {
        let mut trie = BitwiseTrie::new();
        trie.insert(0);
        trie.insert(u32::MAX);
        assert_eq!(trie.len(), 2);
        assert!(trie.remove(0));
        assert!(trie.contains(u32::MAX));
    }

    #[test]
    fn test_max_xor_matches_brute_force() {
        let keys = [0, 7, 19, 255, 1024, 0xDEAD_BEEF, u32::MAX, 4096, 77];
        let trie: BitwiseTrie = keys.into_iter().collect();

        for query in [0, 1, 64, 0xFFFF_0000, u32::MAX, 12345] {
            let best = keys.into_iter().max_by_key(|key| key ^ query);
            let found = trie.max_xor_with(query);
            assert_eq!(
                found.map(|key| key ^ query),
                best.map(|key| key ^ query),
                "wrong xor maximum for query {query}"
            );
        }
    }

    #[test]
    fn test_max_xor_on_empty_trie() {
        let trie = BitwiseTrie::new();
        assert_eq!(trie.max_xor_with(42), None);
    }

    #[test]
    fn test_clear_then_reuse() {
        let mut trie: BitwiseTrie = (0..100).collect();
        trie.clear();
        assert!(trie.is_empty());
        assert!(!trie.contains(5));
        assert!(trie.insert(5));
    }
}
