use std::fmt::{self, Debug, Formatter};

use crate::collections::contiguous::Vector;

/// A partition of the ids `0..len` into disjoint sets, supporting near-constant-time merging
/// and membership queries.
///
/// Each set is a tree of ids stored in a flat parent array; a set is named by its root. `find`
/// follows parent links to the root and then compresses the walked path in a second pass, so
/// repeated queries flatten the trees. `union` always grafts the smaller tree under the larger
/// root, keeping the trees shallow. Together the two tricks make every operation amortised
/// near-constant.
///
/// Ids are plain indices, so out-of-range ids panic like any other indexing. The number of ids
/// is fixed at construction; only the partition changes.
///
/// # Time Complexity
///
/// | Method | Complexity |
/// |-|-|
/// | `find` | `O(α(n))` amortised |
/// | `union` | `O(α(n))` amortised |
/// | `same_set` | `O(α(n))` amortised |
/// | `set_size` | `O(α(n))` amortised |
pub struct DisjointSetUnion {
    /// `parents[id] == id` exactly when id is a root.
    parents: Vector<usize>,
    /// Only meaningful at roots, where it holds the whole set's size.
    sizes: Vector<usize>,
    num_sets: usize,
}

impl DisjointSetUnion {
    /// Creates a new DisjointSetUnion of `len` singleton sets.
    pub fn new(len: usize) -> DisjointSetUnion {
        let mut parents = Vector::with_cap(len);
        parents.extend(0..len);
        let mut sizes = Vector::with_cap(len);
        sizes.extend((0..len).map(|_| 1));
        DisjointSetUnion {
            parents,
            sizes,
            num_sets: len,
        }
    }

    /// Returns the number of ids in the partition.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns true if the partition contains no ids at all.
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Returns the number of disjoint sets.
    pub const fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Returns the root id of the set containing `id`, compressing the path behind it.
    ///
    /// # Panics
    /// Panics if `id >= len`.
    pub fn find(&mut self, id: usize) -> usize {
        let mut root = id;
        while self.parents[root] != root {
            root = self.parents[root];
        }

        // Second pass: point everything on the walked path straight at the root.
        let mut current = id;
        while current != root {
            let parent = self.parents[current];
            self.parents[current] = root;
            current = parent;
        }
        root
    }

    /// Merges the sets containing `a` and `b`, returning false if they were already one set.
    ///
    /// The smaller set's root is attached below the larger set's.
    ///
    /// # Panics
    /// Panics if either id is `>= len`.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::union_find::DisjointSetUnion;
    /// let mut dsu = DisjointSetUnion::new(4);
    /// assert!(dsu.union(0, 1));
    /// assert!(dsu.union(2, 3));
    /// assert!(!dsu.union(1, 0));
    /// assert_eq!(dsu.num_sets(), 2);
    /// ```
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let mut root_a = self.find(a);
        let mut root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        if self.sizes[root_a] < self.sizes[root_b] {
            (root_a, root_b) = (root_b, root_a);
        }
        self.parents[root_b] = root_a;
        self.sizes[root_a] += self.sizes[root_b];
        self.num_sets -= 1;
        true
    }

    /// Returns true if `a` and `b` are in the same set.
    ///
    /// # Panics
    /// Panics if either id is `>= len`.
    pub fn same_set(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Returns the size of the set containing `id`.
    ///
    /// # Panics
    /// Panics if `id >= len`.
    pub fn set_size(&mut self, id: usize) -> usize {
        let root = self.find(id);
        self.sizes[root]
    }
}

impl Debug for DisjointSetUnion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisjointSetUnion")
            .field("parents", &&*self.parents)
            .field("num_sets", &self.num_sets)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_as_singletons() {
        let mut dsu = DisjointSetUnion::new(5);
        assert_eq!(dsu.len(), 5);
        assert_eq!(dsu.num_sets(), 5);
        for id in 0..5 {
            assert_eq!(dsu.find(id), id);
            assert_eq!(dsu.set_size(id), 1);
        }
    }

    #[test]
    fn test_union_merges_and_counts() {
        let mut dsu = DisjointSetUnion::new(6);
        assert!(dsu.union(0, 1));
        assert!(dsu.union(1, 2));
        assert!(!dsu.union(0, 2));
        assert_eq!(dsu.num_sets(), 4);
        assert_eq!(dsu.set_size(1), 3);
        assert_eq!(dsu.set_size(5), 1);
    }

    #[test]
    fn test_same_set_is_transitive() {
        let mut dsu = DisjointSetUnion::new(8);
        dsu.union(0, 1);
        dsu.union(2, 3);
        dsu.union(1, 2);

        assert!(dsu.same_set(0, 3));
        assert!(dsu.same_set(3, 0));
        assert!(!dsu.same_set(0, 4));
    }

    #[test]
    fn test_union_by_size_attaches_smaller_tree() {
        let mut dsu = DisjointSetUnion::new(6);
        dsu.union(0, 1);
        dsu.union(0, 2);
        dsu.union(0, 3);

        // Joining the singleton 4 must keep the large set's root.
        let large_root = dsu.find(0);
        dsu.union(4, 0);
        assert_eq!(dsu.find(4), large_root);
    }

    #[test]
    fn test_path_compression_flattens() {
        let mut dsu = DisjointSetUnion::new(16);
        // Build a chain by always unioning adjacent ids.
        for id in 0..15 {
            dsu.union(id, id + 1);
        }
        let root = dsu.find(15);
        // After a find, the walked ids point straight at the root.
        assert_eq!(dsu.parents[15], root);
        assert_eq!(dsu.find(0), root);
        assert_eq!(dsu.parents[0], root);
    }

    #[test]
    fn test_everything_merged_into_one_set() {
        let mut dsu = DisjointSetUnion::new(50);
        for id in 1..50 {
            dsu.union(0, id);
        }
        assert_eq!(dsu.num_sets(), 1);
        assert_eq!(dsu.set_size(33), 50);
        assert!(dsu.same_set(17, 42));
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_id_panics() {
        let mut dsu = DisjointSetUnion::new(3);
        dsu.find(3);
    }

    #[test]
    fn test_empty_partition() {
        let dsu = DisjointSetUnion::new(0);
        assert!(dsu.is_empty());
        assert_eq!(dsu.num_sets(), 0);
    }
}
