use std::fmt::{self, Debug, Formatter};

use crate::collections::contiguous::{Queue, Stack, Vector};
use crate::util::option::OptionExtension;

pub use crate::util::error::VertexOutOfBounds;

/// An undirected, unweighted graph over a fixed set of vertices, stored as per-vertex
/// neighbour lists.
///
/// Vertices are the integers `0..num_vertices`, fixed at construction; only edges change. Each
/// edge is recorded in both endpoints' lists so the relation stays symmetric, except for
/// self-loops, which are recorded once. Duplicate edges are rejected rather than stored.
///
/// Operations taking vertex ids return [`VertexOutOfBounds`] rather than panicking, since ids
/// typically come from input data rather than indexing arithmetic.
///
/// # Time Complexity
///
/// `d` is the degree of the vertices involved.
///
/// | Method | Complexity |
/// |-|-|
/// | `add_edge` | `O(d)` |
/// | `remove_edge` | `O(d)` |
/// | `has_edge` | `O(d)` |
/// | `neighbors` | `O(1)` |
/// | `bfs` / `dfs` | `O(v + e)` |
pub struct AdjListGraph {
    adjacency: Vector<Vector<usize>>,
}

impl AdjListGraph {
    /// Creates a new AdjListGraph with `num_vertices` vertices and no edges.
    pub fn new(num_vertices: usize) -> AdjListGraph {
        let mut adjacency = Vector::with_cap(num_vertices);
        adjacency.extend((0..num_vertices).map(|_| Vector::new()));
        AdjListGraph { adjacency }
    }

    /// Returns the number of vertices the graph was created with.
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Adds the edge between `a` and `b`, returning false if it was already present.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::graph::AdjListGraph;
    /// let mut graph = AdjListGraph::new(3);
    /// assert_eq!(graph.add_edge(0, 2), Ok(true));
    /// assert_eq!(graph.add_edge(2, 0), Ok(false));
    /// assert_eq!(graph.has_edge(0, 2), Ok(true));
    /// assert!(graph.add_edge(0, 3).is_err());
    /// ```
    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<bool, VertexOutOfBounds> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;
        if self.adjacency[a].contains(&b) {
            return Ok(false);
        }

        self.adjacency[a].push(b);
        if a != b {
            self.adjacency[b].push(a);
        }
        Ok(true)
    }

    /// Removes the edge between `a` and `b`, returning false if it wasn't present.
    pub fn remove_edge(&mut self, a: usize, b: usize) -> Result<bool, VertexOutOfBounds> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;
        let Some(position) = self.adjacency[a].iter().position(|v| *v == b) else {
            return Ok(false);
        };

        self.adjacency[a].remove(position);
        if a != b {
            let mirrored = self.adjacency[b].iter().position(|v| *v == a);
            // SAFETY: Edges are stored symmetrically, so the mirror entry always exists.
            let mirrored = unsafe { mirrored.unreachable() };
            self.adjacency[b].remove(mirrored);
        }
        Ok(true)
    }

    /// Returns true if the edge between `a` and `b` is present.
    pub fn has_edge(&self, a: usize, b: usize) -> Result<bool, VertexOutOfBounds> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;
        Ok(self.adjacency[a].contains(&b))
    }

    /// Returns `vertex`'s neighbours in the order their edges were added.
    pub fn neighbors(&self, vertex: usize) -> Result<&[usize], VertexOutOfBounds> {
        self.check_vertex(vertex)?;
        Ok(&self.adjacency[vertex])
    }

    /// Visits every vertex reachable from `start` in breadth-first order, nearest first, calling
    /// `visitor` exactly once per vertex.
    pub fn bfs(
        &self,
        start: usize,
        mut visitor: impl FnMut(usize),
    ) -> Result<(), VertexOutOfBounds> {
        self.check_vertex(start)?;

        let mut enqueued = self.fresh_marks();
        let mut frontier = Queue::new();
        frontier.enqueue(start);
        enqueued[start] = true;

        while let Some(vertex) = frontier.dequeue() {
            visitor(vertex);
            for neighbor in self.adjacency[vertex].iter().copied() {
                if !enqueued[neighbor] {
                    enqueued[neighbor] = true;
                    frontier.enqueue(neighbor);
                }
            }
        }
        Ok(())
    }

    /// Visits every vertex reachable from `start` in depth-first order, calling `visitor`
    /// exactly once per vertex.
    pub fn dfs(
        &self,
        start: usize,
        mut visitor: impl FnMut(usize),
    ) -> Result<(), VertexOutOfBounds> {
        self.check_vertex(start)?;

        let mut visited = self.fresh_marks();
        let mut pending = Stack::new();
        pending.push(start);

        while let Some(vertex) = pending.pop() {
            if visited[vertex] {
                continue;
            }
            visited[vertex] = true;
            visitor(vertex);
            // Reversed so the first-added neighbour is explored first.
            for neighbor in self.adjacency[vertex].iter().rev().copied() {
                if !visited[neighbor] {
                    pending.push(neighbor);
                }
            }
        }
        Ok(())
    }

    fn fresh_marks(&self) -> Vector<bool> {
        let mut marks = Vector::with_cap(self.num_vertices());
        marks.extend((0..self.num_vertices()).map(|_| false));
        marks
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), VertexOutOfBounds> {
        if vertex < self.num_vertices() {
            Ok(())
        } else {
            Err(VertexOutOfBounds {
                vertex,
                num_vertices: self.num_vertices(),
            })
        }
    }
}

impl Debug for AdjListGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdjListGraph")
            .field_with("adjacency", |f| {
                f.debug_map()
                    .entries(self.adjacency.iter().enumerate().map(|(v, ns)| (v, &**ns)))
                    .finish()
            })
            .field("num_vertices", &self.num_vertices())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_query_edges() {
        let mut graph = AdjListGraph::new(5);
        assert_eq!(graph.add_edge(0, 1), Ok(true));
        assert_eq!(graph.add_edge(1, 2), Ok(true));
        assert_eq!(graph.add_edge(0, 1), Ok(false));
        assert_eq!(graph.add_edge(1, 0), Ok(false));

        assert_eq!(graph.has_edge(1, 0), Ok(true));
        assert_eq!(graph.has_edge(0, 2), Ok(false));
        assert_eq!(graph.neighbors(1), Ok(&[0, 2][..]));
    }

    #[test]
    fn test_remove_edge_is_symmetric() {
        let mut graph = AdjListGraph::new(3);
        graph.add_edge(0, 1).unwrap();
        assert_eq!(graph.remove_edge(1, 0), Ok(true));
        assert_eq!(graph.has_edge(0, 1), Ok(false));
        assert_eq!(graph.neighbors(0), Ok(&[][..]));
        assert_eq!(graph.remove_edge(0, 1), Ok(false));
    }

    #[test]
    fn test_self_loop_stored_once() {
        let mut graph = AdjListGraph::new(2);
        assert_eq!(graph.add_edge(1, 1), Ok(true));
        assert_eq!(graph.add_edge(1, 1), Ok(false));
        assert_eq!(graph.neighbors(1), Ok(&[1][..]));
        assert_eq!(graph.remove_edge(1, 1), Ok(true));
        assert_eq!(graph.neighbors(1), Ok(&[][..]));
    }

    #[test]
    fn test_out_of_bounds_vertices() {
        let mut graph = AdjListGraph::new(2);
        let expected = VertexOutOfBounds {
            vertex: 2,
            num_vertices: 2,
        };
        assert_eq!(graph.add_edge(0, 2), Err(expected));
        assert!(graph.has_edge(2, 0).is_err());
        assert!(graph.neighbors(2).is_err());
        assert!(graph.bfs(2, |_| {}).is_err());
    }

    #[test]
    fn test_bfs_visits_in_breadth_order() {
        // 0 - 1 - 3
        //  \- 2 - 4      5 is isolated.
        let mut graph = AdjListGraph::new(6);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 2).unwrap();
        graph.add_edge(1, 3).unwrap();
        graph.add_edge(2, 4).unwrap();

        let mut order = Vec::new();
        graph.bfs(0, |v| order.push(v)).unwrap();
        assert_eq!(order, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_dfs_visits_each_reachable_vertex_once() {
        let mut graph = AdjListGraph::new(6);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 2).unwrap();
        graph.add_edge(1, 3).unwrap();
        graph.add_edge(2, 4).unwrap();
        graph.add_edge(3, 4).unwrap();

        let mut order = Vec::new();
        graph.dfs(0, |v| order.push(v)).unwrap();

        // The first-added branch is explored to its end before backtracking.
        assert_eq!(order, [0, 1, 3, 4, 2]);
        assert!(!order.contains(&5));
    }

    #[test]
    fn test_traversal_skips_unreachable_vertices() {
        let mut graph = AdjListGraph::new(4);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(2, 3).unwrap();

        let mut seen = Vec::new();
        graph.bfs(0, |v| seen.push(v)).unwrap();
        assert_eq!(seen, [0, 1]);

        seen.clear();
        graph.dfs(2, |v| seen.push(v)).unwrap();
        assert_eq!(seen, [2, 3]);
    }

    #[test]
    fn test_cycle_terminates() {
        let mut graph = AdjListGraph::new(3);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(2, 0).unwrap();

        let mut count = 0;
        graph.bfs(0, |_| count += 1).unwrap();
        assert_eq!(count, 3);
    }
}
