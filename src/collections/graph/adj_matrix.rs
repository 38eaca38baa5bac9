use std::fmt::{self, Debug, Formatter};

use crate::collections::contiguous::{Queue, Stack, Vector};
use crate::util::error::VertexOutOfBounds;

/// An undirected, unweighted graph over a fixed set of vertices, stored as a flat `n * n`
/// boolean matrix.
///
/// The same surface as [`AdjListGraph`](super::AdjListGraph) with the opposite trade-off: edge
/// queries and updates are constant time, but the storage is quadratic in the vertex count and
/// enumerating a vertex's neighbours always scans a whole row. Symmetry is maintained by writing
/// both `(a, b)` and `(b, a)` cells.
///
/// # Time Complexity
///
/// | Method | Complexity |
/// |-|-|
/// | `add_edge` | `O(1)` |
/// | `remove_edge` | `O(1)` |
/// | `has_edge` | `O(1)` |
/// | `neighbors` | `O(v)` |
/// | `bfs` / `dfs` | `O(v^2)` |
pub struct AdjMatrixGraph {
    cells: Vector<bool>,
    num_vertices: usize,
}

impl AdjMatrixGraph {
    /// Creates a new AdjMatrixGraph with `num_vertices` vertices and no edges.
    pub fn new(num_vertices: usize) -> AdjMatrixGraph {
        let mut cells = Vector::with_cap(num_vertices * num_vertices);
        cells.extend((0..num_vertices * num_vertices).map(|_| false));
        AdjMatrixGraph { cells, num_vertices }
    }

    /// Returns the number of vertices the graph was created with.
    pub const fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Adds the edge between `a` and `b`, returning false if it was already present.
    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<bool, VertexOutOfBounds> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;

        let added = !self.cells[self.cell_of(a, b)];
        let (ab, ba) = (self.cell_of(a, b), self.cell_of(b, a));
        self.cells[ab] = true;
        self.cells[ba] = true;
        Ok(added)
    }

    /// Removes the edge between `a` and `b`, returning false if it wasn't present.
    pub fn remove_edge(&mut self, a: usize, b: usize) -> Result<bool, VertexOutOfBounds> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;

        let removed = self.cells[self.cell_of(a, b)];
        let (ab, ba) = (self.cell_of(a, b), self.cell_of(b, a));
        self.cells[ab] = false;
        self.cells[ba] = false;
        Ok(removed)
    }

    /// Returns true if the edge between `a` and `b` is present.
    pub fn has_edge(&self, a: usize, b: usize) -> Result<bool, VertexOutOfBounds> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;
        Ok(self.cells[self.cell_of(a, b)])
    }

    /// Iterates over `vertex`'s neighbours in ascending order, by scanning its matrix row.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::graph::AdjMatrixGraph;
    /// let mut graph = AdjMatrixGraph::new(4);
    /// graph.add_edge(1, 3).unwrap();
    /// graph.add_edge(1, 0).unwrap();
    /// let neighbors: Vec<_> = graph.neighbors(1).unwrap().collect();
    /// assert_eq!(neighbors, [0, 3]);
    /// ```
    pub fn neighbors(
        &self,
        vertex: usize,
    ) -> Result<impl Iterator<Item = usize> + '_, VertexOutOfBounds> {
        self.check_vertex(vertex)?;
        let row = &self.cells[vertex * self.num_vertices..(vertex + 1) * self.num_vertices];
        Ok(row
            .iter()
            .enumerate()
            .filter_map(|(other, linked)| linked.then_some(other)))
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
            for neighbor in self.row_neighbors(vertex) {
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
            // Reversed so the lowest-numbered neighbour is explored first.
            for neighbor in self.row_neighbors(vertex).rev() {
                if !visited[neighbor] {
                    pending.push(neighbor);
                }
            }
        }
        Ok(())
    }

    const fn cell_of(&self, a: usize, b: usize) -> usize {
        a * self.num_vertices + b
    }

    /// The in-bounds counterpart of [`Self::neighbors`], for the traversals.
    fn row_neighbors(&self, vertex: usize) -> impl DoubleEndedIterator<Item = usize> + '_ {
        let row = &self.cells[vertex * self.num_vertices..(vertex + 1) * self.num_vertices];
        row.iter()
            .enumerate()
            .filter_map(|(other, linked)| linked.then_some(other))
    }

    fn fresh_marks(&self) -> Vector<bool> {
        let mut marks = Vector::with_cap(self.num_vertices);
        marks.extend((0..self.num_vertices).map(|_| false));
        marks
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), VertexOutOfBounds> {
        if vertex < self.num_vertices {
            Ok(())
        } else {
            Err(VertexOutOfBounds {
                vertex,
                num_vertices: self.num_vertices,
            })
        }
    }
}

impl Debug for AdjMatrixGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdjMatrixGraph")
            .field_with("rows", |f| {
                f.debug_list()
                    .entries(
                        (0..self.num_vertices)
                            .map(|v| &self.cells[v * self.num_vertices..(v + 1) * self.num_vertices]),
                    )
                    .finish()
            })
            .field("num_vertices", &self.num_vertices)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_query_edges() {
        let mut graph = AdjMatrixGraph::new(4);
        assert_eq!(graph.add_edge(0, 3), Ok(true));
        assert_eq!(graph.add_edge(3, 0), Ok(false));
        assert_eq!(graph.has_edge(0, 3), Ok(true));
        assert_eq!(graph.has_edge(3, 0), Ok(true));
        assert_eq!(graph.has_edge(1, 2), Ok(false));
    }

    #[test]
    fn test_remove_edge_is_symmetric() {
        let mut graph = AdjMatrixGraph::new(3);
        graph.add_edge(1, 2).unwrap();
        assert_eq!(graph.remove_edge(2, 1), Ok(true));
        assert_eq!(graph.has_edge(1, 2), Ok(false));
        assert_eq!(graph.remove_edge(1, 2), Ok(false));
    }

    #[test]
    fn test_self_loop() {
        let mut graph = AdjMatrixGraph::new(2);
        assert_eq!(graph.add_edge(0, 0), Ok(true));
        assert_eq!(graph.has_edge(0, 0), Ok(true));
        let neighbors: Vec<_> = graph.neighbors(0).unwrap().collect();
        assert_eq!(neighbors, [0]);
    }

    #[test]
    fn test_out_of_bounds_vertices() {
        let mut graph = AdjMatrixGraph::new(1);
        assert!(graph.add_edge(0, 1).is_err());
        assert!(graph.has_edge(1, 0).is_err());
        assert!(graph.neighbors(1).is_err());
        assert!(graph.dfs(1, |_| {}).is_err());
    }

    #[test]
    fn test_neighbors_scan_row_in_order() {
        let mut graph = AdjMatrixGraph::new(5);
        graph.add_edge(2, 4).unwrap();
        graph.add_edge(2, 0).unwrap();
        graph.add_edge(2, 3).unwrap();
        let neighbors: Vec<_> = graph.neighbors(2).unwrap().collect();
        assert_eq!(neighbors, [0, 3, 4]);
    }

    #[test]
    fn test_bfs_visits_in_breadth_order() {
        let mut graph = AdjMatrixGraph::new(6);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 2).unwrap();
        graph.add_edge(1, 3).unwrap();
        graph.add_edge(2, 4).unwrap();

        let mut order = Vec::new();
        graph.bfs(0, |v| order.push(v)).unwrap();
        assert_eq!(order, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_dfs_explores_lowest_neighbor_first() {
        let mut graph = AdjMatrixGraph::new(5);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 2).unwrap();
        graph.add_edge(1, 3).unwrap();
        graph.add_edge(2, 4).unwrap();

        let mut order = Vec::new();
        graph.dfs(0, |v| order.push(v)).unwrap();
        assert_eq!(order, [0, 1, 3, 2, 4]);
    }

    #[test]
    fn test_traversal_skips_unreachable_vertices() {
        let mut graph = AdjMatrixGraph::new(4);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(2, 3).unwrap();

        let mut seen = Vec::new();
        graph.bfs(2, |v| seen.push(v)).unwrap();
        assert_eq!(seen, [2, 3]);
    }
}
