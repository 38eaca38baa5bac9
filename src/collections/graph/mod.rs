//! A module containing the undirected graph representations [`AdjListGraph`] and
//! [`AdjMatrixGraph`].
//!
//! Both store a fixed set of vertices numbered `0..num_vertices` and an unweighted, symmetric
//! edge relation over them, differing only in the storage trade-off: adjacency lists are compact
//! for sparse graphs, the matrix answers `has_edge` in constant time.

pub mod adj_list;
pub mod adj_matrix;

#[doc(inline)]
pub use adj_list::AdjListGraph;
#[doc(inline)]
pub use adj_matrix::AdjMatrixGraph;
