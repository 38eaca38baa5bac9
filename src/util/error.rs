use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was used on a collection which doesn't contain enough elements for it to be valid.
#[derive(Debug, PartialEq, Eq, Display, Error)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    /// The index the caller asked for.
    pub index: usize,
    /// The collection's length at the time.
    pub len: usize,
}

/// A capacity calculation exceeded the maximum size of an allocation.
#[derive(Debug, PartialEq, Eq, Display, Error)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// A vertex id was passed to a graph which was created with fewer vertices.
#[derive(Debug, PartialEq, Eq, Display, Error)]
#[display("Vertex {vertex} out of bounds for graph with {num_vertices} vertices!")]
pub struct VertexOutOfBounds {
    /// The vertex id the caller asked for.
    pub vertex: usize,
    /// The number of vertices the graph was created with.
    pub num_vertices: usize,
}

/// Everything that can go wrong while manipulating an indexed collection.
#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum IndexOrCapOverflow {
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`CapacityOverflow`].
    CapacityOverflow(CapacityOverflow),
}
