//! A module containing all of the crate's data structures, grouped by representation.

pub mod contiguous;
pub mod graph;
pub mod hash;
pub mod linked;
pub mod tree;
pub mod union_find;
