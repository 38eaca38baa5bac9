//! A module containing [`DisjointSetUnion`].

mod dsu;

pub use dsu::*;
