//! A module containing [`HashSet`] and its iterators, providing owned and borrowed iteration over
//! the values in a set.
//!
//! As a note, there is no mutable iterator because mutating the values of a HashSet in place would
//! cause a logic error.

mod hash_set;
mod iter;

pub use hash_set::*;
pub use iter::*;

mod tests;
