//! A module containing [`BinarySearchTree`] and its iterators.
//!
//! [`BinarySearchTree`] is also re-exported under the parent module.

mod bst;
mod iter;

pub use bst::*;
pub use iter::*;

mod tests;
