//! A module containing [`AvlTree`] and its iterators.
//!
//! [`AvlTree`] is also re-exported under the parent module.

mod avl;
mod iter;

pub use avl::*;
pub use iter::*;

mod tests;
