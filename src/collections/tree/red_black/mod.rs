//! A module containing [`RedBlackTree`] and its iterators.
//!
//! [`RedBlackTree`] is also re-exported under the parent module.

mod iter;
mod red_black;

pub use iter::*;
pub use red_black::*;

mod tests;
