//! A module containing [`Vector`], the crate's dynamic array, and its owned iterator.
//!
//! [`Vector`] is also re-exported under the parent module.

mod iter;
mod vector;

pub use iter::*;
pub use vector::*;

mod tests;
