//! A module containing [`Rope`] and its iterators.
//!
//! [`Rope`] is also re-exported under the parent module.

mod iter;
mod rope;

pub use iter::*;
pub use rope::*;
