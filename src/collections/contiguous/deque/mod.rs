//! A module containing [`Deque`] and its iterators.
//!
//! [`Deque`] is also re-exported under the parent module.

mod deque;
mod iter;

pub use deque::*;
pub use iter::*;

mod tests;
