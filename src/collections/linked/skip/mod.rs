//! A module containing [`SkipList`] and its iterators.
//!
//! [`SkipList`] is also re-exported under the parent module.

mod iter;
mod skip_list;

pub use iter::*;
pub use skip_list::*;

mod tests;
