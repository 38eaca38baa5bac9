//! A module containing [`HashSet`] and its iterators.
//!
//! [`HashSet`] is also re-exported under the parent module.

pub mod set;

#[doc(inline)]
pub use set::HashSet;
