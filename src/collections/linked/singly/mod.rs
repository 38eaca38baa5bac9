//! A module containing [`SinglyLinkedList`] and its iterators.
//!
//! [`SinglyLinkedList`] is also re-exported under the parent module.

mod iter;
mod linked_list;

pub use iter::*;
pub use linked_list::*;

mod tests;
