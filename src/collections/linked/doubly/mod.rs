//! A module containing [`DoublyLinkedList`] and its iterators.
//!
//! [`DoublyLinkedList`] is also re-exported under the parent module.

mod iter;
mod linked_list;
mod node;

pub use iter::*;
pub use linked_list::*;
pub(crate) use node::*;

mod tests;
