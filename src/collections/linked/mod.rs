//! A module containing the linked collection types [`SinglyLinkedList`], [`DoublyLinkedList`] and
//! [`SkipList`].
//!
//! As a general note, modern computer architecture isn't kind to linked structures, because
//! traversals consist primarily of cache misses. The contiguous collections should be preferred
//! for most applications unless the `O(1)` end operations (or the SkipList's ordered `O(log n)`
//! lookups) are being heavily utilized.

pub mod doubly;
pub mod singly;
pub mod skip;

#[doc(inline)]
pub use doubly::DoublyLinkedList;
#[doc(inline)]
pub use singly::SinglyLinkedList;
#[doc(inline)]
pub use skip::SkipList;
