//! A module containing collections which store their elements in one contiguous allocation:
//! [`Vector`], [`Stack`], [`Deque`], [`Queue`] and [`BinaryHeap`].

pub mod deque;
pub mod heap;
pub mod queue;
mod raw;
pub mod stack;
pub mod vector;

#[doc(inline)]
pub use deque::Deque;
#[doc(inline)]
pub use heap::BinaryHeap;
#[doc(inline)]
pub use queue::Queue;
pub(crate) use raw::RawBuf;
#[doc(inline)]
pub use stack::Stack;
#[doc(inline)]
pub use vector::Vector;
