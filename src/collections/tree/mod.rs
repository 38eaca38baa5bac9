//! A module containing the tree-shaped structures: the ordered sets [`BinarySearchTree`],
//! [`AvlTree`] and [`RedBlackTree`], the integer set [`BitwiseTrie`], the sequence type [`Rope`]
//! and the range-query structures [`FenwickTree`] and [`SegmentTree`].

pub mod avl;
pub mod bst;
pub mod fenwick;
pub mod red_black;
pub mod rope;
pub mod segment;
pub mod trie;

#[doc(inline)]
pub use avl::AvlTree;
#[doc(inline)]
pub use bst::BinarySearchTree;
#[doc(inline)]
pub use fenwick::FenwickTree;
#[doc(inline)]
pub use red_black::RedBlackTree;
#[doc(inline)]
pub use rope::Rope;
#[doc(inline)]
pub use segment::SegmentTree;
#[doc(inline)]
pub use trie::BitwiseTrie;
