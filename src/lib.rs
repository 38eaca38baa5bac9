//! A library of the classic textbook data structures, written from scratch.
//!
//! # Purpose
//! This crate implements the structures every data-structures course walks through - dynamic
//! arrays, linked lists, balanced trees, hash sets, heaps, tries, graphs and friends - with their
//! invariants actually enforced, not just documented. Writing them by hand is the point: each
//! module is an exercise in pointers, ownership, allocation and the algorithms themselves.
//!
//! # Method
//! Contiguous structures are built on a raw allocation ([`RawBuf`](collections::contiguous)) using
//! `std::alloc` directly; nothing in this crate uses [`Vec`]. Node-based trees use owned
//! `Option<Box<Node>>` branches, while the doubly linked list and skip list use raw [`NonNull`]
//! (std::ptr::NonNull) links where ownership genuinely isn't hierarchical. Every unsafe block
//! carries a `SAFETY:` comment.
//!
//! # Error Handling
//! Accessors that can reasonably fail return [`Option`] ([`Vector::pop`](collections::contiguous::Vector::pop),
//! [`Deque::front`](collections::contiguous::Deque::front), ...). Index-taking mutators panic on
//! out-of-bounds indices the way the standard library's do, with `try_` variants returning a
//! strongly typed error where a caller might want to recover. Errors are plain structs and enums
//! implementing [`Error`](std::error::Error), with derive macros doing the repetitive parts.
#![feature(box_vec_non_null)]
#![feature(extend_one)]
#![feature(extend_one_unchecked)]
#![feature(trusted_len)]
#![feature(debug_closure_helpers)]

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
