//! A small library of foundational generic data structures.
//!
//! # Purpose
//! This crate exists for learning and general-purpose reuse rather than production-scale
//! performance. Writing (and reading) these structures is the best way I know to properly
//! understand node ownership, traversal order and iterator design, so the node-based types are
//! built from their own nodes rather than borrowed from [`std`].
//!
//! # Method
//! The crate splits into two tiers. The node-based structures and the graph
//! ([`SinglyLinkedList`](collections::linked::SinglyLinkedList),
//! [`BinarySearchTree`](collections::binary_tree::BinarySearchTree),
//! [`Graph`](collections::graph::Graph)) own their nodes explicitly and implement their
//! traversals as lazy iterators. The rest ([`DynamicArray`](collections::contiguous::DynamicArray),
//! [`Stack`](collections::contiguous::Stack), [`Queue`](collections::circular::Queue),
//! [`Deque`](collections::circular::Deque), [`MinHeap`](collections::heap::MinHeap)) are thin,
//! bounds-checked adapters over [`std`]'s growable sequence primitives. There is no point in
//! rewriting a ring buffer to learn what a queue is.
//!
//! # Error Handling
//! Fallible operations come in pairs: a `try_` method returning a strongly typed [`Result`], and
//! a panicking twin for callers that don't want to handle an error every time they pop from a
//! stack they just pushed to. The error types are plain structs implementing
//! [`Error`](std::error::Error), dispatched statically. Failed operations never mutate the
//! structure and never return a sentinel value.
//!
//! # Dependencies
//! This crate depends on a derive macro crate for one of its error types because it removes the
//! need for some very repetitive programming. Everything else is `std`.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
