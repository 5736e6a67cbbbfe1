//! This crate is my collection of basic data structures and algorithms, written from scratch to
//! learn how they actually work.
//!
//! # Purpose
//! This crate is a learning project, with no expectation for it to be used in production. The
//! centerpiece is [`Vector`](collections::contiguous::Vector), a growable array which also gives
//! memory back: it grows by a factor of 1.5 and halves its capacity once it becomes sparse enough.
//! Around it sit a few smaller structures and algorithms:
//! - [`SinglyLinkedList`](collections::linked::SinglyLinkedList), a list with a tracked tail.
//! - [`Pair`](collections::pair::Pair), two values with an "assigned" flag.
//! - [`Matrix`](collections::matrix::Matrix), a dense row-major `f32` matrix.
//! - [`binary_search`](algorithms::search::binary_search), depth first search over adjacency
//!   matrices and a few numerical integrals in [`algorithms`].
//!
//! # Method
//! The collections manage their own memory through raw allocations (for contiguous storage) and
//! boxed nodes (for linked storage). [`Vec`] is never used as backing storage, only in tests to
//! check behaviour against a known-good model.
//!
//! # Error Handling
//! Most fallible operations come in pairs: a `try_*` method returning a strongly typed error, and a
//! method without the prefix which panics with the same error instead. Errors are plain structs (or
//! enums of them) implementing [`Error`](std::error::Error), so they can be matched on without any
//! dynamic dispatch. Capacity overflows always panic, since handling them on every push would be
//! very unergonomic.
//!
//! # Logging
//! Reallocations and other notable internal events are reported through [`tracing`] at the `TRACE`
//! level. Nothing is printed unless the application installs a subscriber.
//!
//! # Features
//! Each collection and algorithm sits behind its own cargo feature, all of which are enabled by
//! default. [`Matrix`](collections::matrix::Matrix) and the graph algorithms depend on
//! `contiguous`, since they are built on top of [`Vector`](collections::contiguous::Vector).
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "algorithms")]
pub mod algorithms;
#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
