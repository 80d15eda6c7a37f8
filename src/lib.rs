//! A collection of textbook data structures: a singly linked list, a FIFO queue, a hash-backed
//! set, a checked dynamic array and a fixed-capacity stack.
//!
//! # Purpose
//! This crate is a learning exercise. Every structure supports the canonical operations for its
//! kind (insert, delete, traverse, reverse, set algebra, push/pop) with no concurrency,
//! persistence or other outside concerns.
//!
//! # Error Handling
//! Most operations can't fail, and those on an empty collection return [`Option`]s. Where an
//! operation can fail for another reason (an out-of-bounds index, a full stack) there are two
//! forms: a `try_` method which returns a [`Result`] with a small, strongly typed error struct, and
//! a plain method which either panics with that error's message or, for the stack, logs a warning
//! and does nothing.
//!
//! # Logging
//! Diagnostics are emitted through the [`log`] facade. This crate never installs a logger, so
//! nothing is printed unless the application sets one up.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]
#![forbid(unsafe_code)]

#[cfg(feature = "collections")]
pub mod collections;

#[cfg(feature = "collections")]
pub(crate) mod util;
