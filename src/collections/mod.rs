//! Textbook linear and associative collection types.
//!
//! # Purpose
//! Each type here is a small, self-contained take on a classic data structure and its canonical
//! operations, written to be read as much as to be used.
//!
//! # Method
//! Where a type is a thin layer over a standard buffer or table, it says so and leans on it rather
//! than re-deriving the storage. The exception is [`LinkedList`](linked::LinkedList), whose node
//! rewiring (and block reversal in particular) is the point of the exercise.
//!
//! Each module can be switched off with its cargo feature (`linked`, `queue`, `hash` and
//! `contiguous`), all of which are enabled by `collections-all`.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "queue")]
pub mod queue;
