//! A module containing [`Slice`], a checked wrapper around a growable buffer.
//!
//! Owned iteration is provided by [`vec::IntoIter`](std::vec::IntoIter), and borrowed iteration by
//! the iterators from [`std::slice`].

mod iter;
mod slice;
mod tests;

pub use slice::*;
