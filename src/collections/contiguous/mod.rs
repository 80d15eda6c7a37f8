//! Contiguous collection types, backed by a single buffer: the growable [`Slice`] and the
//! fixed-capacity [`Stack`].
//!
//! Both hand out their items as plain Rust slices where possible ([`Slice`] implements
//! [`Deref<Target = [T]>`](std::ops::Deref)), which saves rewriting the read-only slice API.

pub mod slice;
pub mod stack;

#[doc(inline)]
pub use slice::Slice;
#[doc(inline)]
pub use stack::Stack;
