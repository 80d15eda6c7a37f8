//! A module containing [`HashSet`] and associated types.
//!
//! Some of these types provide owned and borrowed iteration over a set's values while others are
//! lazy iterators over the result of set operations on two HashSets.
//!
//! As a note, there is no mutable iterator over the values of a set because mutating them in place
//! would change their hashes without moving them in the table.
//!
//! [`HashSet`] is also re-exported under the parent module.

mod hash_set;
mod iter;
mod tests;

pub use hash_set::*;
pub use iter::*;
