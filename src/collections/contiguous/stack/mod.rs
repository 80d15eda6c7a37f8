//! A module containing [`Stack`], a fixed-capacity LIFO collection, and its borrowed iterator.

mod iter;
mod stack;
mod tests;

pub use iter::*;
pub use stack::*;
