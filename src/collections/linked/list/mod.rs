//! A module containing [`LinkedList`] and associated types.
//!
//! The other included types provide owned, borrowed and mutable iteration from the front of a list
//! to its back. The block reversal methods live in their own file but are inherent methods of
//! [`LinkedList`].

mod iter;
mod linked_list;
mod node;
mod reverse;

pub use iter::*;
pub use linked_list::*;
pub(crate) use node::*;
