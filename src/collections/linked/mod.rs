//! Linked collection types. Currently this is only the singly linked [`LinkedList`].

pub mod list;

#[doc(inline)]
pub use list::LinkedList;
