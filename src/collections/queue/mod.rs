//! A module containing [`Queue`] and associated types.
//!
//! The only other included types are for owned and borrowed iteration, from the front of the queue
//! to its rear.

mod iter;
mod queue;

pub use iter::*;
pub use queue::*;
