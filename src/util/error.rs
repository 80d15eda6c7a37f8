use std::error;
use std::fmt::{self, Debug, Formatter};

use derive_more::{Display, Error};

/// An index was used that lies outside of the initialized elements of a collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The length of the collection at the time.
    pub len: usize,
}

/// A value was pushed onto a stack with no free slots. The rejected value is handed back to the
/// caller rather than dropped.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct StackFull<T>(pub T);

impl<T> StackFull<T> {
    /// Returns the value that couldn't be pushed.
    pub fn into_inner(self) -> T {
        self.0
    }
}

// Manual impls so that the error doesn't require T: Debug to be displayed.
impl<T> Debug for StackFull<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StackFull").finish_non_exhaustive()
    }
}

impl<T> fmt::Display for StackFull<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Stack overflow, no free slots remain!")
    }
}

impl<T> error::Error for StackFull<T> {}
