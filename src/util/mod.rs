#![warn(missing_docs)]

#[cfg(any(feature = "contiguous", feature = "linked"))]
pub mod alloc;
#[cfg(feature = "contiguous")]
pub mod capture;
#[cfg(feature = "contiguous")]
pub mod error;
pub mod fmt;
pub mod panic;
#[cfg(feature = "contiguous")]
pub mod result;
