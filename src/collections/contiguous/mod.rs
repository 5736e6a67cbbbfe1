//! Contiguous collection types. Namely [`Vector`], a growable array with a capacity policy that
//! both grows and shrinks, backed by a raw, uninitialized allocation.
#![warn(missing_docs)]

pub(crate) mod raw_buf;
pub mod vector;

#[doc(inline)]
pub use vector::{ScanFrom, Vector};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds, RangeOutOfBounds};
