use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};

/// An index, possibly counted from the back of a collection, didn't refer to a live element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The index as requested. Negative values were counted from the back of the collection.
    pub index: isize,
    /// The length of the collection at the time of the request.
    pub len: usize,
}

impl IndexOutOfBounds {
    /// Creates an error for an unsigned index, saturating at [`isize::MAX`] for indices that can't
    /// be represented as an [`isize`].
    pub fn unsigned(index: usize, len: usize) -> IndexOutOfBounds {
        IndexOutOfBounds {
            index: isize::try_from(index).unwrap_or(isize::MAX),
            len,
        }
    }
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A range was empty, reversed or extended past the end of the collection it was applied to.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Range {start}..{end} out of bounds for collection with {len} elements!")]
pub struct RangeOutOfBounds {
    /// The inclusive start of the range.
    pub start: usize,
    /// The exclusive end of the range.
    pub end: usize,
    /// The length of the collection that the range was applied to.
    pub len: usize,
}

/// A capacity calculation would exceed the maximum size of an allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// The shapes of two matrices are incompatible for the requested operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Dimension mismatch between {}x{} and {}x{} matrices!", lhs.0, lhs.1, rhs.0, rhs.1)]
pub struct DimensionMismatch {
    /// The `(rows, cols)` of the left hand side.
    pub lhs: (usize, usize),
    /// The `(rows, cols)` of the right hand side.
    pub rhs: (usize, usize),
}

/// A flat buffer didn't contain exactly the number of elements required by a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Expected {expected} elements but found {actual}!")]
pub struct LengthMismatch {
    /// The number of elements required.
    pub expected: usize,
    /// The number of elements provided.
    pub actual: usize,
}

/// Any of the errors produced while building or combining matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum MatrixError {
    /// See [`DimensionMismatch`].
    DimensionMismatch(DimensionMismatch),
    /// See [`LengthMismatch`].
    LengthMismatch(LengthMismatch),
}
