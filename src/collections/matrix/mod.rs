//! A dense matrix of [`f32`] values, stored in row-major order in a
//! [`Vector`](crate::collections::contiguous::Vector).

mod matrix;
mod ops;

pub use matrix::*;
#[doc(inline)]
pub use crate::util::error::{DimensionMismatch, IndexOutOfBounds, LengthMismatch, MatrixError};
