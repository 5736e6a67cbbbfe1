use std::ops::{Add, Div, Mul, MulAssign, Sub, SubAssign};

use super::Matrix;
use crate::util::error::DimensionMismatch;
use crate::util::result::ResultExtension;

impl Matrix {
    /// Computes the matrix product `self * rhs`, which has the shape `self.rows x rhs.cols`.
    ///
    /// # Errors
    /// Returns a [`DimensionMismatch`] unless the columns of self match the rows of `rhs`.
    pub fn try_mul(&self, rhs: &Matrix) -> Result<Matrix, DimensionMismatch> {
        if self.cols != rhs.rows {
            return Err(DimensionMismatch {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                res.data[i * rhs.cols + j] = (0..self.cols)
                    .map(|k| self.data[i * self.cols + k] * rhs.data[k * rhs.cols + j])
                    .sum();
            }
        }
        Ok(res)
    }

    /// Adds `rhs` to self element-wise.
    pub fn try_add(&self, rhs: &Matrix) -> Result<Matrix, DimensionMismatch> {
        self.zip_with(rhs, |lhs, rhs| lhs + rhs)
    }

    /// Subtracts `rhs` from self element-wise.
    pub fn try_sub(&self, rhs: &Matrix) -> Result<Matrix, DimensionMismatch> {
        self.zip_with(rhs, |lhs, rhs| lhs - rhs)
    }

    /// Subtracts `rhs` from self element-wise, in place. Self is left unchanged on an error.
    pub fn try_sub_assign(&mut self, rhs: &Matrix) -> Result<(), DimensionMismatch> {
        self.check_dims(rhs)?;
        for (lhs, rhs) in self.data.iter_mut().zip(rhs.data.iter()) {
            *lhs -= rhs;
        }
        Ok(())
    }

    /// Computes the element-wise (Hadamard) product of self and `rhs`.
    pub fn try_hadamard(&self, rhs: &Matrix) -> Result<Matrix, DimensionMismatch> {
        self.zip_with(rhs, |lhs, rhs| lhs * rhs)
    }

    /// Panicking version of [`Matrix::try_hadamard`].
    ///
    /// # Panics
    /// Panics if the shapes of self and `rhs` differ.
    pub fn hadamard(&self, rhs: &Matrix) -> Matrix {
        self.try_hadamard(rhs).throw()
    }

    /// Divides self by `rhs` element-wise. Division by zero follows the usual [`f32`] rules.
    pub fn try_div(&self, rhs: &Matrix) -> Result<Matrix, DimensionMismatch> {
        self.zip_with(rhs, |lhs, rhs| lhs / rhs)
    }

    /// Multiplies every element by `factor`, in place.
    pub fn scale(&mut self, factor: f32) {
        self.map(|value| value * factor);
    }

    fn zip_with<F: Fn(f32, f32) -> f32>(
        &self,
        rhs: &Matrix,
        f: F,
    ) -> Result<Matrix, DimensionMismatch> {
        self.check_dims(rhs)?;
        Ok(Matrix::from_fn(self.rows, self.cols, |i| f(self.data[i], rhs.data[i])))
    }
}

/// Implements a binary operator for every combination of owned and borrowed matrices, by
/// forwarding to a fallible method and panicking on an error.
macro_rules! impl_binary_op {
    ($op:ident, $method:ident, $try_method:ident) => {
        impl $op<&Matrix> for &Matrix {
            type Output = Matrix;

            #[track_caller]
            fn $method(self, rhs: &Matrix) -> Matrix {
                self.$try_method(rhs).throw()
            }
        }

        impl $op<Matrix> for &Matrix {
            type Output = Matrix;

            #[track_caller]
            fn $method(self, rhs: Matrix) -> Matrix {
                self.$try_method(&rhs).throw()
            }
        }

        impl $op<&Matrix> for Matrix {
            type Output = Matrix;

            #[track_caller]
            fn $method(self, rhs: &Matrix) -> Matrix {
                self.$try_method(rhs).throw()
            }
        }

        impl $op<Matrix> for Matrix {
            type Output = Matrix;

            #[track_caller]
            fn $method(self, rhs: Matrix) -> Matrix {
                self.$try_method(&rhs).throw()
            }
        }
    };
}

impl_binary_op!(Mul, mul, try_mul);
impl_binary_op!(Add, add, try_add);
impl_binary_op!(Sub, sub, try_sub);
impl_binary_op!(Div, div, try_div);

impl SubAssign<&Matrix> for Matrix {
    #[track_caller]
    fn sub_assign(&mut self, rhs: &Matrix) {
        self.try_sub_assign(rhs).throw();
    }
}

impl SubAssign for Matrix {
    #[track_caller]
    fn sub_assign(&mut self, rhs: Matrix) {
        self.try_sub_assign(&rhs).throw();
    }
}

impl MulAssign<f32> for Matrix {
    fn mul_assign(&mut self, rhs: f32) {
        self.scale(rhs);
    }
}

impl Mul<f32> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f32) -> Matrix {
        let mut res = self.clone();
        res.scale(rhs);
        res
    }
}
