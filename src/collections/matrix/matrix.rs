use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::collections::contiguous::Vector;
use crate::util::error::{
    CapacityOverflow, DimensionMismatch, IndexOutOfBounds, LengthMismatch, MatrixError,
};
use crate::util::result::ResultExtension;

/// A dense, row-major matrix of [`f32`] values.
///
/// The element at `(row, col)` is stored at `row * n_cols + col` in a single [`Vector`], so each
/// row is contiguous in memory. Element-wise operations require both dimensions of their operands
/// to match, while the matrix product only requires the columns of the left hand side to match the
/// rows of the right hand side.
///
/// Each fallible operation comes in two forms: a `try_*` method that returns an error, and either
/// an operator or an un-prefixed method that panics instead.
///
/// # Examples
/// ```
/// # use basic_structures::collections::matrix::Matrix;
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let b = Matrix::eye(2);
///
/// assert_eq!(&a * &b, a);
/// assert_eq!(a[(1, 0)], 3.0);
/// assert_eq!(a.transpose()[(1, 0)], 2.0);
/// ```
#[derive(Default, Clone, PartialEq)]
pub struct Matrix {
    pub(crate) data: Vector<f32>,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl Matrix {
    /// Creates a matrix of the given shape with every element set to `0.0`.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows, or the allocation would exceed [`isize::MAX`] bytes.
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            data: Vector::repeat(0.0, element_count(rows, cols)),
            rows,
            cols,
        }
    }

    /// Creates a single row matrix (`1 x values.len()`) from `values`.
    pub fn from_row(values: &[f32]) -> Matrix {
        Matrix {
            data: Vector::from_fn(values.len(), |i| values[i]),
            rows: 1,
            cols: values.len(),
        }
    }

    /// Creates a matrix from a list of rows. The number of columns is taken from the first row.
    ///
    /// # Errors
    /// Returns a [`MatrixError::DimensionMismatch`] if any row differs in length from the first.
    ///
    /// # Examples
    /// ```
    /// # use basic_structures::collections::matrix::Matrix;
    /// let mat = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    /// assert_eq!((mat.n_rows(), mat.n_cols()), (2, 3));
    ///
    /// assert!(Matrix::from_rows(&[vec![1.0], vec![2.0, 3.0]]).unwrap_err().is_dimension_mismatch());
    /// ```
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Result<Matrix, MatrixError> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut data = Vector::with_cap(element_count(rows.len(), cols));

        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(DimensionMismatch {
                    lhs: (1, cols),
                    rhs: (1, row.len()),
                }
                .into());
            }
            data.extend_from_slice(row);
        }

        Ok(Matrix {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Creates a matrix by calling `f` with the row-major index of each element, in order.
    pub fn from_fn<F: FnMut(usize) -> f32>(rows: usize, cols: usize, f: F) -> Matrix {
        Matrix {
            data: Vector::from_fn(element_count(rows, cols), f),
            rows,
            cols,
        }
    }

    /// Creates a matrix by copying `values`, which are interpreted in row-major order.
    ///
    /// # Errors
    /// Returns a [`MatrixError::LengthMismatch`] if `values` doesn't contain exactly
    /// `rows * cols` elements.
    pub fn from_slice(values: &[f32], rows: usize, cols: usize) -> Result<Matrix, MatrixError> {
        let expected = element_count(rows, cols);
        if values.len() != expected {
            return Err(LengthMismatch {
                expected,
                actual: values.len(),
            }
            .into());
        }

        Ok(Matrix::from_fn(rows, cols, |i| values[i]))
    }

    /// Creates an identity matrix of size `n x n`.
    pub fn eye(n: usize) -> Matrix {
        let mut mat = Matrix::zeros(n, n);
        for i in 0..n {
            mat[(i, i)] = 1.0;
        }
        mat
    }

    /// Creates a matrix of the given shape where the only non-zero entry is a `1.0` at
    /// `(row, col)`.
    ///
    /// # Panics
    /// Panics if `(row, col)` lies outside of the matrix.
    pub fn unit(rows: usize, cols: usize, row: usize, col: usize) -> Matrix {
        Matrix::unit_scaled(rows, cols, row, col, 1.0)
    }

    /// Creates a matrix like [`Matrix::unit`], with the single entry set to `alpha` instead.
    ///
    /// # Panics
    /// Panics if `(row, col)` lies outside of the matrix.
    pub fn unit_scaled(rows: usize, cols: usize, row: usize, col: usize, alpha: f32) -> Matrix {
        let mut mat = Matrix::zeros(rows, cols);
        mat[(row, col)] = alpha;
        mat
    }

    pub const fn n_rows(&self) -> usize {
        self.rows
    }

    pub const fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns the shape of the matrix as `(rows, cols)`.
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the elements of the matrix as a single row-major slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Returns a reference to the element at `(row, col)`, or an error if either coordinate is
    /// out of bounds.
    pub fn try_at(&self, row: usize, col: usize) -> Result<&f32, IndexOutOfBounds> {
        let index = self.flat_index(row, col)?;
        Ok(&self.data[index])
    }

    pub fn try_at_mut(&mut self, row: usize, col: usize) -> Result<&mut f32, IndexOutOfBounds> {
        let index = self.flat_index(row, col)?;
        Ok(&mut self.data[index])
    }

    /// Returns a new matrix whose rows are the columns of self.
    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);
        for row in 0..self.rows {
            for col in 0..self.cols {
                res.data[col * self.rows + row] = self.data[row * self.cols + col];
            }
        }
        res
    }

    /// Replaces every value in `row` with the result of `f(col, value)`.
    ///
    /// # Panics
    /// Panics if `row` is out of bounds.
    pub fn row_op<F: FnMut(usize, f32) -> f32>(&mut self, row: usize, mut f: F) {
        self.check_row(row).throw();
        for col in 0..self.cols {
            let value = &mut self.data[row * self.cols + col];
            *value = f(col, *value);
        }
    }

    /// Replaces every value in `col` with the result of `f(row, value)`.
    ///
    /// # Panics
    /// Panics if `col` is out of bounds.
    pub fn col_op<F: FnMut(usize, f32) -> f32>(&mut self, col: usize, mut f: F) {
        self.check_col(col).throw();
        for row in 0..self.rows {
            let value = &mut self.data[row * self.cols + col];
            *value = f(row, *value);
        }
    }

    /// Replaces every value in the matrix with the result of `f(value)`, in place.
    pub fn map<F: FnMut(f32) -> f32>(&mut self, mut f: F) {
        for value in self.data.iter_mut() {
            *value = f(*value);
        }
    }

    /// Returns a `rows x 1` matrix holding the sum of each row.
    pub fn sum_rows(&self) -> Matrix {
        Matrix::from_fn(self.rows, 1, |row| self.row_slice(row).iter().sum())
    }

    /// Returns a `1 x cols` matrix holding the sum of each column.
    pub fn sum_cols(&self) -> Matrix {
        Matrix::from_fn(1, self.cols, |col| {
            (0..self.rows).map(|row| self.data[row * self.cols + col]).sum()
        })
    }

    /// Copies `row` into a new `1 x cols` matrix.
    ///
    /// # Panics
    /// Panics if `row` is out of bounds.
    pub fn split_row(&self, row: usize) -> Matrix {
        self.check_row(row).throw();
        Matrix::from_row(self.row_slice(row))
    }

    /// Copies `row` into a new [`Vector`].
    ///
    /// # Panics
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> Vector<f32> {
        self.check_row(row).throw();
        let values = self.row_slice(row);
        Vector::from_fn(values.len(), |i| values[i])
    }

    /// Copies `col` into a new [`Vector`].
    ///
    /// # Panics
    /// Panics if `col` is out of bounds.
    pub fn col(&self, col: usize) -> Vector<f32> {
        self.check_col(col).throw();
        Vector::from_fn(self.rows, |row| self.data[row * self.cols + col])
    }

    /// Takes the dot product of each row of the matrix with `values`, returning the results as a
    /// [`Vector`] with one element per row.
    ///
    /// # Panics
    /// Panics if the length of `values` doesn't equal the number of columns.
    ///
    /// # Examples
    /// ```
    /// # use basic_structures::collections::matrix::Matrix;
    /// let mat = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(&*mat.dot(&[1.0, 1.0]), &[3.0, 7.0]);
    /// ```
    pub fn dot(&self, values: &[f32]) -> Vector<f32> {
        self.try_dot(values).throw()
    }

    /// Like [`Matrix::dot`], but returns an error rather than panicking on a length mismatch.
    pub fn try_dot(&self, values: &[f32]) -> Result<Vector<f32>, LengthMismatch> {
        if values.len() != self.cols {
            return Err(LengthMismatch {
                expected: self.cols,
                actual: values.len(),
            });
        }

        Ok(Vector::from_fn(self.rows, |row| {
            self.row_slice(row)
                .iter()
                .zip(values)
                .map(|(lhs, rhs)| lhs * rhs)
                .sum::<f32>()
        }))
    }
}

impl Matrix {
    pub(crate) fn check_dims(&self, other: &Matrix) -> Result<(), DimensionMismatch> {
        if self.shape() == other.shape() {
            Ok(())
        } else {
            Err(DimensionMismatch {
                lhs: self.shape(),
                rhs: other.shape(),
            })
        }
    }

    pub(crate) fn row_slice(&self, row: usize) -> &[f32] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    fn check_row(&self, row: usize) -> Result<(), IndexOutOfBounds> {
        if row < self.rows {
            Ok(())
        } else {
            Err(IndexOutOfBounds::unsigned(row, self.rows))
        }
    }

    fn check_col(&self, col: usize) -> Result<(), IndexOutOfBounds> {
        if col < self.cols {
            Ok(())
        } else {
            Err(IndexOutOfBounds::unsigned(col, self.cols))
        }
    }

    fn flat_index(&self, row: usize, col: usize) -> Result<usize, IndexOutOfBounds> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(row * self.cols + col)
    }
}

fn element_count(rows: usize, cols: usize) -> usize {
    rows.checked_mul(cols).ok_or(CapacityOverflow).throw()
}

impl Index<(usize, usize)> for Matrix {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        self.try_at(row, col).throw()
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        self.try_at_mut(row, col).throw()
    }
}

impl Debug for Matrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("data", &self.as_slice())
            .finish()
    }
}

impl Display for Matrix {
    /// Formats each row as `[a, b, c]` followed by a newline. A matrix with no rows or columns is
    /// formatted as `[]`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.rows == 0 || self.cols == 0 {
            return write!(f, "[]");
        }

        for row in 0..self.rows {
            write!(f, "[")?;
            for (col, value) in self.row_slice(row).iter().enumerate() {
                if col > 0 {
                    write!(f, ", ")?;
                }
                Display::fmt(value, f)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
