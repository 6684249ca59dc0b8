use std::fmt;
use std::ops::{Index, IndexMut, Range};

use num_traits::{Float, One, Zero};

use crate::error::MatrixError;
use crate::io::render::{render, RenderOptions};
use crate::math::vector::Vector;

/// Dense row-major matrix.
///
/// The buffer holds exactly `rows * cols` elements and is exclusively owned,
/// so `clone()` is a deep copy and moving a `Matrix` never copies elements.
/// Both dimensions are at least one for the whole lifetime of a value.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T = f64> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, MatrixError> {
        let (rows, cols) = shape;
        if rows == 0 || cols == 0 || data.len() != rows * cols {
            return Err(MatrixError::InvalidShape {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix from a slice of equally long rows.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, MatrixError>
    where
        T: Clone,
    {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            if row.len() != ncols {
                return Err(MatrixError::InvalidShape {
                    rows: nrows,
                    cols: ncols,
                    len: data.len() + row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_shape_vec((nrows, ncols), data)
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn column(&self, col: usize) -> Vector<T>
    where
        T: Clone,
    {
        assert!(col < self.cols, "column index out of bounds");
        (0..self.rows).map(|row| self[(row, col)].clone()).collect()
    }

    /// Checked element read.
    pub fn get(&self, row: usize, col: usize) -> Result<T, MatrixError>
    where
        T: Copy,
    {
        if !self.in_bounds(row, col) {
            return Err(self.out_of_range(row, col));
        }
        Ok(self.data[self.offset(row, col)])
    }

    /// Checked element write.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        if !self.in_bounds(row, col) {
            return Err(self.out_of_range(row, col));
        }
        let offset = self.offset(row, col);
        self.data[offset] = value;
        Ok(())
    }

    fn out_of_range(&self, row: usize, col: usize) -> MatrixError {
        MatrixError::IndexOutOfRange {
            index: (row, col),
            shape: self.shape(),
        }
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.swap_row_range(a, b, 0..self.cols);
    }

    /// Swap the entries of rows `a` and `b` that fall in the column range `cols`.
    pub fn swap_row_range(&mut self, a: usize, b: usize, cols: Range<usize>) {
        assert!(
            a < self.rows && b < self.rows && cols.end <= self.cols,
            "row swap out of bounds"
        );
        if a == b {
            return;
        }
        for col in cols {
            let (ia, ib) = (self.offset(a, col), self.offset(b, col));
            self.data.swap(ia, ib);
        }
    }

    pub fn transpose(&self) -> Matrix<T>
    where
        T: Clone,
    {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self[(row, col)].clone());
            }
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero,
{
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "matrix dimensions must be non-zero");
        Matrix {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero + One,
{
    /// Allocate a `rows x cols` matrix, zero-filled, with ones on the main
    /// diagonal when `identity` is set.
    pub fn new(rows: usize, cols: usize, identity: bool) -> Self {
        let mut m = Self::zeros(rows, cols);
        if identity {
            for i in 0..rows.min(cols) {
                m[(i, i)] = T::one();
            }
        }
        m
    }

    pub fn identity(n: usize) -> Self {
        Self::new(n, n, true)
    }
}

impl<T: Float> Matrix<T> {
    /// `self * other`, see [`multiply`].
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        multiply(self, other)
    }

    pub fn trace(&self) -> Result<T, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok((0..self.rows).fold(T::zero(), |acc, i| acc + self[(i, i)]))
    }

    /// Largest element-wise absolute difference, `None` when shapes differ.
    pub fn max_abs_diff(&self, other: &Matrix<T>) -> Option<T> {
        if self.shape() != other.shape() {
            return None;
        }
        Some(
            self.data
                .iter()
                .zip(other.data.iter())
                .fold(T::zero(), |acc, (&a, &b)| acc.max((a - b).abs())),
        )
    }

    pub fn approx_eq(&self, other: &Matrix<T>, tol: T) -> bool {
        self.max_abs_diff(other).map_or(false, |d| d <= tol)
    }
}

/// Matrix product `a * b`.
///
/// Each entry is accumulated over the shared dimension in index order, so the
/// result is reproducible bit for bit. Neither operand is modified.
pub fn multiply<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    if a.cols != b.rows {
        return Err(MatrixError::ShapeMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    let mut product = Matrix::zeros(a.rows, b.cols);
    for i in 0..a.rows {
        for j in 0..b.cols {
            let mut sum = T::zero();
            for k in 0..a.cols {
                sum = sum + a[(i, k)] * b[(k, j)];
            }
            product[(i, j)] = sum;
        }
    }
    Ok(product)
}

pub fn transpose<T: Clone>(a: &Matrix<T>) -> Matrix<T> {
    a.transpose()
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(self.in_bounds(index.0, index.1), "matrix index out of bounds");
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(self.in_bounds(index.0, index.1), "matrix index out of bounds");
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, &RenderOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_row_range_only_touches_requested_columns() {
        let mut m = Matrix::from_shape_vec((2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
        m.swap_row_range(0, 1, 0..2);
        assert_eq!(m.to_vec(), vec![4, 5, 3, 1, 2, 6]);
    }

    #[test]
    fn offset_is_row_major() {
        let m = Matrix::from_shape_vec((2, 3), vec![0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(m.offset(1, 2), 5);
        assert_eq!(m[(1, 0)], 3);
    }
}
