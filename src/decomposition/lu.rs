//! Gaussian elimination with partial (row) pivoting.

use num_traits::Float;

use crate::error::MatrixError;
use crate::math::{multiply, Matrix};

/// Factors of `P * A = L * U`.
#[derive(Debug, Clone, PartialEq)]
pub struct LuDecomposition<T = f64> {
    /// Row permutation.
    pub p: Matrix<T>,
    /// Unit lower-triangular factor.
    pub l: Matrix<T>,
    /// Upper-triangular factor.
    pub u: Matrix<T>,
}

impl<T: Float> LuDecomposition<T> {
    /// `L * U`.
    pub fn reconstruct(&self) -> Result<Matrix<T>, MatrixError> {
        multiply(&self.l, &self.u)
    }

    /// `P * a`, which `reconstruct` should match for the matrix that was factored.
    pub fn permuted(&self, a: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        multiply(&self.p, a)
    }
}

/// Factor a square matrix as `P * A = L * U`.
///
/// A pivot that is exactly zero after row selection is reported as
/// [`MatrixError::SingularMatrix`].
pub fn decompose_lu<T: Float>(a: &Matrix<T>) -> Result<LuDecomposition<T>, MatrixError> {
    decompose_lu_with_tolerance(a, T::zero())
}

/// Like [`decompose_lu`], but any pivot with `|pivot| <= tol` counts as singular.
///
/// # Algorithm
///
/// Outer-product elimination column by column. For each pivot column the row
/// with the largest magnitude at or below the diagonal is selected (the first
/// one wins ties) and swapped into place in `U`, in the already computed part
/// of `L`, and in `P`. The rows below are then eliminated. No elimination step
/// follows the last column, so its diagonal entry is not checked.
pub fn decompose_lu_with_tolerance<T: Float>(
    a: &Matrix<T>,
    tol: T,
) -> Result<LuDecomposition<T>, MatrixError> {
    let (rows, cols) = a.shape();
    if rows != cols {
        return Err(MatrixError::NotSquare { rows, cols });
    }
    let n = rows;

    let mut p = Matrix::identity(n);
    let mut l = Matrix::identity(n);
    let mut u = a.clone();

    for i in 0..n.saturating_sub(1) {
        let mut max_row = i;
        for j in (i + 1)..n {
            if u[(j, i)].abs() > u[(max_row, i)].abs() {
                max_row = j;
            }
        }

        if max_row != i {
            log::debug!("LU: swapping rows {} and {} for pivot column {}", i, max_row, i);
            u.swap_rows(i, max_row);
            l.swap_row_range(i, max_row, 0..i);
            p.swap_rows(i, max_row);
        }

        let pivot = u[(i, i)];
        // Also rejects NaN pivots.
        if !(pivot.abs() > tol) {
            return Err(MatrixError::SingularMatrix { pivot: i });
        }
        if pivot.abs() <= T::epsilon() {
            log::warn!("LU: pivot in column {} is near machine epsilon", i);
        }

        for row in (i + 1)..n {
            let factor = u[(row, i)] / pivot;
            if !factor.is_finite() {
                return Err(MatrixError::SingularMatrix { pivot: i });
            }
            l[(row, i)] = factor;
            u[(row, i)] = T::zero();
            for col in (i + 1)..n {
                u[(row, col)] = u[(row, col)] - factor * u[(i, col)];
            }
        }
        log::trace!("LU: eliminated column {}", i);
    }

    Ok(LuDecomposition { p, l, u })
}
