use num_traits::Float;

use crate::error::MatrixError;
use crate::math::Matrix;

/// Upper-triangular Cholesky factor `R` with `R^T * R = A`.
///
/// `a` must be symmetric positive definite. Symmetry is not checked: only the
/// upper triangle of `a` is read. A diagonal radicand that is not strictly
/// positive is reported as [`MatrixError::NotPositiveDefinite`]. Entries below
/// the diagonal of the returned factor are zero.
pub fn decompose_cholesky<T: Float>(a: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    let (rows, cols) = a.shape();
    if rows != cols {
        return Err(MatrixError::NotSquare { rows, cols });
    }
    let n = rows;
    let mut r = a.clone();

    for i in 0..n {
        let radicand = r[(i, i)];
        // Also rejects NaN.
        if !(radicand > T::zero()) {
            return Err(MatrixError::NotPositiveDefinite { index: i });
        }
        let diag = radicand.sqrt();
        r[(i, i)] = diag;

        for j in (i + 1)..n {
            r[(i, j)] = r[(i, j)] / diag;
        }

        // Right-looking update of the trailing upper triangle.
        for k in (i + 1)..n {
            for l in k..n {
                r[(k, l)] = r[(k, l)] - r[(i, l)] * r[(i, k)];
            }
        }
    }

    for i in 1..n {
        for j in 0..i {
            r[(i, j)] = T::zero();
        }
    }

    Ok(r)
}
