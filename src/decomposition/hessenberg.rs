//! Householder reduction of a square matrix to upper-Hessenberg form.
//!
//! Column `i` is reduced by the reflector `Q = I - 2 v v^T` acting on rows and
//! columns `i + 1 ..`, applied as the similarity transform `H <- Q H Q^T`, so
//! the eigenvalues (and the trace) of the input are preserved. Only `H` is
//! produced; the product of the reflectors is not accumulated.

use num_traits::Float;

use crate::error::MatrixError;
use crate::math::{multiply, Matrix, Vector};

/// Reduce `a` to an upper-Hessenberg matrix similar to it.
///
/// Every entry below the first subdiagonal of the result is exactly zero.
pub fn reduce_to_hessenberg<T: Float>(a: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    let (rows, cols) = a.shape();
    if rows != cols {
        return Err(MatrixError::NotSquare { rows, cols });
    }
    let n = rows;
    let mut h = a.clone();

    for i in 0..n.saturating_sub(1) {
        let x: Vector<T> = ((i + 1)..n).map(|row| h[(row, i)]).collect();
        let v = match householder_vector(&x) {
            Some(v) => v,
            None if x.iter().all(|&value| value == T::zero()) => {
                log::debug!("Hessenberg: column {} already reduced, skipping", i);
                continue;
            }
            None => {
                log::warn!("Hessenberg: column {} has non-finite entries, skipping", i);
                continue;
            }
        };

        let q = embedded_reflector(&v, n);
        h = multiply(&q, &h)?;
        h = multiply(&h, &q.transpose())?;

        // The reflector maps x onto a multiple of e_1; drop the rounding residue.
        for row in (i + 2)..n {
            h[(row, i)] = T::zero();
        }
        log::trace!("Hessenberg: reduced column {}", i);
    }

    Ok(h)
}

/// Unit Householder vector that reflects `x` onto the first axis, or `None`
/// when every component of `x` is zero and there is nothing to reflect.
///
/// `x` is divided by its largest magnitude first, so tiny or huge (but
/// finite) columns are still reflected. The norm is added with the sign of
/// `x[0]` so the first component never suffers cancellation.
fn householder_vector<T: Float>(x: &Vector<T>) -> Option<Vector<T>> {
    if x.iter().all(|&value| value == T::zero()) {
        return None;
    }
    let scale = x.max_abs();
    let mut v: Vector<T> = x.iter().map(|&value| value / scale).collect();
    let norm = v.norm();
    let sign = if v[0] < T::zero() { -T::one() } else { T::one() };
    v[0] = v[0] + sign * norm;
    v.normalized()
}

/// `n x n` identity with `I - 2 v v^T` in its trailing `v.len()` square block.
fn embedded_reflector<T: Float>(v: &Vector<T>, n: usize) -> Matrix<T> {
    let offset = n - v.len();
    let two = T::one() + T::one();
    let vvt = v.outer(v);
    let mut q = Matrix::identity(n);
    for r in 0..v.len() {
        for c in 0..v.len() {
            q[(offset + r, offset + c)] = q[(offset + r, offset + c)] - two * vvt[(r, c)];
        }
    }
    q
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn householder_vector_of_zero_is_none() {
        let x = Vector::from_vec(vec![0.0f64, 0.0]);
        assert!(householder_vector(&x).is_none());
    }

    #[test]
    fn householder_vector_uses_sign_of_first_component() {
        let x = Vector::from_vec(vec![-3.0f64, 4.0]);
        let v = householder_vector(&x).unwrap();
        // v is proportional to [-5 - 3, 4] = [-8, 4]
        assert!(v[0] < 0.0);
        assert!((v[0] / v[1] + 2.0).abs() < 1e-12);
        assert!((v.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn householder_vector_survives_tiny_and_huge_components() {
        let tiny = Vector::from_vec(vec![3e-200f64, 4e-200]);
        let v = householder_vector(&tiny).unwrap();
        assert!((v.norm() - 1.0).abs() < 1e-12);
        assert!((v[0] / v[1] - 2.0).abs() < 1e-12);

        let huge = Vector::from_vec(vec![3e19f32, 4e19]);
        let v = householder_vector(&huge).unwrap();
        assert!((v.norm() - 1.0).abs() < 1e-5);
        assert!((v[0] / v[1] - 2.0).abs() < 1e-5);
    }

    #[test]
    fn embedded_reflector_is_orthogonal_and_leaves_leading_block() {
        let v = Vector::from_vec(vec![0.6f64, 0.8]);
        let q = embedded_reflector(&v, 3);
        assert_eq!(q[(0, 0)], 1.0);
        assert_eq!(q[(0, 1)], 0.0);
        assert_eq!(q[(1, 0)], 0.0);
        let qtq = multiply(&q.transpose(), &q).unwrap();
        assert!(qtq.approx_eq(&Matrix::identity(3), 1e-12));
    }
}
