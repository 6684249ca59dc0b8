use std::error::Error;
use std::fmt;

/// Errors raised by matrix construction, access, multiplication and the factorizations.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Inner dimensions of a product do not agree.
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// A square-only operation was given a rectangular matrix.
    NotSquare { rows: usize, cols: usize },
    /// Zero (or sub-tolerance) pivot met during LU elimination.
    SingularMatrix { pivot: usize },
    /// Non-positive radicand met on the Cholesky diagonal.
    NotPositiveDefinite { index: usize },
    IndexOutOfRange {
        index: (usize, usize),
        shape: (usize, usize),
    },
    /// Buffer length or row lengths do not describe a `rows x cols` matrix.
    InvalidShape { rows: usize, cols: usize, len: usize },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::ShapeMismatch { left, right } => write!(
                f,
                "cannot multiply a {}x{} matrix by a {}x{} matrix",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::NotSquare { rows, cols } => {
                write!(f, "matrix must be square, got {}x{}", rows, cols)
            }
            MatrixError::SingularMatrix { pivot } => {
                write!(f, "matrix is singular: zero pivot in column {}", pivot)
            }
            MatrixError::NotPositiveDefinite { index } => write!(
                f,
                "matrix is not positive definite: non-positive diagonal at index {}",
                index
            ),
            MatrixError::IndexOutOfRange { index, shape } => write!(
                f,
                "index ({}, {}) out of range for {}x{} matrix",
                index.0, index.1, shape.0, shape.1
            ),
            MatrixError::InvalidShape { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
        }
    }
}

impl Error for MatrixError {}
