//! matfact: dense matrices and classical factorizations.
//!
//! This crate provides a small row-major `Matrix` type with checked access,
//! multiplication and transpose, and three factorizations built on it: LU with
//! partial pivoting, Cholesky, and Householder reduction to upper-Hessenberg
//! form. A text-grid reader, a fixed-width renderer and a JSON run
//! configuration support the `matfact` binary.
//!
//! ```
//! use matfact::decomposition::decompose_lu;
//! use matfact::math::Matrix;
//!
//! let a: Matrix = Matrix::from_rows(&[vec![4.0, 3.0], vec![6.0, 3.0]]).unwrap();
//! let lu = decompose_lu(&a).unwrap();
//! assert!(lu.permuted(&a).unwrap().approx_eq(&lu.reconstruct().unwrap(), 1e-12));
//! ```
pub mod config;
pub mod decomposition;
pub mod error;
pub mod io;
pub mod math;

pub use error::MatrixError;
