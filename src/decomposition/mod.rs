//! Dense factorizations.
//!
//! Each routine borrows its input, works on a private copy, and returns freshly
//! owned factors. Squareness is checked before any work is done; numeric
//! breakdowns (zero pivot, non-positive radicand) come back as typed
//! [`MatrixError`](crate::error::MatrixError)s instead of NaN-filled output.
pub mod cholesky;
pub mod hessenberg;
pub mod lu;

pub use cholesky::decompose_cholesky;
pub use hessenberg::reduce_to_hessenberg;
pub use lu::{decompose_lu, decompose_lu_with_tolerance, LuDecomposition};
