//! Dense matrix and vector types.
//!
//! `Matrix` is the row-major container every factorization consumes and
//! produces; `Vector` is the small column type used while building
//! Householder reflectors.
pub mod matrix;
pub mod vector;

pub use matrix::{multiply, transpose, Matrix};
pub use vector::Vector;
