use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
use std::slice::Iter;

use num_traits::{Float, Zero};

use crate::math::matrix::Matrix;

/// Dense column vector, used for matrix columns and Householder vectors.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T> Vector<T> {
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }
}

impl<T> Vector<T>
where
    T: Clone + Zero,
{
    pub fn zeros(len: usize) -> Self {
        Vector::from_vec(vec![T::zero(); len])
    }
}

impl<T: Float> Vector<T> {
    /// Largest absolute component, `0` for an empty vector.
    pub fn max_abs(&self) -> T {
        self.iter().fold(T::zero(), |acc, &x| acc.max(x.abs()))
    }

    /// Euclidean (2-) norm.
    ///
    /// The sum of squares is taken over the vector divided by its largest
    /// magnitude, so the result is finite and non-zero for any finite non-zero
    /// vector whose norm is representable.
    pub fn norm(&self) -> T {
        let scale = self.max_abs();
        if scale == T::zero() || !scale.is_finite() {
            return scale;
        }
        let sum = self.iter().fold(T::zero(), |acc, &x| {
            let y = x / scale;
            acc + y * y
        });
        scale * sum.sqrt()
    }

    /// Unit vector in the same direction, or `None` for the zero vector and
    /// for vectors with non-finite components.
    pub fn normalized(&self) -> Option<Vector<T>> {
        let scale = self.max_abs();
        if scale == T::zero() || !scale.is_finite() {
            return None;
        }
        let scaled: Vector<T> = self.iter().map(|&x| x / scale).collect();
        let norm = scaled.norm();
        if !norm.is_finite() {
            return None;
        }
        Some(scaled.iter().map(|&x| x / norm).collect())
    }

    /// Outer product `self * other^T`.
    pub fn outer(&self, other: &Vector<T>) -> Matrix<T> {
        let mut out = Matrix::zeros(self.len(), other.len());
        for (i, &a) in self.iter().enumerate() {
            for (j, &b) in other.iter().enumerate() {
                out[(i, j)] = a * b;
            }
        }
        out
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}
