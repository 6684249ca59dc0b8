//! Fixed-width text rendering of matrices.
use std::fmt::{Display, Write};

use crate::math::Matrix;

/// Layout options for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces added to the widest element to get the column width.
    pub padding: usize,
    /// Fractional digits per element; `None` keeps the shortest `Display` form.
    pub precision: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            padding: 2,
            precision: None,
        }
    }
}

fn stringify<T: Display>(value: &T, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{:.*}", p, value),
        None => value.to_string(),
    }
}

/// Length of the longest stringified element.
pub fn max_width<T: Display>(m: &Matrix<T>, precision: Option<usize>) -> usize {
    m.as_slice()
        .iter()
        .map(|v| stringify(v, precision).chars().count())
        .max()
        .unwrap_or(0)
}

/// Render `m` one row per line, every element right-aligned in a shared
/// column width of `max_width + padding`.
pub fn render<T: Display>(m: &Matrix<T>, options: &RenderOptions) -> String {
    let width = max_width(m, options.precision) + options.padding;
    let mut out = String::new();
    for row in 0..m.nrows() {
        for value in m.row_slice(row) {
            let cell = stringify(value, options.precision);
            // Writing to a String cannot fail.
            let _ = write!(out, "{:>width$}", cell, width = width);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_counts_sign_and_fraction() {
        let m = Matrix::from_shape_vec((1, 3), vec![1.0f64, -2.5, 10.0]).unwrap();
        assert_eq!(max_width(&m, None), 4);
        assert_eq!(max_width(&m, Some(2)), 5);
    }
}
