//! Text-grid matrix reader.
//!
//! The format is two leading integers (row count, then column count) followed
//! by one line per matrix row holding comma-separated values:
//!
//! ```text
//! 2
//! 3
//! 1,2,3
//! 4.5,-5,6e-1
//! ```
//!
//! The two counts may share a line. Lines after the last matrix row are ignored.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};

use crate::math::Matrix;

/// Read a matrix from a text-grid file.
pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Matrix<f64>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open matrix file: {}", path.as_ref().display()))?;
    read_grid_from_reader(file)
        .with_context(|| format!("Failed to parse matrix file: {}", path.as_ref().display()))
}

/// Read a matrix from any text-grid source.
pub fn read_grid_from_reader<R: Read>(mut reader: R) -> Result<Matrix<f64>> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .context("Failed to read matrix data")?;
    parse_grid(&content)
}

/// Parse a matrix from text-grid contents.
pub fn parse_grid(content: &str) -> Result<Matrix<f64>> {
    let (rows, rest) = next_count(content, "row")?;
    let (cols, rest) = next_count(rest, "column")?;
    log::trace!("Reading {}x{} matrix grid", rows, cols);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(rest.trim_start().as_bytes());

    let mut data = Vec::with_capacity(rows * cols);
    let mut records = reader.records();
    for row in 0..rows {
        let record = records
            .next()
            .ok_or_else(|| anyhow!("Expected {} rows but found only {}", rows, row))?
            .with_context(|| format!("Failed to read row {}", row + 1))?;
        if record.len() != cols {
            bail!(
                "Row {} has {} values, expected {}",
                row + 1,
                record.len(),
                cols
            );
        }
        for (col, field) in record.iter().enumerate() {
            let value: f64 = field.parse().with_context(|| {
                format!("Invalid number '{}' at row {}, column {}", field, row + 1, col + 1)
            })?;
            data.push(value);
        }
    }

    Ok(Matrix::from_shape_vec((rows, cols), data)?)
}

/// Split the next whitespace-delimited token off `input` and parse it as a
/// non-zero dimension.
fn next_count<'a>(input: &'a str, what: &str) -> Result<(usize, &'a str)> {
    let input = input.trim_start();
    let end = input
        .find(char::is_whitespace)
        .unwrap_or(input.len());
    let token = &input[..end];
    if token.is_empty() {
        bail!("Missing {} count", what);
    }
    let count: usize = token
        .parse()
        .with_context(|| format!("Invalid {} count '{}'", what, token))?;
    if count == 0 {
        bail!("The {} count must be at least 1", what);
    }
    Ok((count, &input[end..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_may_share_a_line() {
        let (rows, rest) = next_count("2 3\n1,2,3", "row").unwrap();
        assert_eq!(rows, 2);
        let (cols, rest) = next_count(rest, "column").unwrap();
        assert_eq!(cols, 3);
        assert_eq!(rest.trim(), "1,2,3");
    }
}
