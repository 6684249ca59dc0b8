//! Reading matrices from text grids and rendering them as aligned text.
pub mod grid;
pub mod render;

pub use grid::{parse_grid, read_grid, read_grid_from_reader};
pub use render::{max_width, render, RenderOptions};
