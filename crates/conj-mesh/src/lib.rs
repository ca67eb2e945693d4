pub mod buffers;
pub mod grid;

pub use buffers::{SurfaceMesh, MAX_GRID_VERTICES};
pub use grid::tessellate_grid;
