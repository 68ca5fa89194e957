//! lut-grid: coarse 3-D color lookup tables
//!
//! Builds a grid of reference colors across the 16-bit RGB cube, finds the
//! cell any color falls into, and counts which grid vertices a set of samples
//! (usually the 24-patch color checker) depends on.
//!
//! # Quick Start
//!
//! ```
//! use lut_grid::{count_references, GridCoord, LutGrid, COLOR_CHECKER};
//!
//! let mut grid = LutGrid::identity(4, 3, 3).unwrap();
//! let roots = count_references(&mut grid, COLOR_CHECKER.iter().map(|s| s.color));
//!
//! // "dark skin" lands in the cell starting at (1, 0, 0).
//! assert_eq!(roots[0].base, GridCoord::new(1, 0, 0));
//! assert_eq!(grid.total_visits(), 8 * 24);
//! ```
//!
//! # Grid Layout
//!
//! Each axis is placed independently. With `n` points on an axis the cell
//! width is `block = 65536 / (n - 1)` and vertex `i` sits at
//! `min(65535, block * i)`, with the last vertex pinned to 65535:
//!
//! ```text
//! n = 4:   0 ------- 21845 ------- 43690 ------- 65535
//!          |  cell 0   |   cell 1    |   cell 2    |
//! ```
//!
//! A channel value quantizes to `min(value / block, n - 2)`, the lower
//! corner of its cell. The clamp keeps `index + 1` valid, so a cell's 8
//! corners always exist.
//!
//! # Failure Modes
//!
//! Axis sizes are checked once in [`LutGrid::identity`]: fewer than 2 points
//! would divide by zero, more than 65537 would make cells narrower than a
//! channel step. The vertex count is capped at [`MAX_GRID_POINTS`] so a
//! grid of individually valid axes cannot exhaust memory. After
//! construction nothing can fail.

#![allow(clippy::module_inception)]

pub mod checker;
pub mod color;
pub mod error;
pub mod grid;


pub use checker::{closest_patches, PixelCoord, Swatch, COLOR_CHECKER, NUM_SWATCHES};
pub use color::{Rgb16, MAX_COLOR, NUM_COLOR};
pub use error::LutError;
pub use grid::{
    count_references, cube_corners, Axis, CellRoot, GridCoord, GridPoint, LutGrid, CUBE_OFFSETS,
    MAX_GRID_POINTS,
};
