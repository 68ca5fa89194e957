//! 3-D lookup-table grid
//!
//! - [`Axis`]: vertex placement and channel quantization along one axis
//! - [`LutGrid`]: flat vertex storage, cell lookup and trilinear mapping
//! - [`count_references`]: per-vertex counters of which samples use them

mod axis;
mod interpolate;
mod lut;
mod reference;

pub use axis::Axis;
pub use lut::{CellRoot, GridCoord, GridPoint, LutGrid, MAX_GRID_POINTS};
pub use reference::{count_references, cube_corners, CUBE_OFFSETS};
