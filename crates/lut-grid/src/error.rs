//! Error types for grid construction and color-checker lookups.

use std::fmt;

/// Error type for the lut-grid API.
///
/// Grid axes are validated once at construction, so every operation on a
/// built [`LutGrid`](crate::LutGrid) is infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LutError {
    /// Axis has fewer than two points, so it has no cell to quantize into
    AxisTooSmall {
        /// Axis name (`x`, `y` or `z`)
        axis: char,
        /// Requested number of points
        size: usize,
    },
    /// Axis has so many points that a cell would be narrower than one channel step
    AxisTooLarge {
        /// Axis name (`x`, `y` or `z`)
        axis: char,
        /// Requested number of points
        size: usize,
    },
    /// Axes are valid on their own but their product exceeds
    /// [`MAX_GRID_POINTS`](crate::MAX_GRID_POINTS)
    GridTooLarge {
        /// Requested `(nx, ny, nz)`
        dims: (usize, usize, usize),
    },
    /// Pixel buffer length does not match the given dimensions
    ImageSizeMismatch {
        /// `width * height`
        expected: usize,
        /// Length of the pixel slice
        actual: usize,
    },
    /// Image has no pixels to search
    EmptyImage,
}

impl fmt::Display for LutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LutError::AxisTooSmall { axis, size } => {
                write!(f, "{} axis has {} points, need at least 2", axis, size)
            }
            LutError::AxisTooLarge { axis, size } => {
                write!(
                    f,
                    "{} axis has {} points, at most {} are supported",
                    axis,
                    size,
                    crate::color::NUM_COLOR + 1
                )
            }
            LutError::GridTooLarge { dims: (nx, ny, nz) } => {
                write!(
                    f,
                    "grid {}x{}x{} has more than {} vertices",
                    nx,
                    ny,
                    nz,
                    crate::grid::MAX_GRID_POINTS
                )
            }
            LutError::ImageSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "image size mismatch: expected {} pixels, got {}",
                    expected, actual
                )
            }
            LutError::EmptyImage => write!(f, "image has no pixels"),
        }
    }
}

impl std::error::Error for LutError {}
