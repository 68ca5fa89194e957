//! One grid axis: vertex placement and channel quantization.

use crate::color::{MAX_COLOR, NUM_COLOR};
use crate::error::LutError;

/// A validated grid axis with `points` evenly spaced vertices.
///
/// Vertex `i` sits at `min(MAX_COLOR, block * i)` where
/// `block = NUM_COLOR / (points - 1)`. The last vertex is pinned to
/// [`MAX_COLOR`] even when `points - 1` does not divide [`NUM_COLOR`], so the
/// grid always spans the full channel range. For such axes (e.g. 7 points,
/// whose raw formula gives 65532) only the last vertex differs from
/// `min(MAX_COLOR, block * i)`; the wider last cell can make trilinear
/// mapping overshoot, which [`Rgb16::interpolate`](crate::Rgb16::interpolate)
/// clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axis {
    name: char,
    points: usize,
    block: u32,
}

impl Axis {
    /// Create an axis with `points` vertices.
    ///
    /// # Errors
    ///
    /// - [`LutError::AxisTooSmall`] if `points < 2`
    /// - [`LutError::AxisTooLarge`] if `points > NUM_COLOR + 1`
    ///
    /// # Example
    /// ```
    /// use lut_grid::Axis;
    /// let axis = Axis::new('x', 4).unwrap();
    /// assert_eq!(axis.block_size(), 21845);
    /// assert!(Axis::new('x', 1).is_err());
    /// ```
    pub fn new(name: char, points: usize) -> Result<Self, LutError> {
        if points < 2 {
            return Err(LutError::AxisTooSmall { axis: name, size: points });
        }
        if points > NUM_COLOR as usize + 1 {
            return Err(LutError::AxisTooLarge { axis: name, size: points });
        }
        let block = NUM_COLOR / (points as u32 - 1);
        Ok(Self {
            name,
            points,
            block,
        })
    }

    #[inline]
    pub fn name(&self) -> char {
        self.name
    }

    /// Number of vertices along this axis.
    #[inline]
    pub fn points(&self) -> usize {
        self.points
    }

    /// Channel width of one cell.
    #[inline]
    pub fn block_size(&self) -> u32 {
        self.block
    }

    /// Channel value of vertex `index`.
    ///
    /// # Panics (debug only)
    /// Debug-asserts that `index < points`.
    #[inline]
    pub fn value_at(&self, index: usize) -> u16 {
        debug_assert!(index < self.points, "vertex {index} outside axis");
        if index + 1 >= self.points {
            return MAX_COLOR;
        }
        (self.block * index as u32).min(u32::from(MAX_COLOR)) as u16
    }

    /// Index of the lower corner of the cell enclosing `value`.
    ///
    /// Always in `0..=points - 2`, so `index + 1` is a valid vertex even for
    /// [`MAX_COLOR`].
    ///
    /// # Example
    /// ```
    /// use lut_grid::Axis;
    /// let axis = Axis::new('x', 4).unwrap();
    /// assert_eq!(axis.quantize(50000), 2);
    /// assert_eq!(axis.quantize(65535), 2);
    /// ```
    #[inline]
    pub fn quantize(&self, value: u16) -> usize {
        self.find_root(value).0
    }

    /// Lower-corner index and the distance from that corner to `value`.
    ///
    /// The remainder is the interpolation weight towards `index + 1`, in
    /// units of [`block_size`](Self::block_size).
    #[inline]
    pub fn find_root(&self, value: u16) -> (usize, u32) {
        let value = u32::from(value);
        let index = ((value / self.block) as usize).min(self.points - 2);
        (index, value - index as u32 * self.block)
    }
}
