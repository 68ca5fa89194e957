//! Trilinear lookup through the grid.

use super::lut::LutGrid;
use super::reference::cube_corners;
use crate::color::Rgb16;

impl LutGrid {
    /// Map `color` through the table with trilinear interpolation.
    ///
    /// Blends along x first (four edges), then y, then z. Weights are the
    /// per-axis remainders over the axis block size, in integer math.
    ///
    /// # Example
    ///
    /// ```
    /// use lut_grid::{LutGrid, Rgb16};
    ///
    /// let grid = LutGrid::identity(4, 3, 3).unwrap();
    /// let c = Rgb16::new(0x7300, 0x5200, 0x4400);
    /// let mapped = grid.map_color(c);
    /// assert!(mapped.abs_diff(c) <= 3);
    /// ```
    pub fn map_color(&self, color: Rgb16) -> Rgb16 {
        let root = self.find_root(color);
        let [rx, ry, rz] = root.remainder;
        let [bx, by, bz] = self.axes().map(|a| a.block_size());

        // Corner order follows CUBE_OFFSETS:
        // 000, 100, 010, 001, 110, 101, 011, 111
        let c = cube_corners(root.base).map(|coord| self[coord].color);

        let x00 = c[0].interpolate(c[1], rx, bx);
        let x10 = c[2].interpolate(c[4], rx, bx);
        let x01 = c[3].interpolate(c[5], rx, bx);
        let x11 = c[6].interpolate(c[7], rx, bx);

        let y0 = x00.interpolate(x10, ry, by);
        let y1 = x01.interpolate(x11, ry, by);

        y0.interpolate(y1, rz, bz)
    }

    /// Map a buffer of pixels.
    pub fn map_pixels(&self, pixels: &[Rgb16]) -> Vec<Rgb16> {
        pixels.iter().map(|&p| self.map_color(p)).collect()
    }
}
