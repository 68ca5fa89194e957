//! Reference counting: which grid vertices a set of samples depends on.
//!
//! Every sample falls into exactly one grid cell. Looking the sample up in
//! the table reads all 8 corners of that cell, so each corner's counter is
//! incremented once per sample.

use super::lut::{CellRoot, GridCoord, LutGrid};
use crate::color::Rgb16;

/// Offsets of a unit cube's 8 corners relative to its lower corner.
///
/// Order matches the presentation order: root first, then single-axis
/// steps, then the face diagonals, then the far corner.
pub const CUBE_OFFSETS: [[usize; 3]; 8] = [
    [0, 0, 0],
    [1, 0, 0],
    [0, 1, 0],
    [0, 0, 1],
    [1, 1, 0],
    [1, 0, 1],
    [0, 1, 1],
    [1, 1, 1],
];

/// The 8 corners of the cell whose lower corner is `base`.
pub fn cube_corners(base: GridCoord) -> [GridCoord; 8] {
    CUBE_OFFSETS.map(|offset| base.offset(offset))
}

impl LutGrid {
    /// Count one reference on every corner of the cell enclosing `color`.
    ///
    /// Returns the cell root so callers can show where the sample landed.
    pub fn record_sample(&mut self, color: Rgb16) -> CellRoot {
        let root = self.find_root(color);
        for corner in cube_corners(root.base) {
            // find_root never selects the last vertex of an axis as a base,
            // so every corner is inside the grid.
            if let Some(point) = self.point_mut(corner) {
                point.visits += 1;
            }
        }
        root
    }

    /// Sum of all vertex counters.
    pub fn total_visits(&self) -> u64 {
        self.iter().map(|(_, p)| u64::from(p.visits)).sum()
    }

    /// Zero every vertex counter.
    pub fn reset_visits(&mut self) {
        for point in self.points_mut() {
            point.visits = 0;
        }
    }
}

/// Record every sample into `grid`, in order.
///
/// Counting is commutative, so the final counters do not depend on sample
/// order. The returned roots are in input order.
///
/// # Example
///
/// ```
/// use lut_grid::{count_references, LutGrid, COLOR_CHECKER};
///
/// let mut grid = LutGrid::identity(4, 3, 3).unwrap();
/// let roots = count_references(&mut grid, COLOR_CHECKER.iter().map(|s| s.color));
/// assert_eq!(roots.len(), 24);
/// assert_eq!(grid.total_visits(), 8 * 24);
/// ```
pub fn count_references<I>(grid: &mut LutGrid, samples: I) -> Vec<CellRoot>
where
    I: IntoIterator<Item = Rgb16>,
{
    samples
        .into_iter()
        .map(|color| grid.record_sample(color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_cube_offsets_are_distinct_unit_corners() {
        let set: HashSet<[usize; 3]> = CUBE_OFFSETS.iter().copied().collect();
        assert_eq!(set.len(), 8);
        for o in CUBE_OFFSETS {
            assert!(o.iter().all(|&c| c <= 1));
        }
        assert_eq!(CUBE_OFFSETS[0], [0, 0, 0]);
    }

    #[test]
    fn test_single_sample_touches_eight_vertices() {
        let mut grid = LutGrid::identity(4, 3, 3).unwrap();
        let root = grid.record_sample(Rgb16::new(50000, 10000, 40000));
        assert_eq!(root.base, GridCoord::new(2, 0, 1));

        let touched: Vec<GridCoord> = grid
            .iter()
            .filter(|(_, p)| p.visits > 0)
            .map(|(c, _)| c)
            .collect();
        assert_eq!(touched.len(), 8);
        for (coord, point) in grid.iter() {
            let inside = coord.x >= 2 && coord.x <= 3 && coord.y <= 1 && coord.z >= 1;
            assert_eq!(point.visits, u32::from(inside), "coord {coord}");
        }
    }

    #[test]
    fn test_max_color_stays_in_bounds() {
        let mut grid = LutGrid::identity(4, 3, 3).unwrap();
        let root = grid.record_sample(Rgb16::new(u16::MAX, u16::MAX, u16::MAX));
        assert_eq!(root.base, GridCoord::new(2, 1, 1));
        assert_eq!(grid[GridCoord::new(3, 2, 2)].visits, 1);
        assert_eq!(grid.total_visits(), 8);
    }

    #[test]
    fn test_total_is_eight_per_sample() {
        let mut grid = LutGrid::identity(5, 4, 2).unwrap();
        let samples: Vec<Rgb16> = (0..100u16)
            .map(|i| Rgb16::new(i * 655, 65535 - i * 600, i.wrapping_mul(7919)))
            .collect();
        count_references(&mut grid, samples.iter().copied());
        assert_eq!(grid.total_visits(), 800);
    }

    #[test]
    fn test_order_does_not_matter() {
        let samples = [
            Rgb16::new(0x7300, 0x5200, 0x4400),
            Rgb16::new(0xf300, 0xf300, 0xf200),
            Rgb16::new(0x0800, 0x8500, 0xa100),
        ];
        let mut forward = LutGrid::identity(4, 3, 3).unwrap();
        count_references(&mut forward, samples.iter().copied());
        let mut backward = LutGrid::identity(4, 3, 3).unwrap();
        count_references(&mut backward, samples.iter().rev().copied());
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_minimal_grid_every_vertex_touched() {
        let mut grid = LutGrid::identity(2, 2, 2).unwrap();
        grid.record_sample(Rgb16::new(1, 2, 3));
        assert!(grid.iter().all(|(_, p)| p.visits == 1));
    }

    #[test]
    fn test_reset_visits() {
        let mut grid = LutGrid::identity(3, 3, 3).unwrap();
        grid.record_sample(Rgb16::new(100, 200, 300));
        assert_eq!(grid.total_visits(), 8);
        grid.reset_visits();
        assert_eq!(grid.total_visits(), 0);
    }
}
