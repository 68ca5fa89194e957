//! Flat-storage 3-D lookup-table grid.

use std::ops::Index;

use super::axis::Axis;
use crate::color::Rgb16;
use crate::error::LutError;

/// Most vertices a grid may hold (`256^3`).
pub const MAX_GRID_POINTS: usize = 1 << 24;

/// Integer coordinate of a grid vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct GridCoord {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl GridCoord {
    #[inline]
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Coordinate shifted by a unit-cube corner offset.
    #[inline]
    pub const fn offset(self, [ox, oy, oz]: [usize; 3]) -> Self {
        Self::new(self.x + ox, self.y + oy, self.z + oz)
    }
}

impl std::fmt::Display for GridCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

/// A grid vertex: its color and how many samples' cells touch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridPoint {
    pub color: Rgb16,
    pub visits: u32,
}

/// Lower corner of the cell enclosing a color, plus the per-axis distance
/// from that corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRoot {
    pub base: GridCoord,
    pub remainder: [u32; 3],
}

/// A coarse 3-D grid of reference colors.
///
/// Axis `x` spans red, `y` green and `z` blue. Points are stored in one
/// contiguous buffer at offset `x * ny * nz + y * nz + z`.
///
/// # Example
///
/// ```
/// use lut_grid::{GridCoord, LutGrid};
///
/// let grid = LutGrid::identity(4, 3, 3).unwrap();
/// assert_eq!(grid.len(), 36);
/// assert_eq!(grid[GridCoord::new(1, 1, 2)].color.r, 21845);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LutGrid {
    axes: [Axis; 3],
    points: Vec<GridPoint>,
}

impl LutGrid {
    /// Build a grid whose vertices sit evenly across the color cube, each
    /// vertex holding its own position as color.
    ///
    /// # Errors
    ///
    /// Returns [`LutError::AxisTooSmall`] or [`LutError::AxisTooLarge`] for
    /// the first axis with an unsupported number of points, and
    /// [`LutError::GridTooLarge`] if the grid would hold more than
    /// [`MAX_GRID_POINTS`] vertices.
    pub fn identity(nx: usize, ny: usize, nz: usize) -> Result<Self, LutError> {
        let axes = [Axis::new('x', nx)?, Axis::new('y', ny)?, Axis::new('z', nz)?];

        let len = nx
            .checked_mul(ny)
            .and_then(|n| n.checked_mul(nz))
            .filter(|&n| n <= MAX_GRID_POINTS)
            .ok_or(LutError::GridTooLarge { dims: (nx, ny, nz) })?;

        let mut points = Vec::with_capacity(len);
        for x in 0..nx {
            let r = axes[0].value_at(x);
            for y in 0..ny {
                let g = axes[1].value_at(y);
                for z in 0..nz {
                    points.push(GridPoint {
                        color: Rgb16::new(r, g, axes[2].value_at(z)),
                        visits: 0,
                    });
                }
            }
        }

        Ok(Self { axes, points })
    }

    /// The x, y and z axes.
    #[inline]
    pub fn axes(&self) -> &[Axis; 3] {
        &self.axes
    }

    /// Axis sizes as `(nx, ny, nz)`.
    #[inline]
    pub fn dims(&self) -> (usize, usize, usize) {
        (
            self.axes[0].points(),
            self.axes[1].points(),
            self.axes[2].points(),
        )
    }

    /// Total number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: every axis has at least two points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Linear offset of `coord`, or `None` if it lies outside the grid.
    #[inline]
    pub fn offset_of(&self, coord: GridCoord) -> Option<usize> {
        let (nx, ny, nz) = self.dims();
        if coord.x >= nx || coord.y >= ny || coord.z >= nz {
            return None;
        }
        Some(coord.x * ny * nz + coord.y * nz + coord.z)
    }

    /// Coordinate stored at linear `offset`.
    ///
    /// # Panics (debug only)
    /// Debug-asserts that `offset < len()`.
    #[inline]
    pub fn coord_of(&self, offset: usize) -> GridCoord {
        debug_assert!(offset < self.points.len());
        let (_, ny, nz) = self.dims();
        GridCoord::new(offset / (ny * nz), (offset / nz) % ny, offset % nz)
    }

    pub fn get(&self, coord: GridCoord) -> Option<&GridPoint> {
        self.offset_of(coord).map(|i| &self.points[i])
    }

    /// Mutable access to a vertex, for building non-identity tables.
    pub fn point_mut(&mut self, coord: GridCoord) -> Option<&mut GridPoint> {
        self.offset_of(coord).map(move |i| &mut self.points[i])
    }

    /// Vertices in storage order (x-major, z fastest).
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, &GridPoint)> + '_ {
        self.points
            .iter()
            .enumerate()
            .map(move |(i, p)| (self.coord_of(i), p))
    }

    pub(crate) fn points_mut(&mut self) -> &mut [GridPoint] {
        &mut self.points
    }

    /// Cell enclosing `color`, quantized on each axis independently.
    ///
    /// ```
    /// use lut_grid::{GridCoord, LutGrid, Rgb16};
    ///
    /// let grid = LutGrid::identity(4, 3, 3).unwrap();
    /// let root = grid.find_root(Rgb16::new(50000, 0, 65535));
    /// assert_eq!(root.base, GridCoord::new(2, 0, 1));
    /// ```
    pub fn find_root(&self, color: Rgb16) -> CellRoot {
        let [r, g, b] = color.channels();
        let (x, rx) = self.axes[0].find_root(r);
        let (y, ry) = self.axes[1].find_root(g);
        let (z, rz) = self.axes[2].find_root(b);
        CellRoot {
            base: GridCoord::new(x, y, z),
            remainder: [rx, ry, rz],
        }
    }
}

impl Index<GridCoord> for LutGrid {
    type Output = GridPoint;

    /// # Panics
    /// Panics if `coord` lies outside the grid.
    fn index(&self, coord: GridCoord) -> &GridPoint {
        match self.get(coord) {
            Some(p) => p,
            None => panic!("grid coordinate {coord} outside {:?}", self.dims()),
        }
    }
}
