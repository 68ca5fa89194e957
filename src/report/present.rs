use lut_grid::{cube_corners, GridPoint};

use super::{Cell, Reporter};
use crate::error::ReportError;
use crate::services::LutAnalysis;

/// Columns of the color-checker table. The corner columns follow
/// `CUBE_OFFSETS` order.
pub const CHECKER_HEADERS: [&str; 13] = [
    "Name",
    "Swatch",
    "R",
    "G",
    "B",
    "Root",
    "x+1",
    "y+1",
    "z+1",
    "x+1,y+1",
    "x+1,z+1",
    "y+1,z+1",
    "x+1,y+1,z+1",
];

/// Columns of the grid reference-count table.
pub const GRID_HEADERS: [&str; 8] = ["X", "Y", "Z", "Swatch", "R", "G", "B", "Refs"];

/// Emit the sample table and the grid table.
pub fn present(analysis: &LutAnalysis, reporter: &mut dyn Reporter) -> Result<(), ReportError> {
    let grid = &analysis.grid;
    let (nx, ny, nz) = grid.dims();

    reporter.begin_table("Samples", &CHECKER_HEADERS)?;
    for m in &analysis.mappings {
        let mut cells = vec![Cell::text(&m.name), Cell::swatch(m.color)];
        cells.extend(channel_cells(m.color.channels()));

        let corners = cube_corners(m.root.base);
        cells.push(Cell::labeled_swatch(
            grid[corners[0]].color,
            m.root.base.to_string(),
        ));
        cells.extend(corners[1..].iter().map(|&c| Cell::swatch(grid[c].color)));

        reporter.emit_row(cells)?;
    }
    reporter.end_table()?;

    reporter.begin_table(&format!("Grid {nx}x{ny}x{nz}"), &GRID_HEADERS)?;
    for (coord, point) in grid.iter() {
        reporter.emit_row(grid_row(coord.x, coord.y, coord.z, point))?;
    }
    reporter.end_table()?;

    reporter.finish()
}

fn channel_cells(channels: [u16; 3]) -> impl Iterator<Item = Cell> {
    channels.into_iter().map(|v| Cell::text(format!("{v:04x}")))
}

fn grid_row(x: usize, y: usize, z: usize, point: &GridPoint) -> Vec<Cell> {
    let mut cells = vec![
        Cell::text(x.to_string()),
        Cell::text(y.to_string()),
        Cell::text(z.to_string()),
        Cell::swatch(point.color),
    ];
    cells.extend(channel_cells(point.color.channels()));
    cells.push(Cell::text(point.visits.to_string()));
    cells
}
