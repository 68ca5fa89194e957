use std::io::Write;

use super::{Cell, Reporter, TableCollector};
use crate::error::ReportError;

/// Writes each table as aligned plain-text columns once it is complete.
///
/// Swatches are shown as their `#rrggbb` color, prefixed by the label if any.
pub struct TextReporter<W: Write> {
    out: W,
    tables: TableCollector,
    written: usize,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            tables: TableCollector::default(),
            written: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_pending(&mut self) -> Result<(), ReportError> {
        for table in self.tables.take() {
            if self.written > 0 {
                writeln!(self.out)?;
            }
            self.written += 1;

            let rows: Vec<Vec<String>> = table
                .rows
                .iter()
                .map(|row| row.iter().map(Cell::plain).collect())
                .collect();

            // Widths in chars, matching how `{:<w$}` pads
            let mut widths: Vec<usize> =
                table.headers.iter().map(|h| h.chars().count()).collect();
            for row in &rows {
                for (i, cell) in row.iter().enumerate() {
                    let len = cell.chars().count();
                    match widths.get_mut(i) {
                        Some(w) => *w = (*w).max(len),
                        None => widths.push(len),
                    }
                }
            }

            writeln!(self.out, "== {} ==", table.title)?;
            write_line(&mut self.out, &table.headers, &widths)?;
            for row in &rows {
                write_line(&mut self.out, row, &widths)?;
            }
        }
        Ok(())
    }
}

fn write_line<W: Write>(out: &mut W, cells: &[String], widths: &[usize]) -> std::io::Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", line.trim_end())
}

impl<W: Write> Reporter for TextReporter<W> {
    fn begin_table(&mut self, title: &str, headers: &[&str]) -> Result<(), ReportError> {
        self.write_pending()?;
        self.tables.begin(title, headers);
        Ok(())
    }

    fn emit_row(&mut self, cells: Vec<Cell>) -> Result<(), ReportError> {
        self.tables.row(cells)
    }

    fn end_table(&mut self) -> Result<(), ReportError> {
        self.tables.end();
        self.write_pending()
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        self.write_pending()?;
        self.out.flush()?;
        Ok(())
    }
}
