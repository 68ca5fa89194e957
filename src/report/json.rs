use serde_json::json;
use std::io::Write;

use super::{Cell, Reporter, TableCollector};
use crate::error::ReportError;

/// Writes `{"title": ..., "tables": [...]}` as pretty JSON on
/// [`finish`](Reporter::finish).
pub struct JsonReporter<W: Write> {
    out: W,
    title: String,
    tables: TableCollector,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W, title: impl Into<String>) -> Self {
        Self {
            out,
            title: title.into(),
            tables: TableCollector::default(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn begin_table(&mut self, title: &str, headers: &[&str]) -> Result<(), ReportError> {
        self.tables.begin(title, headers);
        Ok(())
    }

    fn emit_row(&mut self, cells: Vec<Cell>) -> Result<(), ReportError> {
        self.tables.row(cells)
    }

    fn end_table(&mut self) -> Result<(), ReportError> {
        self.tables.end();
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        let tables = serde_json::to_value(self.tables.take())?;
        let doc = json!({
            "title": self.title,
            "tables": tables,
        });
        serde_json::to_writer_pretty(&mut self.out, &doc)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
