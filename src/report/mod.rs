//! Report output
//!
//! [`present`] walks an analysis and drives a [`Reporter`] with tables of
//! cells. Reporters decide how tables look: aligned text, an HTML page
//! rendered through Tera, or JSON.

mod html;
mod json;
mod present;
mod text;

use lut_grid::Rgb16;
use serde::Serialize;

use crate::error::ReportError;

pub use html::HtmlReporter;
pub use json::JsonReporter;
pub use present::{present, CHECKER_HEADERS, GRID_HEADERS};
pub use text::TextReporter;

/// One table cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    Text {
        text: String,
    },
    /// A color patch, optionally with a caption drawn over it
    Swatch {
        hex: String,
        label: Option<String>,
    },
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Cell::Text { text: text.into() }
    }

    pub fn swatch(color: Rgb16) -> Self {
        Cell::Swatch {
            hex: color.hex_swatch(),
            label: None,
        }
    }

    pub fn labeled_swatch(color: Rgb16, label: impl Into<String>) -> Self {
        Cell::Swatch {
            hex: color.hex_swatch(),
            label: Some(label.into()),
        }
    }

    /// Plain-text rendering, used where colors cannot be shown
    pub fn plain(&self) -> String {
        match self {
            Cell::Text { text } => text.clone(),
            Cell::Swatch { hex, label: None } => hex.clone(),
            Cell::Swatch {
                hex,
                label: Some(label),
            } => format!("{label} {hex}"),
        }
    }
}

/// A titled table, as collected by buffering reporters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

/// Sink for tabular report output
pub trait Reporter {
    fn begin_table(&mut self, title: &str, headers: &[&str]) -> Result<(), ReportError>;

    fn emit_row(&mut self, cells: Vec<Cell>) -> Result<(), ReportError>;

    fn end_table(&mut self) -> Result<(), ReportError>;

    /// Flush anything still buffered. Called once after the last table.
    fn finish(&mut self) -> Result<(), ReportError> {
        Ok(())
    }
}

/// Output format selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Html,
    Json,
}

/// Collects tables in memory for reporters that render the whole document
/// at the end.
#[derive(Debug, Default)]
pub(crate) struct TableCollector {
    tables: Vec<Table>,
    open: Option<Table>,
}

impl TableCollector {
    fn begin(&mut self, title: &str, headers: &[&str]) {
        if let Some(table) = self.open.take() {
            self.tables.push(table);
        }
        self.open = Some(Table {
            title: title.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        });
    }

    fn row(&mut self, cells: Vec<Cell>) -> Result<(), ReportError> {
        let table = self.open.as_mut().ok_or(ReportError::NoOpenTable)?;
        table.rows.push(cells);
        Ok(())
    }

    fn end(&mut self) {
        if let Some(table) = self.open.take() {
            self.tables.push(table);
        }
    }

    fn take(&mut self) -> Vec<Table> {
        self.end();
        std::mem::take(&mut self.tables)
    }
}
