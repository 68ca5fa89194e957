use serde::Serialize;
use std::io::Write;
use tera::{Context, Tera};

use super::{Cell, Reporter, Table, TableCollector};
use crate::error::ReportError;

const TEMPLATE_NAME: &str = "report.html";
const TEMPLATE: &str = include_str!("templates/report.html");

#[derive(Serialize)]
struct Page<'a> {
    title: &'a str,
    tables: &'a [Table],
}

/// Renders all tables into one standalone HTML page on [`finish`](Reporter::finish).
///
/// Swatch cells become colored `<td>` patches; text is HTML-escaped by Tera.
pub struct HtmlReporter<W: Write> {
    out: W,
    title: String,
    tables: TableCollector,
}

impl<W: Write> HtmlReporter<W> {
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

    /// Render a page for `tables` with the built-in template
    pub fn render(title: &str, tables: &[Table]) -> Result<String, ReportError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;

        let context = Context::from_serialize(Page { title, tables })?;
        Ok(tera.render(TEMPLATE_NAME, &context)?)
    }
}

impl<W: Write> Reporter for HtmlReporter<W> {
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
        let tables = self.tables.take();
        let html = Self::render(&self.title, &tables)?;
        tracing::debug!(tables = tables.len(), bytes = html.len(), "Rendered HTML report");
        self.out.write_all(html.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
