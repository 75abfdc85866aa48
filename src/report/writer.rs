use std::io::{self, Write};

use crate::models::{OutputFormat, ReportRow};
use super::row::LABELS;

/// Quote a CSV cell, doubling embedded quotes
pub fn format_cell(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Join already formatted cells into one CSV line (without newline)
pub fn format_line<S: AsRef<str>>(cells: &[S]) -> String {
    cells
        .iter()
        .map(|c| format_cell(c.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Streams report rows to an output, flushing after each one
pub struct ReportWriter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Header line; JSON lines output has none
    pub fn write_header(&mut self) -> io::Result<()> {
        if self.format == OutputFormat::Csv {
            writeln!(self.out, "{}", LABELS.join(","))?;
            self.out.flush()?;
        }
        Ok(())
    }

    pub fn write_row(&mut self, row: &ReportRow) -> io::Result<()> {
        match self.format {
            OutputFormat::Csv => writeln!(self.out, "{}", format_line(&row.cells()))?,
            OutputFormat::JsonLines => {
                serde_json::to_writer(&mut self.out, row)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
