// ============================================================
// CSV WRITER
// ============================================================
// Build CSV text with per-column quoting and a UTF-8 BOM

use std::borrow::Cow;

use crate::domain::review::UTF8_BOM;

/// A single CSV cell and how it is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvCell<'a> {
    /// Written verbatim
    Plain(Cow<'a, str>),

    /// Wrapped in double quotes, inner quotes doubled
    Quoted(Cow<'a, str>),
}

impl<'a> CsvCell<'a> {
    pub fn plain(value: impl Into<Cow<'a, str>>) -> Self {
        CsvCell::Plain(value.into())
    }

    pub fn quoted(value: impl Into<Cow<'a, str>>) -> Self {
        CsvCell::Quoted(value.into())
    }

    /// Unescaped cell value
    pub fn value(&self) -> &str {
        match self {
            CsvCell::Plain(value) | CsvCell::Quoted(value) => value,
        }
    }

    fn write_to(&self, out: &mut String) {
        match self {
            CsvCell::Plain(value) => out.push_str(value),
            CsvCell::Quoted(value) => out.push_str(&quote_field(value)),
        }
    }
}

/// Quote a field per RFC 4180: wrap in `"` and double every inner `"`
pub fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

const DELIMITER: char = ',';

/// Written after every row, header included
const TERMINATOR: char = '\n';

/// Incremental CSV text builder
pub struct CsvWriter {
    buffer: String,

    /// Data rows written so far
    rows: usize,
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvWriter {
    /// Create a writer whose output starts with the UTF-8 BOM
    pub fn new() -> Self {
        let mut buffer = String::new();
        buffer.push(UTF8_BOM);
        Self { buffer, rows: 0 }
    }

    /// Write the header row; labels are written verbatim
    pub fn write_header<S: AsRef<str>>(&mut self, labels: &[S]) {
        let cells: Vec<CsvCell<'_>> = labels
            .iter()
            .map(|label| CsvCell::plain(label.as_ref()))
            .collect();
        self.write_cells(&cells);
    }

    /// Write one data row
    pub fn write_row(&mut self, cells: &[CsvCell<'_>]) {
        self.write_cells(cells);
        self.rows += 1;
    }

    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Finish and return the CSV text
    pub fn finish(self) -> String {
        self.buffer
    }

    fn write_cells(&mut self, cells: &[CsvCell<'_>]) {
        for (idx, cell) in cells.iter().enumerate() {
            if idx > 0 {
                self.buffer.push(DELIMITER);
            }
            cell.write_to(&mut self.buffer);
        }
        self.buffer.push(TERMINATOR);
    }
}
