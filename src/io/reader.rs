//! Transcription table reader.
//!
//! Source tables are tab-delimited with a mandatory header row:
//! `inv_nr  page_no  line_id  line_text`. Quoting carries no meaning in this
//! format, so it is disabled outright.
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use log::warn;

use crate::error::Error;

/// One data row of a source table.
///
/// All fields are opaque strings; `line_text` may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    pub inv_nr: String,
    pub page_no: String,
    pub line_id: String,
    pub line_text: String,
}

impl InputRow {
    /// Best-effort conversion from a raw record.
    ///
    /// Short records are padded with empty fields. Surplus fields (an
    /// embedded tab in the transcription) are folded back into `line_text`
    /// with the tab replaced by a single space.
    fn from_record(record: &StringRecord) -> Self {
        let field = |i: usize| record.get(i).unwrap_or_default().to_string();

        let mut line_text = field(3);
        if record.len() > 4 {
            for extra in record.iter().skip(4) {
                line_text.push(' ');
                line_text.push_str(extra);
            }
        }

        Self {
            inv_nr: field(0),
            page_no: field(1),
            line_id: field(2),
            line_text,
        }
    }
}

/// Reader over one source table.
pub struct LinesReader {
    path: PathBuf,
}

impl LinesReader {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Read all data rows in file order, header excluded.
    ///
    /// Malformed rows are tolerated (see [InputRow::from_record]) but logged,
    /// keeping row correspondence with the source file intact.
    pub fn rows(&self) -> Result<Vec<InputRow>, Error> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .quoting(false)
            .flexible(true)
            .has_headers(true)
            .from_path(&self.path)?;

        let mut rows = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record?;
            if record.len() != 4 {
                // +2: 1-based, plus the header row
                warn!(
                    "{:?} row {}: expected 4 columns, got {}",
                    self.path,
                    idx + 2,
                    record.len()
                );
            }
            rows.push(InputRow::from_record(&record));
        }
        Ok(rows)
    }
}
