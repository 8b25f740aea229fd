//! Tagged table writer.
//!
//! Output goes through a temporary file in the destination directory and is
//! only persisted under its final name once every row is written and flushed.
//! If anything fails mid-write the temp file is removed on drop, so a failed
//! run leaves neither a truncated output nor staging debris, and a
//! pre-existing output keeps its previous version.
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};
use log::debug;

use crate::error::Error;
use crate::identifiers::Identification;

use super::reader::InputRow;

/// Fixed output header, written even when there are no data rows.
pub const OUTPUT_HEADER: [&str; 6] = [
    "inv_nr",
    "page_no",
    "line_id",
    "lang",
    "confidence",
    "line_text",
];

/// Write the tagged table for `rows`/`ids` to `dst`.
///
/// Callers must ensure `rows` and `ids` have equal length; row `i` of the
/// output pairs input row `i` with identification `i`.
pub fn write_tagged(dst: &Path, rows: &[InputRow], ids: &[Identification]) -> Result<(), Error> {
    debug_assert_eq!(rows.len(), ids.len());

    let dir = dst.parent().unwrap_or_else(|| Path::new("."));
    let tmp = tempfile::Builder::new()
        .prefix(".linelid-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    debug!("staging {:?} in {:?}", dst, tmp.path());

    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(QuoteStyle::Never)
        .from_writer(tmp);

    writer.write_record(OUTPUT_HEADER)?;
    for (row, id) in rows.iter().zip(ids) {
        let prob = id.prob().to_string();
        writer.write_record([
            row.inv_nr.as_str(),
            row.page_no.as_str(),
            row.line_id.as_str(),
            id.label().code(),
            prob.as_str(),
            row.line_text.as_str(),
        ])?;
    }

    let tmp = writer
        .into_inner()
        .map_err(|e| Error::Custom(format!("could not flush {dst:?}: {e}")))?;
    tmp.persist(dst)
        .map_err(|e| Error::Io(e.error))?;
    Ok(())
}
