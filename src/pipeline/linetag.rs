//! Line tagging pipeline.
//!
//! Takes transcription tables (`<name>-lines.tsv`), runs every `line_text`
//! through the language identifier and writes `<name>-lines.lang.tsv` next to
//! the source, with `lang` and `confidence` columns inserted.
//!
//! # Processing
//! 1. All data rows of a file are read in file order (header dropped).
//! 1. The free-text column is sent to the identifier in one ordered batch.
//! 1. The result count is checked against the row count; a mismatch fails the
//!    file instead of silently shifting every subsequent row.
//! 1. Identifying columns, identification and the original text are merged
//!    and written atomically.
//!
//! Files are unrelated documents, so they are processed in parallel and
//! failures stay file-scoped: one bad file does not abort its siblings, but
//! any failure makes the whole run report an error.
use std::path::{Path, PathBuf};

use itertools::{Either, Itertools};
use log::{debug, error, info};
use rayon::prelude::*;

use crate::error::Error;
use crate::identifiers::Identifier;
use crate::io::{write_tagged, LinesReader};

/// Naming convention for source tables.
pub const INPUT_PATTERN: &str = "*-lines.tsv";

pub struct LineTag<I> {
    paths: Vec<PathBuf>,
    identifier: I,
}

impl<I> LineTag<I>
where
    I: Identifier + Sync,
{
    /// Pipeline over an explicit list of source tables.
    pub fn new(paths: Vec<PathBuf>, identifier: I) -> Self {
        Self { paths, identifier }
    }

    /// Pipeline over every `*-lines.tsv` in `src`.
    ///
    /// Discovery order is made deterministic by sorting; already produced
    /// `.lang.tsv` files never match the pattern.
    pub fn discover(src: &Path, identifier: I) -> Result<Self, Error> {
        let pattern = src.join(INPUT_PATTERN);
        let pattern = pattern
            .to_str()
            .ok_or_else(|| Error::Custom(format!("invalid source path: {src:?}")))?;

        let mut paths = glob::glob(pattern)?.collect::<Result<Vec<_>, _>>()?;
        paths.sort();
        debug!("discovered {} source file(s) in {:?}", paths.len(), src);
        Ok(Self::new(paths, identifier))
    }

    /// Derive the output path for a source table.
    pub fn output_path(path: &Path) -> PathBuf {
        match path.to_str() {
            Some(s) if s.ends_with(".tsv") => {
                PathBuf::from(format!("{}.lang.tsv", &s[..s.len() - 4]))
            }
            _ => path.with_extension("lang.tsv"),
        }
    }

    /// Transform one file. Atomic: either the full output appears under its
    /// final name, or nothing changes on disk.
    fn process_file(&self, path: &Path) -> Result<PathBuf, Error> {
        info!("working on {:?}", path);

        let rows = LinesReader::new(path).rows()?;
        let texts: Vec<String> = rows.iter().map(|row| row.line_text.clone()).collect();

        let ids = self.identifier.identify(&texts)?;
        if ids.len() != rows.len() {
            return Err(Error::RowCountMismatch {
                path: path.to_path_buf(),
                expected: rows.len(),
                got: ids.len(),
            });
        }

        let dst = Self::output_path(path);
        write_tagged(&dst, &rows, &ids)?;
        info!("wrote {:?} ({} rows)", dst, rows.len());
        Ok(dst)
    }
}

impl<I> super::Pipeline<Vec<PathBuf>> for LineTag<I>
where
    I: Identifier + Sync,
{
    /// Run the pipeline, returning the paths of the produced files.
    fn run(&self) -> Result<Vec<PathBuf>, Error> {
        // fail before touching any output if the classifier is unusable
        self.identifier.check()?;

        let results: Vec<(PathBuf, Result<PathBuf, Error>)> = self
            .paths
            .par_iter()
            .map(|path| (path.clone(), self.process_file(path)))
            .collect();

        let (mut written, failures): (Vec<PathBuf>, Vec<(PathBuf, Error)>) =
            results.into_iter().partition_map(|(path, res)| match res {
                Ok(dst) => Either::Left(dst),
                Err(e) => Either::Right((path, e)),
            });

        for (path, e) in &failures {
            error!("failed on {:?}: {}", path, e);
        }

        if failures.is_empty() {
            written.sort();
            Ok(written)
        } else {
            Err(Error::Custom(format!(
                "{} of {} file(s) failed",
                failures.len(),
                self.paths.len()
            )))
        }
    }
}
