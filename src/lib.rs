//! # linelid
//!
//! Per-line language identification for transcription TSV files.
//!
//! Source tables hold one transcribed text line per row
//! (`inv_nr  page_no  line_id  line_text`); the pipeline streams the free-text
//! column through an external line classifier restricted to a fixed candidate
//! set, and writes a sibling table with `lang` and `confidence` columns
//! inserted. Each file's transform is atomic: a failed file leaves no partial
//! output and no staging files behind.
//!
//! The crate can be used as a tool (`linelid tag <dir>`) or as a lib, by
//! plugging an [identifiers::Identifier] implementation into
//! [pipeline::LineTag].
pub mod cli;
pub mod error;
pub mod identifiers;
pub mod io;
pub mod lang;
pub mod pipeline;
