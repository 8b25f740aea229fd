//! TSV reading/writing for transcription line tables.
pub mod reader;
pub mod writer;

pub use reader::InputRow;
pub use reader::LinesReader;
pub use writer::write_tagged;
pub use writer::OUTPUT_HEADER;
