//! Error enum
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Csv(csv::Error),
    /// the external classifier command could not be found/spawned.
    MissingDependency(String),
    /// the external classifier ran but broke its contract
    /// (abnormal exit, unparseable output, out-of-range confidence).
    Classifier(String),
    /// the classifier returned a label outside the candidate set.
    UnknownLang(String),
    /// the classifier returned a different number of results than input lines.
    RowCountMismatch {
        path: PathBuf,
        expected: usize,
        got: usize,
    },
    Custom(String),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Csv(e) => write!(f, "tsv error: {e}"),
            Error::MissingDependency(cmd) => {
                write!(f, "classifier command not found: {cmd}")
            }
            Error::Classifier(msg) => write!(f, "classifier failure: {msg}"),
            Error::UnknownLang(label) => write!(f, "unknown language label: {label}"),
            Error::RowCountMismatch {
                path,
                expected,
                got,
            } => write!(
                f,
                "row count mismatch on {path:?}: {expected} input lines, {got} classifications"
            ),
            Error::Custom(msg) => write!(f, "{msg}"),
            Error::Glob(e) => write!(f, "glob error: {e}"),
            Error::GlobPattern(e) => write!(f, "glob pattern error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
