//! Error enum
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Csv(csv::Error),
    Serde(serde_json::Error),
    UnknownLang(String),
    /// A language was requested from a [crate::context::Context] that did not load it.
    MissingLang(String),
    /// A cache file row could not be decoded. Loading aborts on the first bad row.
    CorruptCache {
        path: PathBuf,
        line: u64,
        reason: String,
    },
    /// An annotation event arrived in a state that can't handle it.
    InvalidState(String),
    Custom(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Csv(e) => write!(f, "csv error: {}", e),
            Error::Serde(e) => write!(f, "json error: {}", e),
            Error::UnknownLang(l) => write!(f, "unknown language tag: {}", l),
            Error::MissingLang(l) => write!(f, "language {} is not loaded", l),
            Error::CorruptCache { path, line, reason } => {
                write!(f, "corrupt cache file {:?} (line {}): {}", path, line, reason)
            }
            Error::InvalidState(s) => write!(f, "invalid state: {}", s),
            Error::Custom(s) => write!(f, "{}", s),
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

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
