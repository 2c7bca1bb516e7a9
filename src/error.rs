//! Error types for table conversion

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("invalid table: {0}")]
    Validation(String),

    #[error("{pattern:?} is an ambiguous column: select one of {matches:?}")]
    AmbiguousColumn {
        pattern: String,
        matches: Vec<String>,
    },

    #[error("{pattern:?} matches no columns: {available:?}")]
    NoSuchColumn {
        pattern: String,
        available: Vec<String>,
    },

    #[error("{name:?} is an ambiguous format: select one of {matches:?}")]
    AmbiguousFormat { name: String, matches: Vec<String> },

    #[error("{name:?} is an unsupported format: choose from {available:?}")]
    UnknownFormat {
        name: String,
        available: Vec<String>,
    },

    #[error("format {format:?} cannot {direction}")]
    UnsupportedDirection {
        format: String,
        direction: crate::registry::Direction,
    },

    #[error("cannot write named rows without an order for columns")]
    MissingColumnOrder,

    #[error("malformed {format} input: {message}")]
    MalformedInput {
        format: &'static str,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TableError {
    pub(crate) fn malformed(format: &'static str, err: impl std::fmt::Display) -> Self {
        TableError::MalformedInput {
            format,
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TableError>;
