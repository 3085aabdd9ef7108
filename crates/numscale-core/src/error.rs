//! Error types for numscale-core

use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for numscale-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in numscale-core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file could not be found
    #[error("configuration file not found: {}", path.display())]
    ConfigNotFound {
        /// Path that was checked
        path: PathBuf,
    },

    /// Data file could not be found
    #[error("data file not found: {}", path.display())]
    DataNotFound {
        /// Path that was checked
        path: PathBuf,
    },

    /// Failed to parse YAML configuration
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// A non-blank line in the data file is not a floating-point literal
    #[error("invalid numeric data at line {line} ('{value}'): {source}")]
    InvalidData {
        /// 1-based line number in the data file
        line: usize,
        /// The offending line, trimmed
        value: String,
        /// Underlying parse failure
        source: ParseFloatError,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required file does not exist
    NotFound,
    /// File content is not in the expected format (YAML or numeric lines)
    MalformedData,
    /// Any other read or write failure
    Io,
}

impl Error {
    /// Classify this error as not-found, malformed data, or I/O
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ConfigNotFound { .. } | Error::DataNotFound { .. } => ErrorKind::NotFound,
            Error::ConfigParse(_) | Error::InvalidData { .. } => ErrorKind::MalformedData,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}
