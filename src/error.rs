//! Error types for flow log tagging.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which input file an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFile {
    Lookup,
    FlowLog,
}

impl fmt::Display for InputFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lookup => f.write_str("Lookup file"),
            Self::FlowLog => f.write_str("Flow log file"),
        }
    }
}

/// All errors produced while loading, processing or reporting.
#[derive(Error, Debug)]
pub enum FlowLogError {
    /// An input file does not exist.
    #[error("{file} not found: {}", .path.display())]
    NotFound { file: InputFile, path: PathBuf },

    /// A version 2 record with enough fields carried a non-numeric destination port.
    #[error("Invalid port number '{value}' at line {line}")]
    InvalidPort { value: String, line: usize },

    /// An input file exists but could not be opened or read.
    #[error("Failed to read {file} {}: {source}", .path.display())]
    Read {
        file: InputFile,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The lookup file is not decodable as CSV.
    #[error("Failed to parse lookup CSV {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The report could not be written.
    #[error("Failed to write report {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FlowLogError {
    /// Maps an I/O error from opening `path` to `NotFound` or `Read`.
    pub(crate) fn open(file: InputFile, path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { file, path }
        } else {
            Self::Read { file, path, source }
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FlowLogError>;
