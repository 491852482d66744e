//! Error handling for the hospital model and its loaders.

pub mod util;

use std::io;
use std::path::{Path, PathBuf};

use crate::models::DoctorId;

/// Errors that can occur while loading or querying a hospital snapshot
#[derive(Debug, thiserror::Error)]
pub enum HospitalError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A file or directory could not be accessed
    #[error("Cannot access {}: {message}", path.display())]
    FileAccess {
        /// Path that was being accessed
        path: PathBuf,
        /// What went wrong
        message: String,
        /// Underlying IO error, if any
        #[source]
        source: Option<io::Error>,
    },

    /// A record in an input file could not be parsed
    #[error("Parse error in {file} at line {line}: {message}")]
    Parse {
        /// Name of the file being parsed
        file: String,
        /// 1-based line number
        line: usize,
        /// Description of the problem
        message: String,
    },

    /// A month label that is not one of `Jan`..`Dec`
    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    /// A visit record violating its date invariant
    #[error("Invalid visit: {0}")]
    InvalidVisit(String),

    /// A prescription rate was requested for a doctor with no prescriptions
    #[error("No prescriptions recorded for doctor {doctor}")]
    NoPrescriptions {
        /// The doctor the rate was requested for
        doctor: DoctorId,
    },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error reading a JSON configuration file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HospitalError {
    /// Create a file access error without an underlying IO error
    pub fn file_access(path: &Path, message: impl Into<String>) -> Self {
        Self::FileAccess {
            path: path.to_path_buf(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a file access error wrapping an IO error
    pub fn file_access_with_source(path: &Path, message: impl Into<String>, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.to_path_buf(),
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a parse error for a line of a named file
    pub fn parse(file: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            file: file.into(),
            line,
            message: message.into(),
        }
    }
}

/// Result type for hospital operations
pub type Result<T> = std::result::Result<T, HospitalError>;
