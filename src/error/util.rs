//! Utility functions for error handling
//!
//! Helpers that open input files and check data directories, turning the
//! raw IO failures into `HospitalError::FileAccess` with a useful message.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{HospitalError, Result};

/// Open a file, describing why it was needed if that fails
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(HospitalError::file_access(
            path,
            format!("file not found (needed for {purpose})"),
        ));
    }

    if !path.is_file() {
        return Err(HospitalError::file_access(
            path,
            format!("path is not a file (expected a file for {purpose})"),
        ));
    }

    fs::File::open(path).map_err(|e| {
        let message = match e.kind() {
            io::ErrorKind::PermissionDenied => "permission denied - check file permissions".to_string(),
            io::ErrorKind::NotFound => {
                "file not found - it may have been deleted during operation".to_string()
            }
            _ => format!("failed to open file for {purpose}"),
        };
        HospitalError::file_access_with_source(path, message, e)
    })
}

/// Check that a directory exists and is readable
pub fn validate_directory(path: &Path, purpose: &str) -> Result<()> {
    if !path.exists() {
        return Err(HospitalError::file_access(
            path,
            format!("directory not found (needed for {purpose})"),
        ));
    }

    if !path.is_dir() {
        return Err(HospitalError::file_access(
            path,
            format!("path is not a directory (expected a directory for {purpose})"),
        ));
    }

    match fs::read_dir(path) {
        Ok(_) => Ok(()),
        Err(e) => {
            let message = match e.kind() {
                io::ErrorKind::PermissionDenied => {
                    "permission denied - check directory permissions".to_string()
                }
                _ => format!("failed to read directory for {purpose}"),
            };
            Err(HospitalError::file_access_with_source(path, message, e))
        }
    }
}
