//! Utility functions for error handling
//!
//! This module provides file helpers that attach the path and purpose
//! to any IO failure.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{GrowthError, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.is_file() {
        return Err(GrowthError::io(
            format!("File not found, needed for: {purpose}"),
            path,
            io::Error::new(io::ErrorKind::NotFound, "not a file"),
        ));
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => "Permission denied - check file permissions".to_string(),
            _ => format!("Failed to open file for: {purpose}"),
        };
        GrowthError::io(context, path, e)
    })
}

/// Check that a directory exists and is readable
pub fn validate_directory(path: &Path, purpose: &str) -> Result<()> {
    if !path.is_dir() {
        return Err(GrowthError::io(
            format!("Directory not found, needed for: {purpose}"),
            path,
            io::Error::new(io::ErrorKind::NotFound, "not a directory"),
        ));
    }

    fs::read_dir(path)
        .map(|_| ())
        .map_err(|e| GrowthError::io(format!("Failed to access directory for: {purpose}"), path, e))
}

/// Safely read a file to string with rich error information
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    let mut file = safe_open_file(path, purpose)?;

    let mut content = String::new();
    io::Read::read_to_string(&mut file, &mut content).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::InvalidData => {
                "File contains invalid UTF-8 data - cannot read as text".to_string()
            }
            _ => format!("Failed to read file content for: {purpose}"),
        };
        GrowthError::io(context, path, e)
    })?;

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reports_path() {
        let path = Path::new("/definitely/not/here.csv");
        let err = safe_read_to_string(path, "growth table").unwrap_err();
        match err {
            GrowthError::Io { path: p, context, .. } => {
                assert_eq!(p, path);
                assert!(context.contains("growth table"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_directory_rejects_file() {
        let dir = std::env::temp_dir().join("who_growth_util_test");
        fs::create_dir_all(&dir).unwrap();
        let file = dir.join("plain.txt");
        fs::write(&file, "x").unwrap();

        assert!(validate_directory(&dir, "data").is_ok());
        assert!(validate_directory(&file, "data").is_err());
    }
}
