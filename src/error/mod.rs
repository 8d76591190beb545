//! Error handling for growth calculations.

pub mod util;

use std::io;
use std::path::PathBuf;

use crate::models::{MeasurementType, Sex};

/// Specialized error type for growth table loading and LMS calculations
#[derive(Debug, thiserror::Error)]
pub enum GrowthError {
    /// The requested measurement kind is not weight, length or head
    #[error("Invalid measurement type: {0}")]
    InvalidMeasurementType(String),

    /// The requested sex is not recognized
    #[error("Invalid sex: {0}")]
    InvalidSex(String),

    /// No parameter row exists for the requested age
    #[error("Age not found in data: {age} months ({kind}, {sex})")]
    AgeNotFound {
        kind: MeasurementType,
        sex: Sex,
        age: String,
    },

    /// A table builder was finished without one of the six tables
    #[error("Missing growth table for {kind} ({sex})")]
    MissingTable { kind: MeasurementType, sex: Sex },

    /// A table handed to the builder breaks the table invariants
    #[error("Invalid growth table for {kind} ({sex}): {message}")]
    InvalidTable {
        kind: MeasurementType,
        sex: Sex,
        message: String,
    },

    /// The LMS transform left its numeric domain
    #[error("Numeric domain error: {0}")]
    Domain(String),

    /// Caller input failed validation
    #[error("{0}")]
    InvalidInput(String),

    /// Parameter data could not be parsed
    #[error("Parse error in {source_name} at line {line}: {message}")]
    Parse {
        source_name: String,
        line: usize,
        message: String,
    },

    /// Error opening or reading a parameter file
    #[error("IO error: {context} ({})", .path.display())]
    Io {
        context: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration could not be read
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GrowthError {
    /// Create an age lookup error for an integer age
    #[must_use]
    pub fn age_not_found(kind: MeasurementType, sex: Sex, age: u32) -> Self {
        Self::AgeNotFound {
            kind,
            sex,
            age: age.to_string(),
        }
    }

    /// Create a parse error tied to a line of a named data source
    pub fn parse(source_name: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            line,
            message: message.into(),
        }
    }

    /// Create an IO error carrying the path and what the file was needed for
    pub fn io(context: impl Into<String>, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            path: path.into(),
            source,
        }
    }

    /// Whether the error was caused by the caller's arguments rather than the data source
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidMeasurementType(_)
                | Self::InvalidSex(_)
                | Self::AgeNotFound { .. }
                | Self::InvalidInput(_)
                | Self::Domain(_)
        )
    }
}

/// Result type for growth operations
pub type Result<T> = std::result::Result<T, GrowthError>;
