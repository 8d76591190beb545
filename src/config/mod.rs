//! Configuration for loading growth parameter tables.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::util::safe_read_to_string;
use crate::error::{GrowthError, Result};
use crate::models::{MeasurementType, Sex};

/// Environment variable pointing at a directory of WHO CSV files
pub const DATA_DIR_ENV: &str = "WHO_GROWTH_DATA_DIR";

/// File names of the six WHO percentile tables
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableFiles {
    pub boys_weight: String,
    pub girls_weight: String,
    pub boys_length: String,
    pub girls_length: String,
    pub boys_head: String,
    pub girls_head: String,
}

impl Default for TableFiles {
    fn default() -> Self {
        Self {
            boys_weight: "WHO-Boys-Weight-for-age-Percentiles.csv".to_string(),
            // The published girls weight file has a space where the others have a dash
            girls_weight: "WHO-Girls-Weight-for-age Percentiles.csv".to_string(),
            boys_length: "WHO-Boys-Length-for-age-Percentiles.csv".to_string(),
            girls_length: "WHO-Girls-Length-for-age-Percentiles.csv".to_string(),
            boys_head: "WHO-Boys-Head-Circumference-for-age-Percentiles.csv".to_string(),
            girls_head: "WHO-Girls-Head-Circumference-for-age-Percentiles.csv".to_string(),
        }
    }
}

impl TableFiles {
    /// File name holding the table for one (kind, sex) pair
    #[must_use]
    pub fn file_name(&self, kind: MeasurementType, sex: Sex) -> &str {
        match (kind, sex) {
            (MeasurementType::Weight, Sex::Male) => &self.boys_weight,
            (MeasurementType::Weight, Sex::Female) => &self.girls_weight,
            (MeasurementType::Length, Sex::Male) => &self.boys_length,
            (MeasurementType::Length, Sex::Female) => &self.girls_length,
            (MeasurementType::Head, Sex::Male) => &self.boys_head,
            (MeasurementType::Head, Sex::Female) => &self.girls_head,
        }
    }
}

/// Configuration for the growth table loader
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GrowthConfig {
    /// Directory holding the CSV files; `None` uses the embedded WHO data
    pub data_dir: Option<PathBuf>,
    /// File names inside `data_dir`
    pub files: TableFiles,
    /// Require every table to cover each month 0..=24 exactly once
    pub strict_ages: bool,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            files: TableFiles::default(),
            strict_ages: true,
        }
    }
}

impl GrowthConfig {
    /// Configuration reading CSV files from a directory
    #[must_use]
    pub fn with_data_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(dir.into()),
            ..Self::default()
        }
    }

    /// Default configuration, with `data_dir` taken from `WHO_GROWTH_DATA_DIR` when set
    #[must_use]
    pub fn from_env() -> Self {
        match env::var(DATA_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => Self::with_data_dir(dir),
            _ => Self::default(),
        }
    }

    /// Read a JSON configuration file; missing fields fall back to defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = safe_read_to_string(path, "growth configuration")?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| GrowthError::Config(e.to_string()))
    }

    /// Full path of the file for one (kind, sex) pair, if a data directory is set
    #[must_use]
    pub fn table_path(&self, kind: MeasurementType, sex: Sex) -> Option<PathBuf> {
        self.data_dir
            .as_ref()
            .map(|dir| dir.join(self.files.file_name(kind, sex)))
    }
}

impl fmt::Display for GrowthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Growth Configuration:")?;
        match &self.data_dir {
            Some(dir) => writeln!(f, "  Data Directory: {}", dir.display())?,
            None => writeln!(f, "  Data Directory: <embedded WHO tables>")?,
        }
        writeln!(f, "  Strict Ages: {}", self.strict_ages)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_embedded_data() {
        let config = GrowthConfig::default();
        assert!(config.data_dir.is_none());
        assert!(config.strict_ages);
        assert!(config.table_path(MeasurementType::Weight, Sex::Male).is_none());
    }

    #[test]
    fn test_table_path_joins_file_name() {
        let config = GrowthConfig::with_data_dir("/data/who");
        assert_eq!(
            config.table_path(MeasurementType::Weight, Sex::Female).unwrap(),
            PathBuf::from("/data/who/WHO-Girls-Weight-for-age Percentiles.csv")
        );
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GrowthConfig::from_json_str(
            r#"{"data_dir": "/tmp/who", "files": {"boys_head": "head.csv"}}"#,
        )
        .unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/who")));
        assert_eq!(config.files.boys_head, "head.csv");
        assert_eq!(config.files.boys_weight, TableFiles::default().boys_weight);
        assert!(config.strict_ages);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = GrowthConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, GrowthError::Config(_)));
    }
}
