//! A Rust library for infant growth calculations based on the WHO Child
//! Growth Standards.
//!
//! Converts between a desired percentile and a weight, length or head
//! circumference for a given age (0 to 24 months) and sex, using the LMS
//! method on the published per-month parameter tables.
//!
//! ```rust
//! use who_growth::{GrowthCalculator, MeasurementType, Sex};
//!
//! let calc = GrowthCalculator::who();
//! let weight = calc.calculate_measurement(6, Sex::Male, 50.0, MeasurementType::Weight)?;
//! assert_eq!(weight, 7.93);
//!
//! let percentile = calc.calculate_percentile(6, Sex::Male, 7.934, MeasurementType::Weight)?;
//! assert_eq!(percentile, 50.0);
//! # Ok::<(), who_growth::GrowthError>(())
//! ```

pub mod algorithm;
pub mod config;
pub mod error;
pub mod format;
pub mod loader;
pub mod models;
pub mod table;
pub mod utils;
pub mod validation;

// Core types
pub use config::GrowthConfig;
pub use error::{GrowthError, Result};
pub use models::{GrowthParameterRow, MeasurementType, Sex};
pub use table::{GrowthTable, GrowthTableBuilder};

// Calculations
pub use algorithm::{
    GrowthCalculator, PercentileAssessment, calculate_measurement, calculate_percentile,
    percentile_to_z_score, z_score_to_percentile,
};
pub use format::percentile_description;

// Loading
pub use loader::{load_table, parse_csv};
