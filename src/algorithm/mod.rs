//! LMS statistics engine
//!
//! Pure functions over an immutable [`GrowthTable`](crate::table::GrowthTable):
//! percentile and z-score conversions, the LMS transform and its inverse,
//! and percentile curves for charting. Nothing here performs I/O or keeps
//! state between calls.

pub mod calculator;
pub mod curves;
pub mod lms;
pub mod zscore;

pub use calculator::{GrowthCalculator, PercentileAssessment};
pub use curves::{CHART_PERCENTILES, CurvePoint, PercentileCurve, percentile_curve, reference_curves};
pub use zscore::{percentile_to_z_score, z_score_to_percentile};

use crate::error::Result;
use crate::models::{MeasurementType, Sex};

/// Measurement at a percentile, using the embedded WHO tables
pub fn calculate_measurement(
    age_months: u32,
    sex: Sex,
    percentile: f64,
    kind: MeasurementType,
) -> Result<f64> {
    GrowthCalculator::who().calculate_measurement(age_months, sex, percentile, kind)
}

/// Percentile of a measurement, using the embedded WHO tables
pub fn calculate_percentile(
    age_months: u32,
    sex: Sex,
    measurement: f64,
    kind: MeasurementType,
) -> Result<f64> {
    GrowthCalculator::who().calculate_percentile(age_months, sex, measurement, kind)
}
