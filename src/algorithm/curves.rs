//! Percentile curves across the age range, as drawn on growth charts

use serde::Serialize;

use crate::algorithm::lms::lms_value;
use crate::algorithm::zscore::{percentile_to_z_score, round_half_up};
use crate::error::{GrowthError, Result};
use crate::format::percentile_description;
use crate::models::{MeasurementType, Sex};
use crate::table::GrowthTable;

/// Percentiles shown on the reference growth charts
pub const CHART_PERCENTILES: [f64; 5] = [5.0, 25.0, 50.0, 75.0, 95.0];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub age_months: u32,
    pub value: f64,
}

/// One percentile line of a growth chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercentileCurve {
    pub percentile: f64,
    pub label: String,
    pub points: Vec<CurvePoint>,
}

/// Measurement at `percentile` for every age in the table
pub fn percentile_curve(
    table: &GrowthTable,
    kind: MeasurementType,
    sex: Sex,
    percentile: f64,
) -> Result<Vec<CurvePoint>> {
    let z = percentile_to_z_score(percentile);
    if !z.is_finite() {
        return Err(GrowthError::Domain(format!(
            "percentile must lie strictly between 0 and 100, got {percentile}"
        )));
    }

    table
        .rows(kind, sex)
        .iter()
        .map(|row| {
            lms_value(row, z).map(|value| CurvePoint {
                age_months: row.age_months,
                value: round_half_up(value, 2),
            })
        })
        .collect()
}

/// The standard chart curves (5th, 25th, 50th, 75th and 95th percentiles)
pub fn reference_curves(table: &GrowthTable, kind: MeasurementType, sex: Sex) -> Result<Vec<PercentileCurve>> {
    CHART_PERCENTILES
        .iter()
        .map(|&percentile| {
            Ok(PercentileCurve {
                percentile,
                label: percentile_description(percentile),
                points: percentile_curve(table, kind, sex, percentile)?,
            })
        })
        .collect()
}
