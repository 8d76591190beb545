//! Measurement and percentile calculations against a growth table

use serde::Serialize;

use crate::algorithm::lms::{lms_value, lms_z_score};
use crate::algorithm::zscore::{percentile_to_z_score, round_half_up, z_score_to_percentile};
use crate::error::{GrowthError, Result};
use crate::format::percentile_description;
use crate::models::{GrowthParameterRow, MeasurementType, Sex};
use crate::table::GrowthTable;

/// LMS calculator bound to a fully built [`GrowthTable`]
#[derive(Debug, Clone, Copy)]
pub struct GrowthCalculator<'a> {
    table: &'a GrowthTable,
}

/// Where one observed measurement sits in the reference distribution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercentileAssessment {
    pub kind: MeasurementType,
    pub sex: Sex,
    pub age_months: u32,
    pub measurement: f64,
    pub z_score: f64,
    pub percentile: f64,
    pub description: String,
}

impl<'a> GrowthCalculator<'a> {
    #[must_use]
    pub const fn new(table: &'a GrowthTable) -> Self {
        Self { table }
    }

    /// Calculator over the embedded WHO tables
    #[must_use]
    pub fn who() -> GrowthCalculator<'static> {
        GrowthCalculator::new(GrowthTable::who())
    }

    #[must_use]
    pub const fn table(&self) -> &'a GrowthTable {
        self.table
    }

    fn row(&self, age_months: u32, sex: Sex, kind: MeasurementType) -> Result<&'a GrowthParameterRow> {
        self.table.row(kind, sex, age_months)
    }

    /// Measurement at the given percentile, rounded to two decimals
    ///
    /// # Errors
    /// * [`GrowthError::AgeNotFound`] when the table has no row for the age
    /// * [`GrowthError::Domain`] when the percentile lies outside (0, 100) or
    ///   the LMS power is undefined for it
    pub fn calculate_measurement(
        &self,
        age_months: u32,
        sex: Sex,
        percentile: f64,
        kind: MeasurementType,
    ) -> Result<f64> {
        let row = self.row(age_months, sex, kind)?;

        let z = percentile_to_z_score(percentile);
        if !z.is_finite() {
            return Err(GrowthError::Domain(format!(
                "percentile must lie strictly between 0 and 100, got {percentile}"
            )));
        }

        Ok(round_half_up(lms_value(row, z)?, 2))
    }

    /// Unrounded z-score of a measurement
    pub fn z_score_for(
        &self,
        age_months: u32,
        sex: Sex,
        measurement: f64,
        kind: MeasurementType,
    ) -> Result<f64> {
        let row = self.row(age_months, sex, kind)?;
        lms_z_score(row, measurement)
    }

    /// Percentile of a measurement, rounded to one decimal and clamped to [1, 99]
    pub fn calculate_percentile(
        &self,
        age_months: u32,
        sex: Sex,
        measurement: f64,
        kind: MeasurementType,
    ) -> Result<f64> {
        let z = self.z_score_for(age_months, sex, measurement, kind)?;
        Ok(z_score_to_percentile(z))
    }

    /// Z-score, percentile and description of a measurement in one call
    pub fn assess(
        &self,
        age_months: u32,
        sex: Sex,
        measurement: f64,
        kind: MeasurementType,
    ) -> Result<PercentileAssessment> {
        let z_score = self.z_score_for(age_months, sex, measurement, kind)?;
        let percentile = z_score_to_percentile(z_score);

        Ok(PercentileAssessment {
            kind,
            sex,
            age_months,
            measurement,
            z_score,
            percentile,
            description: percentile_description(percentile),
        })
    }
}
