//! Validation of caller input before it reaches the calculator
//!
//! Text-based front ends (forms, the command line) parse their fields
//! through [`GrowthRequest::parse`] and get the same error kinds the
//! calculator itself reports.

use crate::error::{GrowthError, Result};
use crate::models::{MeasurementType, Sex};
use crate::table::MAX_AGE_MONTHS;

pub const AGE_RANGE_MESSAGE: &str = "Please enter a valid age between 0 and 24 months";
pub const PERCENTILE_RANGE_MESSAGE: &str = "Please enter a valid percentile between 1 and 99";
pub const MEASUREMENT_MESSAGE: &str = "Please enter a valid positive measurement";

/// Check an age and a requested percentile
pub fn validate_request(age_months: u32, percentile: f64) -> Result<()> {
    if age_months > MAX_AGE_MONTHS {
        return Err(GrowthError::InvalidInput(AGE_RANGE_MESSAGE.to_string()));
    }
    validate_percentile(percentile)
}

pub fn validate_percentile(percentile: f64) -> Result<()> {
    if (1.0..=99.0).contains(&percentile) {
        Ok(())
    } else {
        Err(GrowthError::InvalidInput(PERCENTILE_RANGE_MESSAGE.to_string()))
    }
}

pub fn validate_measurement(value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GrowthError::InvalidInput(MEASUREMENT_MESSAGE.to_string()))
    }
}

/// A request parsed from text fields
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthRequest {
    pub kind: MeasurementType,
    pub sex: Sex,
    pub age_months: u32,
    /// Percentile or measurement, depending on the calculation
    pub value: f64,
}

impl GrowthRequest {
    /// Parse the four text fields of a calculation request
    ///
    /// Ages must be whole months; `6.5` is reported as
    /// [`GrowthError::AgeNotFound`] because the tables hold no such row.
    pub fn parse(kind: &str, sex: &str, age: &str, value: &str) -> Result<Self> {
        let kind: MeasurementType = kind.parse()?;
        let sex: Sex = sex.parse()?;
        let age_months = parse_age_months(age, kind, sex)?;
        let value = value
            .trim()
            .parse::<f64>()
            .map_err(|_| GrowthError::InvalidInput(format!("Not a number: {}", value.trim())))?;

        Ok(Self {
            kind,
            sex,
            age_months,
            value,
        })
    }

    /// Validate the request as a percentile-to-measurement calculation
    pub fn validate_as_percentile(&self) -> Result<()> {
        validate_request(self.age_months, self.value)
    }

    /// Validate the request as a measurement-to-percentile calculation
    pub fn validate_as_measurement(&self) -> Result<()> {
        if self.age_months > MAX_AGE_MONTHS {
            return Err(GrowthError::InvalidInput(AGE_RANGE_MESSAGE.to_string()));
        }
        validate_measurement(self.value)
    }
}

/// Parse an age in months from text
pub fn parse_age_months(text: &str, kind: MeasurementType, sex: Sex) -> Result<u32> {
    let text = text.trim();
    if let Ok(age) = text.parse::<u32>() {
        return Ok(age);
    }

    match text.parse::<f64>() {
        Ok(age) if age >= 0.0 && age.fract() == 0.0 && age <= f64::from(u32::MAX) => {
            Ok(age as u32)
        }
        Ok(_) => Err(GrowthError::AgeNotFound {
            kind,
            sex,
            age: text.to_string(),
        }),
        Err(_) => Err(GrowthError::InvalidInput(AGE_RANGE_MESSAGE.to_string())),
    }
}
