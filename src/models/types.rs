//! Common domain type definitions
//!
//! This module contains the enum keys of the growth tables and the
//! per-age LMS parameter row.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GrowthError;

/// Sex of the child, selecting the male or female reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male reference population
    Male,
    /// Female reference population
    Female,
}

impl Sex {
    /// Both sexes in table order
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Sex {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" | "boy" => Ok(Self::Male),
            "f" | "female" | "girl" => Ok(Self::Female),
            other => Err(GrowthError::InvalidSex(other.to_string())),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of anthropometric measurement covered by the growth standards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementType {
    /// Weight-for-age, in kilograms
    Weight,
    /// Length-for-age, in centimetres
    Length,
    /// Head circumference-for-age, in centimetres
    Head,
}

impl MeasurementType {
    /// All measurement kinds in table order
    pub const ALL: [Self; 3] = [Self::Weight, Self::Length, Self::Head];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Length => "length",
            Self::Head => "head",
        }
    }

    /// Metric unit the reference tables are expressed in
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Weight => "kg",
            Self::Length | Self::Head => "cm",
        }
    }

    /// Human-readable axis label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weight => "Weight (kg)",
            Self::Length => "Length (cm)",
            Self::Head => "Head Circumference (cm)",
        }
    }
}

impl FromStr for MeasurementType {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weight" => Ok(Self::Weight),
            "length" | "height" => Ok(Self::Length),
            "head" | "head_circumference" | "head-circumference" => Ok(Self::Head),
            _ => Err(GrowthError::InvalidMeasurementType(s.to_string())),
        }
    }
}

impl fmt::Display for MeasurementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// LMS parameters of the measurement distribution at one age
///
/// `l` is the Box-Cox power, `m` the median and `s` the coefficient of variation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthParameterRow {
    /// Age in completed months
    pub age_months: u32,
    /// Box-Cox power (skewness)
    pub l: f64,
    /// Median
    pub m: f64,
    /// Coefficient of variation
    pub s: f64,
}

impl GrowthParameterRow {
    #[must_use]
    pub const fn new(age_months: u32, l: f64, m: f64, s: f64) -> Self {
        Self { age_months, l, m, s }
    }
}
