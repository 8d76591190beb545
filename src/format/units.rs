//! Metric and imperial unit conversion for display

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algorithm::zscore::round_half_up;
use crate::error::GrowthError;
use crate::models::MeasurementType;

const LBS_PER_KG: f64 = 2.20462;
const CM_PER_INCH: f64 = 2.54;

/// Unit system used when presenting measurements
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Kilograms and centimetres, as in the WHO tables
    #[default]
    Metric,
    /// Pounds/ounces and inches
    Imperial,
}

impl FromStr for UnitSystem {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "kg" | "cm" => Ok(Self::Metric),
            "imperial" | "lbs" | "inches" | "in" => Ok(Self::Imperial),
            other => Err(GrowthError::InvalidInput(format!("Unknown unit system: {other}"))),
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => f.write_str("metric"),
            Self::Imperial => f.write_str("imperial"),
        }
    }
}

#[must_use]
pub fn kg_to_lbs(kg: f64) -> f64 {
    round_half_up(kg * LBS_PER_KG, 2)
}

#[must_use]
pub fn lbs_to_kg(lbs: f64) -> f64 {
    round_half_up(lbs / LBS_PER_KG, 2)
}

#[must_use]
pub fn cm_to_inches(cm: f64) -> f64 {
    round_half_up(cm / CM_PER_INCH, 2)
}

#[must_use]
pub fn inches_to_cm(inches: f64) -> f64 {
    round_half_up(inches * CM_PER_INCH, 2)
}

/// Split decimal pounds into whole pounds and rounded ounces
///
/// Ounces that round up to 16 carry into the pounds.
#[must_use]
pub fn lbs_to_lbs_oz(decimal_lbs: f64) -> (u32, u32) {
    let pounds = decimal_lbs.floor();
    let ounces = round_half_up((decimal_lbs - pounds) * 16.0, 0);

    if ounces >= 16.0 {
        (pounds as u32 + 1, 0)
    } else {
        (pounds as u32, ounces as u32)
    }
}

/// Format a weight given in kilograms
#[must_use]
pub fn format_weight(weight_kg: f64, units: UnitSystem) -> String {
    match units {
        UnitSystem::Metric => format!("{weight_kg} kg"),
        UnitSystem::Imperial => {
            let (pounds, ounces) = lbs_to_lbs_oz(kg_to_lbs(weight_kg));
            format!("{pounds} lbs {ounces} oz")
        }
    }
}

/// Format a length given in centimetres, using feet and inches when imperial
#[must_use]
pub fn format_length(length_cm: f64, units: UnitSystem) -> String {
    match units {
        UnitSystem::Metric => format!("{length_cm} cm"),
        UnitSystem::Imperial => {
            let inches = cm_to_inches(length_cm);
            let feet = (inches / 12.0).floor();
            let remaining = round_half_up(inches % 12.0, 1);
            if feet > 0.0 {
                format!("{feet}' {remaining}\"")
            } else {
                format!("{remaining}\"")
            }
        }
    }
}

/// Format a head circumference given in centimetres
#[must_use]
pub fn format_head_circumference(head_cm: f64, units: UnitSystem) -> String {
    match units {
        UnitSystem::Metric => format!("{head_cm} cm"),
        UnitSystem::Imperial => format!("{}\"", cm_to_inches(head_cm)),
    }
}

/// Format a measurement of any kind from its metric value
#[must_use]
pub fn format_measurement(kind: MeasurementType, value: f64, units: UnitSystem) -> String {
    match kind {
        MeasurementType::Weight => format_weight(value, units),
        MeasurementType::Length => format_length(value, units),
        MeasurementType::Head => format_head_circumference(value, units),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_conversions() {
        assert_eq!(kg_to_lbs(1.0), 2.2);
        assert_eq!(kg_to_lbs(7.93), 17.48);
        assert_eq!(lbs_to_kg(2.20462), 1.0);
    }

    #[test]
    fn test_length_conversions() {
        assert_eq!(cm_to_inches(2.54), 1.0);
        assert_eq!(cm_to_inches(67.62), 26.62);
        assert_eq!(inches_to_cm(10.0), 25.4);
    }

    #[test]
    fn test_lbs_to_lbs_oz() {
        assert_eq!(lbs_to_lbs_oz(17.48), (17, 8));
        assert_eq!(lbs_to_lbs_oz(7.0), (7, 0));
        assert_eq!(lbs_to_lbs_oz(7.99), (8, 0));
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(7.93, UnitSystem::Metric), "7.93 kg");
        assert_eq!(format_weight(7.93, UnitSystem::Imperial), "17 lbs 8 oz");
    }

    #[test]
    fn test_format_length() {
        assert_eq!(format_length(67.62, UnitSystem::Metric), "67.62 cm");
        assert_eq!(format_length(67.62, UnitSystem::Imperial), "2' 2.6\"");
        assert_eq!(format_length(25.4, UnitSystem::Imperial), "10\"");
    }

    #[test]
    fn test_format_head_circumference() {
        assert_eq!(format_head_circumference(43.33, UnitSystem::Metric), "43.33 cm");
        assert_eq!(format_head_circumference(43.33, UnitSystem::Imperial), "17.06\"");
    }

    #[test]
    fn test_unit_system_from_str() {
        assert_eq!("Imperial".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
        assert_eq!("kg".parse::<UnitSystem>().unwrap(), UnitSystem::Metric);
        assert!("furlongs".parse::<UnitSystem>().is_err());
    }
}
