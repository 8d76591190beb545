//! WHO Child Growth Standards parameter data compiled into the crate.

use crate::error::Result;
use crate::loader::parse_csv;
use crate::models::{MeasurementType, Sex};
use crate::table::{GrowthTable, GrowthTableBuilder};

const BOYS_WEIGHT: &str = include_str!("../../data/WHO-Boys-Weight-for-age-Percentiles.csv");
const GIRLS_WEIGHT: &str = include_str!("../../data/WHO-Girls-Weight-for-age Percentiles.csv");
const BOYS_LENGTH: &str = include_str!("../../data/WHO-Boys-Length-for-age-Percentiles.csv");
const GIRLS_LENGTH: &str = include_str!("../../data/WHO-Girls-Length-for-age-Percentiles.csv");
const BOYS_HEAD: &str =
    include_str!("../../data/WHO-Boys-Head-Circumference-for-age-Percentiles.csv");
const GIRLS_HEAD: &str =
    include_str!("../../data/WHO-Girls-Head-Circumference-for-age-Percentiles.csv");

/// Embedded CSV text for one (kind, sex) pair
#[must_use]
pub const fn csv_source(kind: MeasurementType, sex: Sex) -> &'static str {
    match (kind, sex) {
        (MeasurementType::Weight, Sex::Male) => BOYS_WEIGHT,
        (MeasurementType::Weight, Sex::Female) => GIRLS_WEIGHT,
        (MeasurementType::Length, Sex::Male) => BOYS_LENGTH,
        (MeasurementType::Length, Sex::Female) => GIRLS_LENGTH,
        (MeasurementType::Head, Sex::Male) => BOYS_HEAD,
        (MeasurementType::Head, Sex::Female) => GIRLS_HEAD,
    }
}

/// Parse the embedded CSV data into a complete table
pub fn who_table() -> Result<GrowthTable> {
    let mut builder = GrowthTableBuilder::new();
    for kind in MeasurementType::ALL {
        for sex in Sex::ALL {
            let source_name = format!("embedded {kind}-for-age ({sex})");
            builder.insert(kind, sex, parse_csv(&source_name, csv_source(kind, sex))?);
        }
    }
    builder.build()
}
