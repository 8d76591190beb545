//! Human-readable formatting of percentiles and measurements

pub mod units;

pub use units::{
    UnitSystem, cm_to_inches, format_head_circumference, format_length, format_measurement,
    format_weight, inches_to_cm, kg_to_lbs, lbs_to_kg, lbs_to_lbs_oz,
};

/// English ordinal suffix for an integer (`st`, `nd`, `rd` or `th`)
#[must_use]
pub const fn ordinal_suffix(n: i64) -> &'static str {
    let last_two = n % 100;
    if last_two >= 11 && last_two <= 13 {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Describe a percentile as an ordinal, e.g. `"50th percentile"`
///
/// The percentile is truncated, not rounded: `50.5` gives `"50th percentile"`.
#[must_use]
pub fn percentile_description(percentile: f64) -> String {
    if !percentile.is_finite() {
        return format!("{percentile} percentile");
    }
    let p = percentile.trunc() as i64;
    format!("{p}{} percentile", ordinal_suffix(p))
}
