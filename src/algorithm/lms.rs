//! LMS (Box-Cox power, median, coefficient of variation) transforms
//!
//! For a row with parameters L, M and S, a z-score maps to the measurement
//! `M * (1 + L*S*z)^(1/L)`, or `M * exp(S*z)` when L is close to zero.

use crate::error::{GrowthError, Result};
use crate::models::GrowthParameterRow;

/// Below this magnitude L is treated as zero and the log-normal form is used
pub const L_EPSILON: f64 = 0.01;

/// Whether a row uses the log-normal (L ≈ 0) form of the transform
#[must_use]
pub fn is_log_normal(row: &GrowthParameterRow) -> bool {
    row.l.abs() < L_EPSILON
}

/// Measurement at z-score `z` for the distribution described by `row`
///
/// Fails with [`GrowthError::Domain`] when `1 + L*S*z` is not positive
/// (the power is undefined there) or the result is not finite.
pub fn lms_value(row: &GrowthParameterRow, z: f64) -> Result<f64> {
    let GrowthParameterRow { l, m, s, .. } = *row;

    let value = if is_log_normal(row) {
        m * (s * z).exp()
    } else {
        let base = 1.0 + l * s * z;
        if base <= 0.0 {
            return Err(GrowthError::Domain(format!(
                "1 + L*S*z = {base} is not positive (L={l}, S={s}, z={z})"
            )));
        }
        m * base.powf(1.0 / l)
    };

    finite(value, "measurement")
}

/// Z-score of `measurement` under the distribution described by `row`
///
/// Fails with [`GrowthError::Domain`] for non-positive or non-finite
/// measurements.
pub fn lms_z_score(row: &GrowthParameterRow, measurement: f64) -> Result<f64> {
    if !(measurement.is_finite() && measurement > 0.0) {
        return Err(GrowthError::Domain(format!(
            "measurement must be a positive number, got {measurement}"
        )));
    }

    let GrowthParameterRow { l, m, s, .. } = *row;
    let ratio = measurement / m;

    let z = if is_log_normal(row) {
        ratio.ln() / s
    } else {
        (ratio.powf(l) - 1.0) / (l * s)
    };

    finite(z, "z-score")
}

fn finite(value: f64, what: &str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GrowthError::Domain(format!("{what} is not finite ({value})")))
    }
}
