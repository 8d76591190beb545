//! Percentile and z-score conversions
//!
//! Both directions use classical rational approximations rather than an
//! exact inverse error function. The two approximations come from
//! different families, so converting a percentile to a z-score and back
//! only approximately returns the starting percentile.

/// Lowest percentile reported by [`z_score_to_percentile`]
pub const MIN_PERCENTILE: f64 = 1.0;
/// Highest percentile reported by [`z_score_to_percentile`]
pub const MAX_PERCENTILE: f64 = 99.0;

// Abramowitz and Stegun 26.2.23
const C0: f64 = 2.515_517;
const C1: f64 = 0.802_853;
const C2: f64 = 0.010_328;
const D1: f64 = 1.432_788;
const D2: f64 = 0.189_269;
const D3: f64 = 0.001_308;

// Abramowitz and Stegun 26.2.17
const P: f64 = 0.231_641_9;
const INV_SQRT_2PI: f64 = 0.398_942_3;
const B1: f64 = 0.319_381_5;
const B2: f64 = -0.356_563_8;
const B3: f64 = 1.781_478;
const B4: f64 = -1.821_256;
const B5: f64 = 1.330_274;

/// Convert a percentile in (0, 100) to a z-score
///
/// Accurate to about 4.5e-4 in probability. The result is not rounded.
/// Percentiles of exactly 0 or 100 produce infinite z-scores.
#[must_use]
pub fn percentile_to_z_score(percentile: f64) -> f64 {
    let p = percentile / 100.0;

    if p < 0.5 {
        -tail_deviate((-2.0 * p.ln()).sqrt())
    } else {
        tail_deviate((-2.0 * (1.0 - p).ln()).sqrt())
    }
}

#[inline]
fn tail_deviate(t: f64) -> f64 {
    t - ((C2 * t + C1) * t + C0) / (((D3 * t + D2) * t + D1) * t + 1.0)
}

/// Convert a z-score to a percentile
///
/// The percentile is rounded to one decimal place and clamped to
/// [`MIN_PERCENTILE`, `MAX_PERCENTILE`], so extreme z-scores never
/// extrapolate beyond the reported range.
#[must_use]
pub fn z_score_to_percentile(z: f64) -> f64 {
    let t = 1.0 / (1.0 + P * z.abs());
    let d = INV_SQRT_2PI * (-z * z / 2.0).exp();
    let prob = d * t * (B1 + t * (B2 + t * (B3 + t * (B4 + t * B5))));

    let p = if z >= 0.0 { 1.0 - prob } else { prob };

    round_half_up(p * 100.0, 1).clamp(MIN_PERCENTILE, MAX_PERCENTILE)
}

/// Round to `decimals` places, with halves rounded towards positive infinity
#[must_use]
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor + 0.5).floor() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentile_to_z_score_reference_points() {
        for (percentile, expected) in [(16.0, -1.0), (50.0, 0.0), (84.0, 1.0)] {
            let z = percentile_to_z_score(percentile);
            assert!((z - expected).abs() < 0.05, "p={percentile} z={z}");
        }
    }

    #[test]
    fn test_percentile_to_z_score_is_antisymmetric() {
        for percentile in [2.3, 10.0, 25.0, 40.0] {
            let low = percentile_to_z_score(percentile);
            let high = percentile_to_z_score(100.0 - percentile);
            assert!((low + high).abs() < 1e-12);
        }
    }

    #[test]
    fn test_percentile_to_z_score_two_sd() {
        assert!((percentile_to_z_score(2.3) + 2.0).abs() < 0.01);
        assert!((percentile_to_z_score(97.7) - 2.0).abs() < 0.01);
    }

    #[test]
    fn test_z_score_to_percentile_reference_points() {
        for (z, expected) in [(-2.0, 2.3), (0.0, 50.0), (2.0, 97.7)] {
            let p = z_score_to_percentile(z);
            assert!((p - expected).abs() < 0.5, "z={z} p={p}");
        }
        assert_eq!(z_score_to_percentile(1.0), 84.1);
        assert_eq!(z_score_to_percentile(-1.0), 15.9);
    }

    #[test]
    fn test_z_score_to_percentile_clamps() {
        assert_eq!(z_score_to_percentile(-10.0), MIN_PERCENTILE);
        assert_eq!(z_score_to_percentile(10.0), MAX_PERCENTILE);
        assert_eq!(z_score_to_percentile(f64::NEG_INFINITY), MIN_PERCENTILE);
        assert_eq!(z_score_to_percentile(f64::INFINITY), MAX_PERCENTILE);
    }

    #[test]
    fn test_z_score_to_percentile_has_one_decimal() {
        for z in [-1.7, -0.3, 0.42, 1.234] {
            let p = z_score_to_percentile(z);
            assert!(((p * 10.0).round() - p * 10.0).abs() < 1e-9, "p={p}");
        }
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(7.934, 2), 7.93);
        assert_eq!(round_half_up(2.5, 0), 3.0);
        assert_eq!(round_half_up(-2.5, 0), -2.0);
        assert_eq!(round_half_up(49.96, 1), 50.0);
    }
}
