mod utils;

use rand::Rng;
use who_growth::algorithm::lms::is_log_normal;
use who_growth::{
    GrowthCalculator, GrowthError, GrowthTable, MeasurementType, Sex, calculate_measurement,
    calculate_percentile, percentile_to_z_score, z_score_to_percentile,
};

use utils::assert_close;

#[test]
fn test_six_month_medians_match_published_values() {
    let cases = [
        (Sex::Male, MeasurementType::Weight, 7.934),
        (Sex::Female, MeasurementType::Weight, 7.297),
        (Sex::Male, MeasurementType::Length, 67.6236),
        (Sex::Female, MeasurementType::Length, 65.7311),
        (Sex::Male, MeasurementType::Head, 43.3306),
        (Sex::Female, MeasurementType::Head, 42.1995),
    ];
    for (sex, kind, median) in cases {
        let value = calculate_measurement(6, sex, 50.0, kind).unwrap();
        assert_close(value, median, 0.05);
    }
}

#[test]
fn test_end_to_end_boy_weight() {
    assert_eq!(calculate_measurement(6, Sex::Male, 50.0, MeasurementType::Weight).unwrap(), 7.93);
    assert_eq!(calculate_measurement(6, Sex::Male, 25.0, MeasurementType::Weight).unwrap(), 7.37);
    assert_eq!(calculate_measurement(6, Sex::Male, 75.0, MeasurementType::Weight).unwrap(), 8.54);
}

#[test]
fn test_measurement_increases_with_percentile() {
    let calc = GrowthCalculator::who();
    for kind in MeasurementType::ALL {
        for sex in Sex::ALL {
            for age in [0, 6, 12, 24] {
                let values: Vec<f64> = [2.0, 10.0, 25.0, 50.0, 75.0, 90.0, 98.0]
                    .iter()
                    .map(|&p| calc.calculate_measurement(age, sex, p, kind).unwrap())
                    .collect();
                assert!(
                    values.windows(2).all(|w| w[0] < w[1]),
                    "{kind} {sex} age {age}: {values:?}"
                );
            }
        }
    }
}

#[test]
fn test_round_trip_within_one_percentile() {
    let calc = GrowthCalculator::who();
    let mut rng = rand::rng();

    for _ in 0..500 {
        let kind = MeasurementType::ALL[rng.random_range(0..3)];
        let sex = Sex::ALL[rng.random_range(0..2)];
        let age = rng.random_range(0..=24);
        let percentile = rng.random_range(5.0..=95.0);

        let value = calc.calculate_measurement(age, sex, percentile, kind).unwrap();
        let back = calc.calculate_percentile(age, sex, value, kind).unwrap();
        assert_close(back, percentile, 1.0);
    }
}

#[test]
fn test_log_normal_rows_use_exponential_form() {
    let table = GrowthTable::who();
    let calc = GrowthCalculator::new(table);
    let mut checked = 0;

    for sex in Sex::ALL {
        for row in table.rows(MeasurementType::Weight, sex).iter().filter(|r| is_log_normal(r)) {
            for percentile in [10.0, 50.0, 90.0] {
                let z = percentile_to_z_score(percentile);
                let expected = row.m * (row.s * z).exp();
                let value = calc
                    .calculate_measurement(row.age_months, sex, percentile, MeasurementType::Weight)
                    .unwrap();
                assert_close(value, expected, 0.005 + 1e-9);
            }
            checked += 1;
        }
    }

    // girls at 4 months, boys from 20 to 23 months
    assert_eq!(checked, 5);
}

#[test]
fn test_percentile_output_is_clamped() {
    let calc = GrowthCalculator::who();
    let tiny = calc.calculate_percentile(6, Sex::Male, 1.0, MeasurementType::Weight).unwrap();
    let huge = calc.calculate_percentile(6, Sex::Male, 40.0, MeasurementType::Weight).unwrap();
    assert_eq!(tiny, 1.0);
    assert_eq!(huge, 99.0);

    for z in [-50.0, -10.0, -3.0, 0.0, 3.0, 10.0, 50.0] {
        let p = z_score_to_percentile(z);
        assert!((1.0..=99.0).contains(&p));
    }
}

#[test]
fn test_error_scenarios() {
    let err = "invalid-type".parse::<MeasurementType>().unwrap_err();
    assert!(matches!(err, GrowthError::InvalidMeasurementType(_)));

    let err = calculate_measurement(999, Sex::Male, 50.0, MeasurementType::Weight).unwrap_err();
    assert!(matches!(err, GrowthError::AgeNotFound { .. }));

    let err = calculate_percentile(6, Sex::Male, -1.0, MeasurementType::Weight).unwrap_err();
    assert!(matches!(err, GrowthError::Domain(_)));
}
