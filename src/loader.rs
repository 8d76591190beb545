//! Growth parameter loading
//!
//! Parses the WHO percentile CSV files (a header line, then one row per
//! month: age, L, M, S and pre-computed percentile columns that are not
//! needed here) and assembles them into a [`GrowthTable`].

use std::path::Path;
use std::time::Instant;

use itertools::Itertools;

use crate::config::GrowthConfig;
use crate::error::util::{safe_read_to_string, validate_directory};
use crate::error::{GrowthError, Result};
use crate::models::{GrowthParameterRow, MeasurementType, Sex};
use crate::table::{GrowthTable, GrowthTableBuilder, MAX_AGE_MONTHS, embedded};
use crate::utils::logging::{log_load_complete, log_load_start, log_short_table, log_table_loaded};

/// Parse CSV text into parameter rows
///
/// Blank lines are skipped and the first non-blank line is the header. Only
/// the first four columns are read. Reported line numbers count every line
/// of `text`, blank ones included.
///
/// # Arguments
/// * `source_name` - Name used in error messages (usually the file name)
/// * `text` - Full CSV content
pub fn parse_csv(source_name: &str, text: &str) -> Result<Vec<GrowthParameterRow>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .skip(1)
        .map(|(idx, line)| parse_row(source_name, idx + 1, line))
        .collect()
}

fn parse_row(source_name: &str, line_no: usize, line: &str) -> Result<GrowthParameterRow> {
    let mut fields = line.split(',').map(str::trim);
    let mut next_number = |column: &str| -> Result<f64> {
        let raw = fields
            .next()
            .filter(|raw| !raw.is_empty())
            .ok_or_else(|| GrowthError::parse(source_name, line_no, format!("missing {column} column")))?;
        raw.parse::<f64>().map_err(|e| {
            GrowthError::parse(source_name, line_no, format!("invalid {column} value '{raw}': {e}"))
        })
    };

    let age = next_number("age")?;
    let l = next_number("L")?;
    let m = next_number("M")?;
    let s = next_number("S")?;

    if age < 0.0 || age.fract() != 0.0 || age > f64::from(u32::MAX) {
        return Err(GrowthError::parse(
            source_name,
            line_no,
            format!("age must be a whole number of months, got {age}"),
        ));
    }

    Ok(GrowthParameterRow::new(age as u32, l, m, s))
}

/// Check that a table has exactly one row for each month 0..=24 and nothing else
pub fn check_age_coverage(
    kind: MeasurementType,
    sex: Sex,
    rows: &[GrowthParameterRow],
) -> Result<()> {
    let invalid = |message: String| GrowthError::InvalidTable {
        kind,
        sex,
        message,
    };

    let missing: Vec<u32> = (0..=MAX_AGE_MONTHS)
        .filter(|age| !rows.iter().any(|row| row.age_months == *age))
        .collect();
    if !missing.is_empty() {
        return Err(invalid(format!("missing ages {missing:?}")));
    }

    let out_of_range: Vec<u32> = rows
        .iter()
        .map(|row| row.age_months)
        .filter(|age| *age > MAX_AGE_MONTHS)
        .collect();
    if !out_of_range.is_empty() {
        return Err(invalid(format!(
            "ages beyond {MAX_AGE_MONTHS} months {out_of_range:?}"
        )));
    }

    let repeated: Vec<u32> = rows.iter().map(|row| row.age_months).duplicates().collect();
    if !repeated.is_empty() {
        return Err(invalid(format!("duplicate ages {repeated:?}")));
    }

    Ok(())
}

/// Read and parse one CSV parameter file
pub fn load_table_file(path: &Path) -> Result<Vec<GrowthParameterRow>> {
    let text = safe_read_to_string(path, "growth parameter table")?;
    let source_name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
    parse_csv(&source_name, &text)
}

/// Build a complete [`GrowthTable`] from the configured data source
///
/// With no data directory the embedded WHO data is used. Otherwise all six
/// configured files are read; any failure aborts the load so a partially
/// populated table is never returned.
pub fn load_table(config: &GrowthConfig) -> Result<GrowthTable> {
    let Some(dir) = config.data_dir.as_deref() else {
        log::info!("Using embedded WHO growth parameter tables");
        return embedded::who_table();
    };

    let start = Instant::now();
    log_load_start(dir);
    validate_directory(dir, "growth parameter tables")?;

    let mut builder = GrowthTableBuilder::new();
    let mut row_count = 0;
    let mut table_count = 0;

    for kind in MeasurementType::ALL {
        for sex in Sex::ALL {
            let path = dir.join(config.files.file_name(kind, sex));
            let rows = load_table_file(&path)?;
            log_table_loaded(kind, sex, rows.len(), &path);

            if config.strict_ages {
                check_age_coverage(kind, sex, &rows)?;
            } else if rows.len() <= MAX_AGE_MONTHS as usize {
                log_short_table(kind, sex, rows.len(), &path);
            }

            row_count += rows.len();
            table_count += 1;
            builder.insert(kind, sex, rows);
        }
    }

    let table = builder.build()?;
    log_load_complete(dir, table_count, row_count, start.elapsed());
    Ok(table)
}
