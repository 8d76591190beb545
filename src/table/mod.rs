//! Growth parameter tables
//!
//! A [`GrowthTable`] owns the six WHO LMS tables, one per
//! (measurement kind, sex) pair. It is only ever produced whole by
//! [`GrowthTableBuilder::build`], and is read-only afterwards.

pub mod embedded;

use std::collections::HashMap;
use std::sync::OnceLock;

use itertools::Itertools;

use crate::error::{GrowthError, Result};
use crate::models::{GrowthParameterRow, MeasurementType, Sex};

/// Oldest age, in months, covered by the WHO infant tables
pub const MAX_AGE_MONTHS: u32 = 24;

static WHO_TABLE: OnceLock<GrowthTable> = OnceLock::new();

/// Immutable set of LMS parameter tables keyed by measurement kind and sex
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthTable {
    tables: HashMap<(MeasurementType, Sex), Vec<GrowthParameterRow>>,
}

impl GrowthTable {
    /// Create a new builder for constructing a table
    #[must_use]
    pub fn builder() -> GrowthTableBuilder {
        GrowthTableBuilder::new()
    }

    /// The WHO Child Growth Standards table shipped with the crate
    ///
    /// Built on first use and shared for the rest of the process.
    pub fn who() -> &'static Self {
        WHO_TABLE.get_or_init(|| {
            embedded::who_table().expect("embedded WHO parameter data is well-formed")
        })
    }

    /// Row whose age equals `age_months` exactly
    ///
    /// There is no interpolation: an age missing from the table is an error
    /// even when both neighbouring months exist.
    pub fn row(&self, kind: MeasurementType, sex: Sex, age_months: u32) -> Result<&GrowthParameterRow> {
        let rows = self.rows(kind, sex);
        rows.binary_search_by_key(&age_months, |row| row.age_months)
            .map(|idx| &rows[idx])
            .map_err(|_| GrowthError::age_not_found(kind, sex, age_months))
    }

    /// All rows of one table, sorted by age
    #[must_use]
    pub fn rows(&self, kind: MeasurementType, sex: Sex) -> &[GrowthParameterRow] {
        self.tables.get(&(kind, sex)).map_or(&[], Vec::as_slice)
    }

    /// Ages available in one table
    pub fn ages(&self, kind: MeasurementType, sex: Sex) -> impl Iterator<Item = u32> + '_ {
        self.rows(kind, sex).iter().map(|row| row.age_months)
    }
}

/// Builder collecting the six tables before freezing them into a [`GrowthTable`]
#[derive(Debug, Clone, Default)]
pub struct GrowthTableBuilder {
    tables: HashMap<(MeasurementType, Sex), Vec<GrowthParameterRow>>,
}

impl GrowthTableBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rows for one (kind, sex) pair, replacing any earlier rows
    #[must_use]
    pub fn table(mut self, kind: MeasurementType, sex: Sex, rows: Vec<GrowthParameterRow>) -> Self {
        self.insert(kind, sex, rows);
        self
    }

    pub fn insert(&mut self, kind: MeasurementType, sex: Sex, rows: Vec<GrowthParameterRow>) {
        self.tables.insert((kind, sex), rows);
    }

    /// Validate and freeze the collected tables
    ///
    /// Every (kind, sex) pair must be present, ages must be unique within a
    /// table, and M and S must be positive and finite.
    pub fn build(self) -> Result<GrowthTable> {
        let mut tables = self.tables;

        for kind in MeasurementType::ALL {
            for sex in Sex::ALL {
                let rows = tables
                    .get_mut(&(kind, sex))
                    .ok_or(GrowthError::MissingTable { kind, sex })?;

                validate_rows(kind, sex, rows)?;
                rows.sort_by_key(|row| row.age_months);
                log::debug!("Accepted {} rows for {kind} ({sex})", rows.len());
            }
        }

        Ok(GrowthTable { tables })
    }
}

fn validate_rows(kind: MeasurementType, sex: Sex, rows: &[GrowthParameterRow]) -> Result<()> {
    let invalid = |message: String| GrowthError::InvalidTable { kind, sex, message };

    if rows.is_empty() {
        return Err(invalid("table has no rows".to_string()));
    }

    if let Some(age) = rows.iter().map(|row| row.age_months).duplicates().next() {
        return Err(invalid(format!("age {age} appears more than once")));
    }

    for row in rows {
        if !row.l.is_finite() {
            return Err(invalid(format!("L is not finite at age {}", row.age_months)));
        }
        if !(row.m.is_finite() && row.m > 0.0) {
            return Err(invalid(format!("M must be positive at age {}", row.age_months)));
        }
        if !(row.s.is_finite() && row.s > 0.0) {
            return Err(invalid(format!("S must be positive at age {}", row.age_months)));
        }
    }

    Ok(())
}
