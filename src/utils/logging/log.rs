//! Log messages for growth table loading

use std::path::Path;
use std::time::Duration;

use crate::models::{MeasurementType, Sex};

pub fn log_load_start(dir: &Path) {
    log::info!("Loading WHO growth parameter tables from {}", dir.display());
}

/// One (measurement, sex) table read from disk
pub fn log_table_loaded(kind: MeasurementType, sex: Sex, rows: usize, path: &Path) {
    log::debug!("Read {rows} {kind} rows for {sex} from {}", path.display());
}

/// A table that does not cover every month, accepted because age checks are off
pub fn log_short_table(kind: MeasurementType, sex: Sex, rows: usize, path: &Path) {
    log::warn!(
        "Table for {kind} ({sex}) has only {rows} rows, some ages will not be found: {}",
        path.display()
    );
}

pub fn log_load_complete(dir: &Path, tables: usize, rows: usize, elapsed: Duration) {
    log::info!(
        "Loaded {tables} growth tables ({rows} rows) from {} in {elapsed:?}",
        dir.display()
    );
}
