#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use who_growth::config::TableFiles;
use who_growth::table::embedded::csv_source;
use who_growth::{MeasurementType, Sex};

/// Fresh, empty scratch directory under the system temp dir
#[must_use]
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("who_growth_tests")
        .join(format!("{name}_{}", std::process::id()));
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Write the six embedded WHO tables into `dir` under the default file names
pub fn write_who_files(dir: &Path) {
    let files = TableFiles::default();
    for kind in MeasurementType::ALL {
        for sex in Sex::ALL {
            fs::write(dir.join(files.file_name(kind, sex)), csv_source(kind, sex)).unwrap();
        }
    }
}

/// Assert two floats agree within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
