//! Domain models for growth calculations

pub mod types;

pub use types::{GrowthParameterRow, MeasurementType, Sex};
