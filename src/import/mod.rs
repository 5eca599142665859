//! Data Import
//!
//! Loads houses and simulation frames from files:
//!
//! - **csv_import**: CSV with header-based column detection
//! - **json_import**: JSON arrays of houses or frames

pub mod csv_import;
pub mod json_import;

pub use csv_import::{
    read_frames_csv, read_houses_csv, FrameImporter, HouseImportResult, HouseImporter,
};
pub use json_import::{read_frames_json, read_houses_json};

use crate::charts::SimulationFrame;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while importing data
#[derive(Error, Debug)]
pub enum ImportError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parse error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required column is absent from the header row
    #[error("Missing column: {0}")]
    MissingColumn(&'static str),

    /// File extension not recognised
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),
}

/// Result type for import operations
pub type ImportResult<T> = Result<T, ImportError>;

/// Read frames from a `.csv` or `.json` file, chosen by extension
pub fn read_frames(path: &Path) -> ImportResult<Vec<SimulationFrame>> {
    match extension(path).as_str() {
        "csv" => read_frames_csv(path),
        "json" => read_frames_json(path),
        other => Err(ImportError::UnsupportedFormat(other.to_string())),
    }
}

/// Read houses from a `.csv` or `.json` file, chosen by extension
pub fn read_houses(path: &Path) -> ImportResult<HouseImportResult> {
    match extension(path).as_str() {
        "csv" => read_houses_csv(path),
        "json" => Ok(HouseImportResult {
            houses: read_houses_json(path)?,
            ..Default::default()
        }),
        other => Err(ImportError::UnsupportedFormat(other.to_string())),
    }
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default()
}
