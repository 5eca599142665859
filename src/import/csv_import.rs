//! CSV Import
//!
//! Reads houses and simulation frames from CSV files with a header row.
//! House columns are matched by header name, ignoring case, spaces,
//! underscores and dashes, so `hvacStatus`, `HVAC status` and `hvac_status`
//! all land in the same field.

use super::{ImportError, ImportResult};
use crate::charts::SimulationFrame;
use crate::grid::{HouseData, HvacStatus};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Maximum number of row errors kept in a result
const MAX_ERRORS: usize = 100;

/// Result of a house import
#[derive(Debug, Default)]
pub struct HouseImportResult {
    pub houses: Vec<HouseData>,
    pub rows_failed: usize,
    pub errors: Vec<String>,
}

/// Column positions of the house fields
#[derive(Debug, Clone, Default)]
pub struct HouseImporter {
    id: Option<usize>,
    hvac_status: Option<usize>,
    temperature_difference: Option<usize>,
    indoor_temperature: Option<usize>,
    target_temperature: Option<usize>,
}

fn normalize_header(header: &str) -> String {
    header
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl HouseImporter {
    /// Detect column positions from a header row
    pub fn from_headers(headers: &csv::StringRecord) -> ImportResult<Self> {
        let mut importer = Self::default();
        for (idx, header) in headers.iter().enumerate() {
            match normalize_header(header).as_str() {
                "id" | "houseid" => importer.id = Some(idx),
                "hvacstatus" | "hvac" => importer.hvac_status = Some(idx),
                "temperaturedifference" | "tempdifference" => {
                    importer.temperature_difference = Some(idx)
                }
                "indoortemperature" => importer.indoor_temperature = Some(idx),
                "targettemperature" => importer.target_temperature = Some(idx),
                _ => {}
            }
        }

        if importer.id.is_none() {
            return Err(ImportError::MissingColumn("id"));
        }
        if importer.hvac_status.is_none() {
            return Err(ImportError::MissingColumn("hvac_status"));
        }
        if importer.temperature_difference.is_none() {
            return Err(ImportError::MissingColumn("temperature_difference"));
        }
        Ok(importer)
    }

    fn parse_row(&self, record: &csv::StringRecord) -> Result<HouseData, String> {
        let field = |col: Option<usize>| col.and_then(|c| record.get(c)).map(str::trim);
        let number = |col: Option<usize>, name: &str| -> Result<Option<f64>, String> {
            match field(col) {
                None | Some("") => Ok(None),
                Some(s) => s
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .map(Some)
                    .ok_or_else(|| format!("invalid {}: {}", name, s)),
            }
        };

        let id_str = field(self.id).unwrap_or_default();
        let id = id_str
            .parse::<u32>()
            .map_err(|_| format!("invalid id: {:?}", id_str))?;
        let hvac_status = HvacStatus::from(field(self.hvac_status).unwrap_or_default());
        let temperature_difference = number(self.temperature_difference, "temperature_difference")?
            .ok_or_else(|| "missing temperature_difference".to_string())?;

        Ok(HouseData {
            id,
            hvac_status,
            temperature_difference,
            indoor_temperature: number(self.indoor_temperature, "indoor_temperature")?,
            target_temperature: number(self.target_temperature, "target_temperature")?,
        })
    }

    /// Import houses from any reader holding CSV with a header row
    pub fn import_reader<R: Read>(reader: R) -> ImportResult<HouseImportResult> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let importer = Self::from_headers(reader.headers()?)?;

        let mut result = HouseImportResult::default();
        for (line_num, record) in reader.records().enumerate() {
            let line = line_num + 2;
            let parsed = record
                .map_err(|e| e.to_string())
                .and_then(|r| importer.parse_row(&r));

            match parsed {
                Ok(house) => result.houses.push(house),
                Err(e) => {
                    result.rows_failed += 1;
                    if result.errors.len() < MAX_ERRORS {
                        result.errors.push(format!("Line {}: {}", line, e));
                    }
                }
            }
        }

        if result.rows_failed > 0 {
            tracing::warn!(
                failed = result.rows_failed,
                imported = result.houses.len(),
                "Some house rows could not be parsed"
            );
        }
        Ok(result)
    }
}

/// Builds simulation frames from CSV rows, one frame per row keyed by header
pub struct FrameImporter;

impl FrameImporter {
    /// Import frames from any reader holding CSV with a header row
    pub fn import_reader<R: Read>(reader: R) -> ImportResult<Vec<SimulationFrame>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut frames = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut frame = SimulationFrame::new();
            for (header, value) in headers.iter().zip(record.iter()) {
                frame.insert(header.clone(), Value::from(value));
            }
            frames.push(frame);
        }
        Ok(frames)
    }
}

/// Read houses from a CSV file
pub fn read_houses_csv(path: &Path) -> ImportResult<HouseImportResult> {
    let file = std::fs::File::open(path)?;
    let result = HouseImporter::import_reader(file)?;
    tracing::debug!(path = ?path, houses = result.houses.len(), "Read houses");
    Ok(result)
}

/// Read simulation frames from a CSV file
pub fn read_frames_csv(path: &Path) -> ImportResult<Vec<SimulationFrame>> {
    let file = std::fs::File::open(path)?;
    let frames = FrameImporter::import_reader(file)?;
    tracing::debug!(path = ?path, frames = frames.len(), "Read frames");
    Ok(frames)
}
