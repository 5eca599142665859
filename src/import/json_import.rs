//! JSON Import

use super::ImportResult;
use crate::charts::SimulationFrame;
use crate::grid::HouseData;
use std::io::BufReader;
use std::path::Path;

/// Read an array of simulation frames
///
/// Values may be numbers or numeric strings.
pub fn read_frames_json(path: &Path) -> ImportResult<Vec<SimulationFrame>> {
    let reader = BufReader::new(std::fs::File::open(path)?);
    let frames: Vec<SimulationFrame> = serde_json::from_reader(reader)?;
    tracing::debug!(path = ?path, frames = frames.len(), "Read frames");
    Ok(frames)
}

/// Read an array of houses
pub fn read_houses_json(path: &Path) -> ImportResult<Vec<HouseData>> {
    let reader = BufReader::new(std::fs::File::open(path)?);
    let houses: Vec<HouseData> = serde_json::from_reader(reader)?;
    tracing::debug!(path = ?path, houses = houses.len(), "Read houses");
    Ok(houses)
}
