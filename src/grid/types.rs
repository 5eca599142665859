//! Data types for the house grid

use serde::{Deserialize, Serialize};
use std::fmt;

/// HVAC unit status as reported by the simulation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HvacStatus {
    On,
    Off,
    Lockout,
    /// Any status string the dashboard has no name for
    Unknown(String),
}

impl HvacStatus {
    /// Cell border color shown for this status
    pub fn color(&self) -> &'static str {
        match self {
            HvacStatus::On => "green",
            HvacStatus::Off => "red",
            _ => "white",
        }
    }
}

/// Status names are matched exactly; `on` or `Off` are unknown statuses
impl From<&str> for HvacStatus {
    fn from(s: &str) -> Self {
        match s.trim() {
            "ON" => HvacStatus::On,
            "OFF" => HvacStatus::Off,
            "Lockout" => HvacStatus::Lockout,
            other => HvacStatus::Unknown(other.to_string()),
        }
    }
}

impl From<String> for HvacStatus {
    fn from(s: String) -> Self {
        HvacStatus::from(s.as_str())
    }
}

impl From<HvacStatus> for String {
    fn from(status: HvacStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for HvacStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HvacStatus::On => write!(f, "ON"),
            HvacStatus::Off => write!(f, "OFF"),
            HvacStatus::Lockout => write!(f, "Lockout"),
            HvacStatus::Unknown(s) => write!(f, "{}", s),
        }
    }
}

/// One house of the simulation as shown in the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseData {
    pub id: u32,
    #[serde(alias = "hvac_status")]
    pub hvac_status: HvacStatus,
    /// Indoor minus target temperature; drives the cell color
    #[serde(alias = "temperature_difference")]
    pub temperature_difference: f64,
    #[serde(default, alias = "indoor_temperature")]
    pub indoor_temperature: Option<f64>,
    #[serde(default, alias = "target_temperature")]
    pub target_temperature: Option<f64>,
}

impl HouseData {
    pub fn new(id: u32, hvac_status: HvacStatus, temperature_difference: f64) -> Self {
        Self {
            id,
            hvac_status,
            temperature_difference,
            indoor_temperature: None,
            target_temperature: None,
        }
    }
}

/// One page of houses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<'a> {
    /// 1-based page number
    pub id: usize,
    pub houses: &'a [HouseData],
}

/// A rendered grid cell
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    pub house_id: u32,
    /// Sample the fill was computed from
    pub value: f64,
    /// CSS fill color
    pub fill: String,
    /// CSS color for the HVAC status marker
    pub hvac: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hvac_status_colors() {
        assert_eq!(HvacStatus::from("ON").color(), "green");
        assert_eq!(HvacStatus::from("OFF").color(), "red");
        assert_eq!(HvacStatus::from("Lockout").color(), "white");
        assert_eq!(HvacStatus::from("").color(), "white");
    }

    #[test]
    fn test_hvac_status_roundtrip_text() {
        assert_eq!(HvacStatus::from(" OFF ").to_string(), "OFF");
        assert_eq!(
            HvacStatus::from("Standby"),
            HvacStatus::Unknown("Standby".to_string())
        );
    }

    #[test]
    fn test_hvac_status_is_case_sensitive() {
        assert_eq!(HvacStatus::from("on"), HvacStatus::Unknown("on".to_string()));
        assert_eq!(HvacStatus::from("Off").color(), "white");
        assert_eq!(HvacStatus::from("lockout").to_string(), "lockout");
    }

    #[test]
    fn test_grid_cell_serializes_camel_case() {
        let cell = GridCell {
            house_id: 12,
            value: 0.25,
            fill: "rgba(127.5, 255, 0, 100)".to_string(),
            hvac: "green",
        };
        let json = serde_json::to_string(&cell).unwrap();
        assert!(json.contains("\"houseId\":12"));
        assert!(!json.contains("house_id"));
    }

    #[test]
    fn test_house_deserialize_camel_and_snake() {
        let json = r#"{"id": 3, "hvacStatus": "ON", "temperatureDifference": -0.2}"#;
        let house: HouseData = serde_json::from_str(json).unwrap();
        assert_eq!(house.hvac_status, HvacStatus::On);
        assert_eq!(house.temperature_difference, -0.2);

        let json = r#"{"id": 4, "hvac_status": "OFF", "temperature_difference": 0.1,
                       "indoor_temperature": 20.1, "target_temperature": 20.0}"#;
        let house: HouseData = serde_json::from_str(json).unwrap();
        assert_eq!(house.hvac_status, HvacStatus::Off);
        assert_eq!(house.target_temperature, Some(20.0));
    }

    #[test]
    fn test_house_serialize() {
        let house = HouseData::new(1, HvacStatus::On, 0.5);
        let json = serde_json::to_string(&house).unwrap();
        assert!(json.contains("\"hvacStatus\":\"ON\""));
        assert!(json.contains("\"temperatureDifference\":0.5"));
    }
}
