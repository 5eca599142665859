//! Chart series reshaping
//!
//! Simulation frames arrive one per tick as a record of named values. Each
//! chart picks a few categories out of every frame and lays them out as one
//! line dataset per category, indexed by tick.

use super::{ChartError, ChartResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One simulation tick: category name to raw value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimulationFrame {
    values: BTreeMap<String, Value>,
}

impl SimulationFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set a numeric value
    pub fn with(mut self, category: impl Into<String>, value: f64) -> Self {
        self.values.insert(category.into(), Value::from(value));
        self
    }

    /// Store a raw value as received
    pub fn insert(&mut self, category: impl Into<String>, value: Value) {
        self.values.insert(category.into(), value);
    }

    /// Numeric value of a category
    ///
    /// Numbers and numeric strings parse; anything else, including a missing
    /// category or an empty string, is `None`.
    pub fn value(&self, category: &str) -> Option<f64> {
        let value = match self.values.get(category)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        value.filter(|v| v.is_finite())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The dashboard's line charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    /// Power draw against the regulation signal
    Consumption,
    /// Average temperature error and difference
    TemperatureError,
    /// Outdoor, mass and target temperatures
    Temperatures,
}

impl ChartKind {
    /// Get all charts in display order
    pub fn all() -> &'static [ChartKind] {
        &[
            ChartKind::Consumption,
            ChartKind::TemperatureError,
            ChartKind::Temperatures,
        ]
    }

    /// Frame categories plotted on this chart
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            ChartKind::Consumption => &["Current consumption", "Regulation signal"],
            ChartKind::TemperatureError => &[
                "Average temperature error",
                "Average temperature difference",
            ],
            ChartKind::Temperatures => &[
                "Outdoor temperature",
                "Mass temperature",
                "Target temperature",
            ],
        }
    }

    /// Line colors, applied to every dataset of the chart
    pub fn colors(&self) -> &'static [&'static str] {
        match self {
            ChartKind::Consumption => &["blue", "white"],
            ChartKind::TemperatureError => &["green", "orange"],
            ChartKind::Temperatures => &["teal", "red", "yellow"],
        }
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> ChartResult<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "consumption" => Ok(ChartKind::Consumption),
            "temperature-error" => Ok(ChartKind::TemperatureError),
            "temperatures" => Ok(ChartKind::Temperatures),
            other => Err(ChartError::UnknownChart(other.to_string())),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Consumption => write!(f, "consumption"),
            ChartKind::TemperatureError => write!(f, "temperature-error"),
            ChartKind::Temperatures => write!(f, "temperatures"),
        }
    }
}

/// One line of a chart, in the shape chart.js expects
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    /// One entry per tick; `null` where the frame had no usable value
    pub data: Vec<Option<f64>>,
    pub fill: bool,
    pub tension: f64,
    pub border_color: Vec<&'static str>,
    pub background_color: Vec<&'static str>,
    pub point_background_color: &'static str,
    pub point_radius: u32,
    pub point_hover_radius: u32,
    pub point_hit_radius: u32,
}

impl Dataset {
    fn new(label: &str, data: Vec<Option<f64>>, colors: &'static [&'static str]) -> Self {
        Self {
            label: label.to_string(),
            data,
            fill: false,
            tension: 0.0,
            border_color: colors.to_vec(),
            background_color: colors.to_vec(),
            point_background_color: "white",
            point_radius: 0,
            point_hover_radius: 5,
            point_hit_radius: 10,
        }
    }

    /// Number of ticks with a value
    pub fn present(&self) -> usize {
        self.data.iter().filter(|v| v.is_some()).count()
    }
}

/// Labels and datasets of one chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    /// Tick indices `0..frames`
    pub labels: Vec<usize>,
    pub datasets: Vec<Dataset>,
}

/// All three dashboard charts
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCharts {
    pub consumption: ChartData,
    pub temperature_error: ChartData,
    pub temperatures: ChartData,
}

/// Reshape frames into one chart
pub fn build_chart(kind: ChartKind, frames: &[SimulationFrame]) -> ChartData {
    let datasets = kind
        .categories()
        .iter()
        .map(|category| {
            let data: Vec<Option<f64>> = frames.iter().map(|f| f.value(category)).collect();
            let dataset = Dataset::new(category, data, kind.colors());
            if dataset.present() < frames.len() {
                tracing::debug!(
                    chart = %kind,
                    category,
                    missing = frames.len() - dataset.present(),
                    "Frames without a numeric value"
                );
            }
            dataset
        })
        .collect();

    ChartData {
        labels: (0..frames.len()).collect(),
        datasets,
    }
}

/// Reshape frames into every dashboard chart
pub fn build_all(frames: &[SimulationFrame]) -> DashboardCharts {
    DashboardCharts {
        consumption: build_chart(ChartKind::Consumption, frames),
        temperature_error: build_chart(ChartKind::TemperatureError, frames),
        temperatures: build_chart(ChartKind::Temperatures, frames),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames() -> Vec<SimulationFrame> {
        (0..4)
            .map(|i| {
                let i = f64::from(i);
                SimulationFrame::new()
                    .with("Current consumption", 1000.0 + i)
                    .with("Regulation signal", 900.0)
                    .with("Outdoor temperature", 5.0 - i)
            })
            .collect()
    }

    #[test]
    fn test_frame_value_parsing() {
        let mut frame = SimulationFrame::new().with("a", 1.5);
        frame.insert("b", Value::from(" 2.25 "));
        frame.insert("c", Value::from(""));
        frame.insert("d", Value::from("n/a"));
        frame.insert("e", Value::Null);
        frame.insert("f", Value::from("NaN"));

        assert_eq!(frame.value("a"), Some(1.5));
        assert_eq!(frame.value("b"), Some(2.25));
        assert_eq!(frame.value("c"), None);
        assert_eq!(frame.value("d"), None);
        assert_eq!(frame.value("e"), None);
        assert_eq!(frame.value("f"), None);
        assert_eq!(frame.value("missing"), None);
        assert_eq!(frame.len(), 6);
    }

    #[test]
    fn test_build_consumption_chart() {
        let chart = build_chart(ChartKind::Consumption, &frames());
        assert_eq!(chart.labels, vec![0, 1, 2, 3]);
        assert_eq!(chart.datasets.len(), 2);

        let consumption = &chart.datasets[0];
        assert_eq!(consumption.label, "Current consumption");
        assert_eq!(
            consumption.data,
            vec![Some(1000.0), Some(1001.0), Some(1002.0), Some(1003.0)]
        );
        assert_eq!(consumption.border_color, vec!["blue", "white"]);
        assert_eq!(chart.datasets[1].data, vec![Some(900.0); 4]);
    }

    #[test]
    fn test_missing_categories_are_null() {
        let chart = build_chart(ChartKind::Temperatures, &frames());
        assert_eq!(chart.datasets.len(), 3);
        assert_eq!(chart.datasets[0].present(), 4);
        assert_eq!(chart.datasets[1].data, vec![None; 4]);
        assert_eq!(chart.datasets[2].present(), 0);
    }

    #[test]
    fn test_empty_frames() {
        let chart = build_chart(ChartKind::TemperatureError, &[]);
        assert!(chart.labels.is_empty());
        assert_eq!(chart.datasets.len(), 2);
        assert!(chart.datasets.iter().all(|d| d.data.is_empty()));
    }

    #[test]
    fn test_dataset_json_shape() {
        let chart = build_chart(ChartKind::TemperatureError, &frames());
        let json = serde_json::to_value(&chart).unwrap();
        let dataset = &json["datasets"][0];
        assert_eq!(dataset["label"], "Average temperature error");
        assert_eq!(dataset["fill"], false);
        assert_eq!(dataset["pointBackgroundColor"], "white");
        assert_eq!(dataset["pointHitRadius"], 10);
        assert_eq!(dataset["borderColor"][1], "orange");
        assert!(dataset["data"][0].is_null());
    }

    #[test]
    fn test_build_all() {
        let charts = build_all(&frames());
        assert_eq!(charts.consumption.datasets.len(), 2);
        assert_eq!(charts.temperature_error.datasets.len(), 2);
        assert_eq!(charts.temperatures.datasets.len(), 3);

        let json = serde_json::to_string(&charts).unwrap();
        assert!(json.contains("\"temperatureError\""));
    }

    #[test]
    fn test_chart_kind_parse() {
        assert_eq!("consumption".parse::<ChartKind>().unwrap(), ChartKind::Consumption);
        assert_eq!(
            "temperature_error".parse::<ChartKind>().unwrap(),
            ChartKind::TemperatureError
        );
        assert!("pressure".parse::<ChartKind>().is_err());
        for kind in ChartKind::all() {
            assert_eq!(kind.to_string().parse::<ChartKind>().unwrap(), *kind);
            assert_eq!(kind.categories().len(), kind.colors().len());
        }
    }

    #[test]
    fn test_frame_deserialize_mixed_values() {
        let json = r#"{"Current consumption": "1200.5", "Regulation signal": 1100}"#;
        let frame: SimulationFrame = serde_json::from_str(json).unwrap();
        assert_eq!(frame.value("Current consumption"), Some(1200.5));
        assert_eq!(frame.value("Regulation signal"), Some(1100.0));
    }
}
