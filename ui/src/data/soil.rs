//! Soil health readings, nutrient levels and fertilizer suggestions for the sample field.

use once_cell::sync::Lazy;
use serde::Deserialize;

use super::{decode, Priority, Tone};

const RAW: &str = include_str!("../../assets/data/soil.json");

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SoilData {
    pub field: String,
    pub health: String,
    pub score: u32,
    pub metrics: Vec<SoilMetric>,
    pub nutrients: Vec<Nutrient>,
    pub recommendations: Vec<SoilRecommendation>,
    pub fertilizers: Vec<Fertilizer>,
    pub tips: Vec<String>,
}

/// Reading status. `Good` and `High` are both healthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingStatus {
    Good,
    High,
    Medium,
    Low,
}

impl ReadingStatus {
    pub fn label(self) -> &'static str {
        match self {
            ReadingStatus::Good => "good",
            ReadingStatus::High => "high",
            ReadingStatus::Medium => "medium",
            ReadingStatus::Low => "low",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            ReadingStatus::Good | ReadingStatus::High => Tone::Positive,
            ReadingStatus::Medium => Tone::Caution,
            ReadingStatus::Low => Tone::Critical,
        }
    }

    pub fn icon(self) -> &'static str {
        match self.tone() {
            Tone::Positive => "✔",
            Tone::Caution => "⚠",
            _ => "✖",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SoilMetric {
    pub name: String,
    pub value: f64,
    pub ideal: String,
    pub status: ReadingStatus,
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Nutrient {
    pub name: String,
    /// Percent of the recommended level, 0..=100.
    pub level: u32,
    pub status: ReadingStatus,
}

impl Nutrient {
    pub fn bar_width(&self) -> String {
        format!("width: {}%", self.level.min(100))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SoilRecommendation {
    pub title: String,
    pub priority: Priority,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Fertilizer {
    pub name: String,
    pub dosage: String,
    pub timing: String,
    pub cost: String,
}

static DATA: Lazy<SoilData> = Lazy::new(|| decode("soil", RAW));

pub fn data() -> &'static SoilData {
    &DATA
}
