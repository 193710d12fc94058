//! Pest detection history and the canned result returned by the simulated scan.

use once_cell::sync::Lazy;
use serde::Deserialize;

use super::{decode, Tone};

const RAW: &str = include_str!("../../assets/data/pests.json");

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PestData {
    pub sample_image: String,
    pub analysis: PestAnalysis,
    pub recent: Vec<Detection>,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    #[default]
    Low,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Severity::High => Tone::Critical,
            Severity::Medium => Tone::Caution,
            Severity::Low => Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PestAnalysis {
    pub pest: String,
    pub confidence: u32,
    pub severity: Severity,
    pub treatment: String,
    pub description: String,
    pub urgency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreatmentStatus {
    Treated,
    Pending,
}

impl TreatmentStatus {
    pub fn label(self) -> &'static str {
        match self {
            TreatmentStatus::Treated => "Treated",
            TreatmentStatus::Pending => "Pending",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            TreatmentStatus::Treated => "✔",
            TreatmentStatus::Pending => "⏱",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Detection {
    pub date: String,
    pub pest: String,
    pub confidence: u32,
    pub severity: Severity,
    pub crop: String,
    pub status: TreatmentStatus,
}

impl Detection {
    pub fn summary_line(&self) -> String {
        format!(
            "{} • {} • {}% confidence",
            self.crop, self.date, self.confidence
        )
    }
}

static DATA: Lazy<PestData> = Lazy::new(|| decode("pests", RAW));

pub fn data() -> &'static PestData {
    &DATA
}
