//! Hub screen sample data: weather summary, alerts, crop picks, price snapshot.

use once_cell::sync::Lazy;
use serde::Deserialize;

use super::{decode, Priority, Tone};

const RAW: &str = include_str!("../../assets/data/dashboard.json");

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DashboardData {
    pub farmer: String,
    pub weather: WeatherSummary,
    pub alerts: Vec<FarmAlert>,
    pub recommendations: Vec<CropRecommendation>,
    pub prices: Vec<PriceSnapshot>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WeatherSummary {
    pub temperature: i32,
    pub condition: String,
    pub humidity: u32,
    pub high: i32,
    pub low: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FarmAlert {
    pub kind: String,
    pub message: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropStatus {
    Optimal,
    Good,
    Moderate,
}

impl CropStatus {
    pub fn label(self) -> &'static str {
        match self {
            CropStatus::Optimal => "Optimal",
            CropStatus::Good => "Good",
            CropStatus::Moderate => "Moderate",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            CropStatus::Optimal => Tone::Positive,
            CropStatus::Good => Tone::Caution,
            CropStatus::Moderate => Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CropRecommendation {
    pub crop: String,
    pub status: CropStatus,
    pub confidence: u32,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriceSnapshot {
    pub crop: String,
    pub price: u64,
    pub unit: String,
    pub change: f64,
}

impl PriceSnapshot {
    pub fn change_tone(&self) -> Tone {
        if self.change >= 0.0 {
            Tone::Positive
        } else {
            Tone::Critical
        }
    }
}

static DATA: Lazy<DashboardData> = Lazy::new(|| decode("dashboard", RAW));

pub fn data() -> &'static DashboardData {
    &DATA
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::try_decode;

    #[test]
    fn embedded_data_decodes() {
        let data: DashboardData = try_decode("dashboard", RAW).unwrap();
        assert_eq!(data.alerts.len(), 2);
        assert_eq!(data.recommendations.len(), 3);
        assert_eq!(data.prices.len(), 2);
    }

    #[test]
    fn high_priority_alert_comes_first() {
        assert_eq!(data().alerts[0].priority.tone(), Tone::Critical);
    }

    #[test]
    fn falling_prices_are_flagged() {
        let rice = data().prices.iter().find(|p| p.crop == "Rice").unwrap();
        assert_eq!(rice.change_tone(), Tone::Critical);
    }
}
