//! Forecasts, current conditions and weather-driven farming advice.

use once_cell::sync::Lazy;
use serde::Deserialize;

use super::{decode, Priority, Tone};

const RAW: &str = include_str!("../../assets/data/weather.json");

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WeatherData {
    pub location: String,
    pub current: CurrentConditions,
    pub hourly: Vec<HourlyForecast>,
    pub weekly: Vec<DailyForecast>,
    pub advice: Vec<FarmingAdvice>,
    pub alerts: Vec<WeatherAlert>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CurrentConditions {
    pub temperature: i32,
    pub condition: String,
    pub humidity: u32,
    /// km/h
    pub wind_speed: u32,
    /// km
    pub visibility: u32,
    pub uv_index: u32,
    pub uv_label: String,
    /// hPa
    pub pressure: u32,
    pub dew_point: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sky {
    Sun,
    Cloud,
    Rain,
}

impl Sky {
    pub fn icon(self) -> &'static str {
        match self {
            Sky::Sun => "☀️",
            Sky::Cloud => "☁️",
            Sky::Rain => "🌧️",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HourlyForecast {
    pub time: String,
    pub temp: i32,
    pub sky: Sky,
    /// Chance of rain, percent.
    pub rain: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailyForecast {
    pub day: String,
    pub high: i32,
    pub low: i32,
    pub sky: Sky,
    pub condition: String,
    pub rain: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FarmingAdvice {
    pub title: String,
    pub message: String,
    pub priority: Priority,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherAlert {
    pub kind: String,
    pub time: String,
    pub description: String,
    pub severity: Priority,
}

/// Rain chance bucket: below 30% low, below 70% medium, otherwise high.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainChance {
    Low,
    Medium,
    High,
}

impl RainChance {
    pub fn from_percent(chance: u32) -> Self {
        if chance < 30 {
            RainChance::Low
        } else if chance < 70 {
            RainChance::Medium
        } else {
            RainChance::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RainChance::Low => "Low",
            RainChance::Medium => "Medium",
            RainChance::High => "High",
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            RainChance::Low => "rain--low",
            RainChance::Medium => "rain--medium",
            RainChance::High => "rain--high",
        }
    }
}

impl FarmingAdvice {
    /// Advice only distinguishes urgent from everything else.
    pub fn tone(&self) -> Tone {
        if self.priority == Priority::High {
            Tone::Critical
        } else {
            Tone::Caution
        }
    }
}

static DATA: Lazy<WeatherData> = Lazy::new(|| decode("weather", RAW));

pub fn data() -> &'static WeatherData {
    &DATA
}
