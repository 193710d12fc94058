//! Mandi prices, history, insights and the price watchlist.

use once_cell::sync::Lazy;
use serde::Deserialize;

use super::{decode, Tone};

const RAW: &str = include_str!("../../assets/data/market.json");

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MarketData {
    pub locations: Vec<Location>,
    pub today: Vec<MarketPrice>,
    pub history: Vec<PricePoint>,
    pub insights: Vec<MarketInsight>,
    pub watchlist: Vec<WatchItem>,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Demand {
    High,
    Medium,
    Low,
}

impl Demand {
    pub fn label(self) -> &'static str {
        match self {
            Demand::High => "High Demand",
            Demand::Medium => "Medium Demand",
            Demand::Low => "Low Demand",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Demand::High => Tone::Positive,
            Demand::Medium => Tone::Caution,
            Demand::Low => Tone::Critical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Trend::Up => Tone::Positive,
            Trend::Down => Tone::Critical,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarketPrice {
    pub crop: String,
    /// Rupees per `unit`.
    pub price: u64,
    pub unit: String,
    /// Day-on-day change, percent.
    pub change: f64,
    pub market: String,
    pub quality: String,
    pub demand: Demand,
}

impl MarketPrice {
    pub fn trend(&self) -> Trend {
        if self.change >= 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PricePoint {
    pub period: String,
    pub wheat: u64,
    pub rice: u64,
    pub cotton: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Neutral,
    Negative,
}

impl Impact {
    pub fn tone(self) -> Tone {
        match self {
            Impact::Positive => Tone::Positive,
            Impact::Neutral => Tone::Neutral,
            Impact::Negative => Tone::Critical,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarketInsight {
    pub title: String,
    pub description: String,
    pub impact: Impact,
    pub timeframe: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WatchItem {
    pub crop: String,
    pub target_price: u64,
    pub current_price: u64,
}

impl WatchItem {
    pub fn target_met(&self) -> bool {
        self.current_price >= self.target_price
    }

    pub fn status_label(&self) -> &'static str {
        if self.target_met() {
            "Target Met"
        } else {
            "Watching"
        }
    }
}

/// Case-insensitive substring match of `query` against crop names, keeping
/// input order. An empty query keeps everything.
pub fn filter_prices<'a>(prices: &'a [MarketPrice], query: &str) -> Vec<&'a MarketPrice> {
    let needle = query.to_lowercase();
    prices
        .iter()
        .filter(|item| item.crop.to_lowercase().contains(&needle))
        .collect()
}

static DATA: Lazy<MarketData> = Lazy::new(|| decode("market", RAW));

pub fn data() -> &'static MarketData {
    &DATA
}

impl MarketData {
    pub fn location_name(&self, code: &str) -> Option<&str> {
        self.locations
            .iter()
            .find(|loc| loc.code == code)
            .map(|loc| loc.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::try_decode;

    fn crops(items: Vec<&MarketPrice>) -> Vec<&str> {
        items.into_iter().map(|p| p.crop.as_str()).collect()
    }

    #[test]
    fn embedded_data_decodes() {
        let data: MarketData = try_decode("market", RAW).unwrap();
        assert_eq!(data.locations.len(), 5);
        assert_eq!(data.today.len(), 6);
        assert_eq!(data.history.len(), 4);
        assert_eq!(data.insights.len(), 3);
        assert_eq!(data.watchlist.len(), 3);
    }

    #[test]
    fn empty_query_keeps_every_price() {
        assert_eq!(filter_prices(&data().today, "").len(), data().today.len());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        assert_eq!(crops(filter_prices(&data().today, "RICE")), vec!["Rice (Basmati)"]);
        assert_eq!(
            crops(filter_prices(&data().today, "m")),
            vec!["Rice (Basmati)", "Maize", "Mustard"]
        );
        assert!(filter_prices(&data().today, "barley").is_empty());
    }

    #[test]
    fn trend_follows_sign_of_change() {
        let maize = data().today.iter().find(|p| p.crop == "Maize").unwrap();
        assert_eq!(maize.trend(), Trend::Down);
        let cane = data().today.iter().find(|p| p.crop == "Sugarcane").unwrap();
        assert_eq!(cane.trend(), Trend::Up);
    }

    #[test]
    fn watchlist_target_is_met_at_or_above_target() {
        let mut item = WatchItem {
            crop: "Wheat".into(),
            target_price: 2200,
            current_price: 2150,
        };
        assert!(!item.target_met());
        assert_eq!(item.status_label(), "Watching");
        item.current_price = 2200;
        assert!(item.target_met());
        assert_eq!(item.status_label(), "Target Met");
    }

    #[test]
    fn location_lookup() {
        assert_eq!(data().location_name("up"), Some("Uttar Pradesh"));
        assert_eq!(data().location_name("kerala"), None);
    }
}
