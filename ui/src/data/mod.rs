//! Sample data shown by the screens.
//!
//! Every dataset is a JSON document under `assets/data/`, embedded at compile
//! time and decoded once on first access. The data is immutable for the life
//! of the process; nothing here is fetched or persisted.

pub mod dashboard;
pub mod market;
pub mod onboarding;
pub mod pests;
pub mod soil;
pub mod support;
pub mod weather;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("sample data `{name}` is malformed: {source}")]
    Malformed {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub fn try_decode<T: DeserializeOwned>(name: &'static str, raw: &str) -> Result<T, DataError> {
    serde_json::from_str(raw).map_err(|source| DataError::Malformed { name, source })
}

/// Decode an embedded dataset, falling back to an empty one (and logging) if
/// it does not parse. The tests in each dataset module keep this path cold.
pub(crate) fn decode<T: DeserializeOwned + Default>(name: &'static str, raw: &str) -> T {
    match try_decode(name, raw) {
        Ok(data) => data,
        Err(err) => {
            tracing::error!(dataset = name, %err, "falling back to empty sample data");
            T::default()
        }
    }
}

/// Urgency attached to alerts, advice and recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Priority::High => Tone::Critical,
            Priority::Medium => Tone::Caution,
            Priority::Low => Tone::Neutral,
        }
    }
}

/// Visual weight of a badge or banner. Maps onto the `badge--*` theme modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Caution,
    Critical,
    Neutral,
}

impl Tone {
    pub fn badge_class(self) -> &'static str {
        match self {
            Tone::Positive => "badge badge--positive",
            Tone::Caution => "badge badge--caution",
            Tone::Critical => "badge badge--critical",
            Tone::Neutral => "badge badge--neutral",
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            Tone::Positive => "text--positive",
            Tone::Caution => "text--caution",
            Tone::Critical => "text--critical",
            Tone::Neutral => "text--muted",
        }
    }
}
