//! Simulated photo analysis for pest detection.
//!
//! There is no classifier: starting a scan schedules a single completion after
//! [`ANALYSIS_DELAY_MS`] that always yields the canned sample result. Each
//! start or reset bumps `run_id`, so a completion scheduled by an earlier run
//! is recognised as stale and dropped.

use crate::data::pests::PestAnalysis;

pub const ANALYSIS_DELAY_MS: u64 = 3_000;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ScanState {
    #[default]
    Idle,
    Analyzing,
    Complete(PestAnalysis),
}

/// Completion the view must deliver back after `wait_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledAnalysis {
    pub run_id: u64,
    pub wait_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanEngine {
    pub run_id: u64,
    pub state: ScanState,
    /// Image under analysis, if one has been captured.
    pub image: Option<String>,
}

impl ScanEngine {
    /// Capture `image` and begin analysing it. Returns `None` while a scan is
    /// already in flight.
    pub fn start(&mut self, image: &str) -> Option<ScheduledAnalysis> {
        if self.is_analyzing() {
            return None;
        }
        self.run_id = self.run_id.wrapping_add(1);
        self.image = Some(image.to_string());
        self.state = ScanState::Analyzing;
        Some(ScheduledAnalysis {
            run_id: self.run_id,
            wait_ms: ANALYSIS_DELAY_MS,
        })
    }

    /// Deliver the result for `run_id`. Returns false for stale runs.
    pub fn complete(&mut self, run_id: u64, result: &PestAnalysis) -> bool {
        if run_id != self.run_id || !self.is_analyzing() {
            return false;
        }
        self.state = ScanState::Complete(result.clone());
        true
    }

    /// Drop the image and any result so another photo can be analysed.
    pub fn reset(&mut self) {
        self.run_id = self.run_id.wrapping_add(1);
        self.image = None;
        self.state = ScanState::Idle;
    }

    pub fn is_analyzing(&self) -> bool {
        self.state == ScanState::Analyzing
    }

    pub fn result(&self) -> Option<&PestAnalysis> {
        match &self.state {
            ScanState::Complete(result) => Some(result),
            _ => None,
        }
    }
}
