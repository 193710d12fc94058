pub mod engine;
pub mod view;

pub use engine::{ScanEngine, ScanState, ScheduledAnalysis, ANALYSIS_DELAY_MS};
pub use view::PestScanView;
