pub mod detector;
pub mod engine;
pub mod scoring;

pub use detector::{detect_signals, trend_label};
pub use engine::{AnalysisEngine, TechnicalAnalysis};
pub use scoring::aggregate_score;
