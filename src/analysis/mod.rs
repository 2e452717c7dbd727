//! Analysis components
//!
//! Pure scoring logic plus the cache-backed pattern analyzer. Every
//! function here is independently callable for unit testing; the pipeline
//! wires them together per case.

pub mod confidence;
pub mod factors;
pub mod mitigation;
pub mod patterns;
pub mod scoring;

pub use confidence::calculate_assessment_confidence;
pub use factors::identify_risk_factors;
pub use mitigation::generate_mitigation_strategies;
pub use patterns::{analyze_historical_patterns, HistoricalPatternAnalyzer};
pub use scoring::{calculate_risk_score, determine_risk_level};
