//! Assessment confidence estimation
//!
//! Base confidence plus a share of the document analysis confidence plus a
//! bonus for substantial history behind the pattern statistics.

use crate::model::{CaseAnalysis, PatternAnalysisResult};

const BASE_CONFIDENCE: f64 = 0.5;
const ANALYSIS_CONFIDENCE_WEIGHT: f64 = 0.3;

/// Estimate confidence in an assessment, clamped to [0, 1]
pub fn calculate_assessment_confidence(
    analysis: &CaseAnalysis,
    patterns: &PatternAnalysisResult,
) -> f64 {
    let history_bonus = if patterns.total_cases > 50 {
        0.2
    } else if patterns.total_cases > 20 {
        0.1
    } else {
        0.0
    };

    (BASE_CONFIDENCE + analysis.confidence * ANALYSIS_CONFIDENCE_WEIGHT + history_bonus)
        .clamp(0.0, 1.0)
}
