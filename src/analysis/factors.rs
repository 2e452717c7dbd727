//! Risk factor identification
//!
//! Assembles the qualitative risk-factor labels for an assessment: the
//! case's own factors first, then client-profile and historical-pattern
//! labels, deduplicated in first-seen order.

use crate::model::{CaseAnalysis, ClientProfile, PatternAnalysisResult, RiskTolerance};

/// Label for clients with low risk appetite
pub const LOW_RISK_TOLERANCE: &str = "low risk tolerance";
/// Label for financially unstable clients
pub const LOW_FINANCIAL_STABILITY: &str = "low client financial stability";
/// Prefix of the trending-factors label (the joined factor list follows)
pub const TRENDING_FACTORS_PREFIX: &str = "trending risk factors";
/// Label for case types with a historically low success rate
pub const LOW_SUCCESS_RATE: &str = "historically low success rate";

/// Financial stability below this adds [`LOW_FINANCIAL_STABILITY`]
const FINANCIAL_STABILITY_FLOOR: f64 = 0.3;
/// Success rate below this adds [`LOW_SUCCESS_RATE`]
const SUCCESS_RATE_FLOOR: f64 = 0.4;

/// Identify the deduplicated risk-factor labels for an assessment
pub fn identify_risk_factors(
    analysis: &CaseAnalysis,
    profile: &ClientProfile,
    patterns: &PatternAnalysisResult,
) -> Vec<String> {
    let mut factors: Vec<String> = Vec::new();

    for factor in &analysis.risk_factors {
        push_unique(&mut factors, factor.clone());
    }

    if profile.risk_tolerance == RiskTolerance::Low {
        push_unique(&mut factors, LOW_RISK_TOLERANCE.to_string());
    }

    if profile.financial_stability < FINANCIAL_STABILITY_FLOOR {
        push_unique(&mut factors, LOW_FINANCIAL_STABILITY.to_string());
    }

    // Only corpus trends that touch this case's own factors are flagged
    let trending_hits: Vec<&str> = patterns
        .trending_risk_factors
        .iter()
        .filter(|factor| analysis.risk_factors.contains(factor))
        .map(String::as_str)
        .collect();
    if !trending_hits.is_empty() {
        push_unique(
            &mut factors,
            format!("{}: {}", TRENDING_FACTORS_PREFIX, trending_hits.join(", ")),
        );
    }

    if patterns.success_rate < SUCCESS_RATE_FLOOR {
        push_unique(&mut factors, LOW_SUCCESS_RATE.to_string());
    }

    factors
}

fn push_unique(factors: &mut Vec<String>, factor: String) {
    if !factors.contains(&factor) {
        factors.push(factor);
    }
}
