//! Risk scoring
//!
//! Combines a case's base risk with client-profile and historical-pattern
//! adjustments into a score clamped to [0, 1]. Near-certain base
//! assessments early-exit with only a small adjustment band so extremes
//! stay distinguishable without being moved by secondary heuristics.

use crate::model::{CaseAnalysis, ClientProfile, PatternAnalysisResult, RiskLevel};

/// Weight of the client's negative-outcome ratio
const CLIENT_HISTORY_WEIGHT: f64 = 0.2;
/// Weight of the client's financial instability
const FINANCIAL_STABILITY_WEIGHT: f64 = 0.15;
/// Weight of the historical failure rate for similar cases
const HISTORICAL_SUCCESS_WEIGHT: f64 = 0.25;
/// Added per case factor that is also trending in the corpus
const TRENDING_FACTOR_WEIGHT: f64 = 0.1;

/// Calculate the adjusted risk score, clamped to [0, 1].
///
/// Pure function; adjustments are additive and order-insensitive.
pub fn calculate_risk_score(
    analysis: &CaseAnalysis,
    profile: &ClientProfile,
    patterns: &PatternAnalysisResult,
) -> f64 {
    let base = analysis.base_risk_score;

    // Near-certain assessments keep a small adjustment band only
    if base >= 0.95 {
        return (base + 0.05).min(0.99);
    }
    if base <= 0.05 {
        return (base - 0.05).max(0.01);
    }

    let mut score = base;

    if let Some(history) = &profile.risk_history {
        if history.total_cases > 0 {
            let negative_ratio = history.negative_outcomes as f64 / history.total_cases as f64;
            score += negative_ratio * CLIENT_HISTORY_WEIGHT;
        }
    }

    score += (1.0 - profile.financial_stability) * FINANCIAL_STABILITY_WEIGHT;

    score += (1.0 - patterns.success_rate) * HISTORICAL_SUCCESS_WEIGHT;

    let trending_hits = analysis
        .risk_factors
        .iter()
        .filter(|factor| patterns.trending_risk_factors.contains(factor))
        .count();
    score += trending_hits as f64 * TRENDING_FACTOR_WEIGHT;

    score.clamp(0.0, 1.0)
}

/// Map a score to its risk level. Total over [0, 1]: below 0.3 is low,
/// 0.3 up to (not including) 0.7 is medium, 0.7 and above is high.
pub fn determine_risk_level(risk_score: f64) -> RiskLevel {
    if risk_score < 0.3 {
        RiskLevel::Low
    } else if risk_score < 0.7 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RiskHistory, RiskTolerance};
    use rand::Rng;

    fn analysis(base: f64, factors: &[&str]) -> CaseAnalysis {
        CaseAnalysis {
            base_risk_score: base,
            risk_factors: factors.iter().map(|f| f.to_string()).collect(),
            confidence: 0.8,
        }
    }

    fn profile(stability: f64, history: Option<RiskHistory>) -> ClientProfile {
        ClientProfile {
            client_id: "client-1".to_string(),
            risk_tolerance: RiskTolerance::Medium,
            financial_stability: stability,
            risk_history: history,
        }
    }

    fn patterns(success_rate: f64, trending: &[&str]) -> PatternAnalysisResult {
        PatternAnalysisResult {
            success_rate,
            average_duration_days: 90.0,
            common_risk_factors: Vec::new(),
            trending_risk_factors: trending.iter().map(|f| f.to_string()).collect(),
            total_cases: 10,
        }
    }

    #[test]
    fn test_high_base_early_exit() {
        let score = calculate_risk_score(
            &analysis(0.97, &[]),
            &profile(0.1, None),
            &patterns(0.0, &[]),
        );
        // Adjustments from profile/history must not apply
        assert!((score - 0.99).abs() < 1e-12);
        assert!(score >= 0.97);
    }

    #[test]
    fn test_high_base_boundary() {
        let score = calculate_risk_score(
            &analysis(0.95, &[]),
            &profile(1.0, None),
            &patterns(1.0, &[]),
        );
        assert!((score - 0.99).abs() < 1e-12);
    }

    #[test]
    fn test_low_base_early_exit() {
        let score = calculate_risk_score(
            &analysis(0.03, &[]),
            &profile(0.0, None),
            &patterns(0.0, &[]),
        );
        assert!((score - 0.01).abs() < 1e-12);
        assert!(score <= 0.03);
    }

    #[test]
    fn test_additive_adjustments() {
        let history = RiskHistory {
            negative_outcomes: 1,
            total_cases: 4,
        };
        let score = calculate_risk_score(
            &analysis(0.5, &["surge"]),
            &profile(0.8, Some(history)),
            &patterns(0.6, &["surge"]),
        );
        // 0.5 + 0.25*0.2 + 0.2*0.15 + 0.4*0.25 + 1*0.1
        assert!((score - 0.78).abs() < 1e-12);
    }

    #[test]
    fn test_zero_history_denominator_contributes_nothing() {
        let history = RiskHistory {
            negative_outcomes: 3,
            total_cases: 0,
        };
        let with = calculate_risk_score(
            &analysis(0.5, &[]),
            &profile(1.0, Some(history)),
            &patterns(1.0, &[]),
        );
        let without = calculate_risk_score(
            &analysis(0.5, &[]),
            &profile(1.0, None),
            &patterns(1.0, &[]),
        );
        assert_eq!(with, without);
    }

    #[test]
    fn test_clamped_to_unit_interval() {
        let history = RiskHistory {
            negative_outcomes: 10,
            total_cases: 10,
        };
        let score = calculate_risk_score(
            &analysis(0.9, &["a", "b", "c"]),
            &profile(0.0, Some(history)),
            &patterns(0.0, &["a", "b", "c"]),
        );
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_score_in_unit_interval_for_random_inputs() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let history = RiskHistory {
                negative_outcomes: rng.gen_range(0..20),
                total_cases: rng.gen_range(0..20),
            };
            let trending: Vec<&str> = ["a", "b", "c", "d"]
                .iter()
                .take(rng.gen_range(0..=4))
                .copied()
                .collect();
            let score = calculate_risk_score(
                &analysis(rng.gen_range(0.0..=1.0), &["a", "b", "c", "d"]),
                &profile(rng.gen_range(0.0..=1.0), Some(history)),
                &patterns(rng.gen_range(0.0..=1.0), &trending),
            );
            assert!((0.0..=1.0).contains(&score), "score out of range: {}", score);
        }
    }

    #[test]
    fn test_risk_level_bands() {
        assert_eq!(determine_risk_level(0.2), RiskLevel::Low);
        assert_eq!(determine_risk_level(0.5), RiskLevel::Medium);
        assert_eq!(determine_risk_level(0.8), RiskLevel::High);
    }

    #[test]
    fn test_risk_level_exact_boundaries() {
        assert_eq!(determine_risk_level(0.3), RiskLevel::Medium);
        assert_eq!(determine_risk_level(0.7), RiskLevel::High);
        assert_eq!(determine_risk_level(0.0), RiskLevel::Low);
        assert_eq!(determine_risk_level(1.0), RiskLevel::High);
    }
}
