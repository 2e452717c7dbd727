//! Single-case assessment pipeline
//!
//! Orchestrates pattern analysis (cache-checked), scoring, factor
//! identification, mitigation selection, and confidence estimation for one
//! case, and assembles the result. Stateless but for the injected pattern
//! cache; given identical inputs and an unchanged corpus version the output
//! is identical except for `assessed_at`.

use chrono::Utc;
use std::sync::Arc;
use tracing::debug;

use crate::analysis::{
    calculate_assessment_confidence, calculate_risk_score, determine_risk_level,
    generate_mitigation_strategies, identify_risk_factors, HistoricalPatternAnalyzer,
};
use crate::batch::{BatchAssessmentCoordinator, BatchOutcome};
use crate::cache::{PatternCache, PatternKey, TtlCache};
use crate::config::EngineConfig;
use crate::model::{
    CaseAnalysis, CaseInput, ClientProfile, HistoricalCorpus, PatternAnalysisResult,
    RiskAssessmentResult,
};
use crate::types::{Result, RiskError};

/// Risk assessment engine: one per process, cheap to clone (clones share
/// the pattern cache)
#[derive(Clone)]
pub struct RiskAssessmentEngine {
    config: EngineConfig,
    analyzer: HistoricalPatternAnalyzer,
}

impl RiskAssessmentEngine {
    /// Create an engine with its own TTL pattern cache
    pub fn new(config: EngineConfig) -> Self {
        let cache: Arc<TtlCache<PatternKey, PatternAnalysisResult>> =
            Arc::new(TtlCache::new(config.cache_ttl));
        Self::with_cache(config, cache)
    }

    /// Create an engine around an injected cache (tests pass fakes here)
    pub fn with_cache(config: EngineConfig, cache: Arc<dyn PatternCache>) -> Self {
        Self {
            config,
            analyzer: HistoricalPatternAnalyzer::new(cache),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Assess one case against the client profile and historical corpus.
    ///
    /// Empty or unknown-type corpora fall back to the neutral prior and
    /// never error; malformed analysis numbers do.
    pub fn assess_case_risk(
        &self,
        case: &CaseInput,
        profile: &ClientProfile,
        corpus: &HistoricalCorpus,
    ) -> Result<RiskAssessmentResult> {
        validate_analysis(&case.analysis)?;
        validate_profile(profile)?;

        let patterns = self.analyzer.analyze_cached(corpus, &case.case_type);

        let risk_score = calculate_risk_score(&case.analysis, profile, &patterns);
        let risk_level = determine_risk_level(risk_score);
        let risk_factors = identify_risk_factors(&case.analysis, profile, &patterns);
        let mitigation_strategies = generate_mitigation_strategies(&risk_factors);
        let confidence = calculate_assessment_confidence(&case.analysis, &patterns);

        debug!(
            case_id = %case.case_id,
            risk_score,
            risk_level = ?risk_level,
            factors = risk_factors.len(),
            strategies = mitigation_strategies.len(),
            "case assessed"
        );

        Ok(RiskAssessmentResult {
            case_id: case.case_id.clone(),
            client_id: profile.client_id.clone(),
            risk_score,
            risk_level,
            risk_factors,
            mitigation_strategies,
            confidence,
            assessed_at: Utc::now(),
        })
    }

    /// Assess many cases in fixed-size concurrent batches; output order
    /// matches input order and one case's failure never affects siblings.
    pub async fn assess_case_risk_batch(
        &self,
        cases: Vec<CaseInput>,
        profile: &ClientProfile,
        corpus: &HistoricalCorpus,
    ) -> Vec<BatchOutcome> {
        BatchAssessmentCoordinator::new(self.clone(), self.config.batch_size)
            .run(cases, profile, corpus)
            .await
    }
}

fn validate_analysis(analysis: &CaseAnalysis) -> Result<()> {
    if !analysis.base_risk_score.is_finite()
        || !(0.0..=1.0).contains(&analysis.base_risk_score)
    {
        return Err(RiskError::InvalidAnalysis(format!(
            "base_risk_score out of range: {}",
            analysis.base_risk_score
        )));
    }
    if !analysis.confidence.is_finite() || !(0.0..=1.0).contains(&analysis.confidence) {
        return Err(RiskError::InvalidAnalysis(format!(
            "confidence out of range: {}",
            analysis.confidence
        )));
    }
    Ok(())
}

fn validate_profile(profile: &ClientProfile) -> Result<()> {
    if !profile.financial_stability.is_finite()
        || !(0.0..=1.0).contains(&profile.financial_stability)
    {
        return Err(RiskError::InvalidProfile(format!(
            "financial_stability out of range: {}",
            profile.financial_stability
        )));
    }
    Ok(())
}
