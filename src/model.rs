//! Domain data model for risk assessment
//!
//! Inputs (`CaseInput`, `ClientProfile`, `HistoricalCorpus`) arrive
//! already materialized from the persistence, profiling, and document
//! analysis collaborators. Outputs (`RiskAssessmentResult`) are created
//! once per assessment and never mutated afterwards; the HTTP layer owns
//! their serialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a concluded historical case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseOutcome {
    Successful,
    Unsuccessful,
}

/// One concluded case from the historical corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalCaseRecord {
    /// Category string used to partition the corpus (e.g. "mietrecht")
    pub case_type: String,
    pub outcome: CaseOutcome,
    pub duration_days: f64,
    /// Risk factor labels observed in the case; absent means none
    #[serde(default)]
    pub risk_factors: Vec<String>,
}

/// Historical corpus, chronological (oldest first)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalCorpus {
    /// Caller-declared version/timestamp marker, used as the cache key.
    /// An empty marker keys as "default".
    #[serde(default)]
    pub version: String,
    pub cases: Vec<HistoricalCaseRecord>,
}

/// Document-analysis output for one case (external collaborator)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseAnalysis {
    /// Base risk score in [0, 1]
    pub base_risk_score: f64,
    #[serde(default)]
    pub risk_factors: Vec<String>,
    /// Analysis confidence in [0, 1]
    pub confidence: f64,
}

/// Client appetite for risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

/// Prior case outcomes for a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskHistory {
    pub negative_outcomes: u32,
    pub total_cases: u32,
}

/// Client profile (external collaborator)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub client_id: String,
    pub risk_tolerance: RiskTolerance,
    /// Financial stability in [0, 1]; lower values increase risk
    pub financial_stability: f64,
    #[serde(default)]
    pub risk_history: Option<RiskHistory>,
}

/// Aggregate statistics over the corpus slice for one case type.
///
/// Computed on demand per (case type, corpus version) and cached with a
/// fixed TTL; never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternAnalysisResult {
    pub success_rate: f64,
    pub average_duration_days: f64,
    /// Labels appearing in more than 10% of the filtered cases
    pub common_risk_factors: Vec<String>,
    /// Labels whose relative frequency grew >1.5x in the recent slice
    pub trending_risk_factors: Vec<String>,
    pub total_cases: usize,
}

impl PatternAnalysisResult {
    /// Neutral prior used when no history exists for a case type
    pub fn neutral_prior() -> Self {
        Self {
            success_rate: 0.5,
            average_duration_days: 90.0,
            common_risk_factors: Vec::new(),
            trending_risk_factors: Vec::new(),
            total_cases: 0,
        }
    }
}

/// Risk level, a total function of the risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Priority of a mitigation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyPriority {
    High,
    Medium,
    Low,
}

/// Catalog entry recommended in response to identified risk factors.
///
/// Entries come from the static catalog in [`crate::analysis::mitigation`];
/// the engine selects and copies them, never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MitigationStrategy {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub priority: StrategyPriority,
}

/// One case to assess: identity, type, and its document-analysis output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseInput {
    pub case_id: String,
    pub case_type: String,
    pub analysis: CaseAnalysis,
}

/// Assembled assessment for one case.
///
/// Deterministic for identical inputs except `assessed_at`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessmentResult {
    pub case_id: String,
    pub client_id: String,
    /// Clamped to [0, 1]
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    /// Deduplicated, first-seen order
    pub risk_factors: Vec<String>,
    pub mitigation_strategies: Vec<MitigationStrategy>,
    /// Clamped to [0, 1]
    pub confidence: f64,
    pub assessed_at: DateTime<Utc>,
}
