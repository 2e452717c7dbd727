//! Batch assessment coordination
//!
//! Runs the pipeline over many cases in fixed-size batches. Within a
//! batch every case is dispatched concurrently and the coordinator waits
//! for all of them to settle; one case's failure is tagged at its input
//! position and never cancels sibling work. Batches run sequentially, so
//! peak concurrency is bounded by the batch size.

use serde::Serialize;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::model::{CaseInput, ClientProfile, HistoricalCorpus, RiskAssessmentResult};
use crate::pipeline::RiskAssessmentEngine;
use crate::types::RiskError;

/// Per-case batch result: an assessment, or an error tag at that case's
/// position
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BatchOutcome {
    Assessed(RiskAssessmentResult),
    Failed { case_id: String, error: String },
}

impl BatchOutcome {
    pub fn is_assessed(&self) -> bool {
        matches!(self, BatchOutcome::Assessed(_))
    }

    pub fn as_assessed(&self) -> Option<&RiskAssessmentResult> {
        match self {
            BatchOutcome::Assessed(result) => Some(result),
            BatchOutcome::Failed { .. } => None,
        }
    }
}

/// Coordinates batched, failure-isolated assessment runs
pub struct BatchAssessmentCoordinator {
    engine: RiskAssessmentEngine,
    batch_size: usize,
}

impl BatchAssessmentCoordinator {
    pub fn new(engine: RiskAssessmentEngine, batch_size: usize) -> Self {
        // A zero batch size would never make progress
        let batch_size = batch_size.max(1);
        Self { engine, batch_size }
    }

    /// Assess all cases. The output has one entry per input case, in input
    /// order, regardless of completion order within a batch.
    pub async fn run(
        &self,
        cases: Vec<CaseInput>,
        profile: &ClientProfile,
        corpus: &HistoricalCorpus,
    ) -> Vec<BatchOutcome> {
        let total = cases.len();
        info!(total, batch_size = self.batch_size, "starting batch assessment");

        let profile = Arc::new(profile.clone());
        let corpus = Arc::new(corpus.clone());

        let case_ids: Vec<String> = cases.iter().map(|c| c.case_id.clone()).collect();
        let indexed: Vec<(usize, CaseInput)> = cases.into_iter().enumerate().collect();

        // Completed results are buffered by input index so ordering never
        // depends on completion order
        let mut slots: Vec<Option<BatchOutcome>> = (0..total).map(|_| None).collect();

        for batch in indexed.chunks(self.batch_size) {
            let mut tasks = JoinSet::new();

            for (index, case) in batch.iter().cloned() {
                let engine = self.engine.clone();
                let profile = Arc::clone(&profile);
                let corpus = Arc::clone(&corpus);

                tasks.spawn(async move {
                    let case_id = case.case_id.clone();
                    let outcome = match engine.assess_case_risk(&case, &profile, &corpus) {
                        Ok(result) => BatchOutcome::Assessed(result),
                        Err(e) => {
                            debug!(case_id = %case_id, error = %e, "case assessment failed");
                            BatchOutcome::Failed {
                                case_id,
                                error: e.to_string(),
                            }
                        }
                    };
                    (index, outcome)
                });
            }

            // Wait for the whole batch to settle before starting the next
            while let Some(joined) = tasks.join_next().await {
                match joined {
                    Ok((index, outcome)) => slots[index] = Some(outcome),
                    Err(e) => {
                        // Task panicked or was aborted; its slot is filled
                        // from case_ids below
                        warn!(error = %e, "assessment task did not settle cleanly");
                    }
                }
            }
        }

        let failures = slots.iter().flatten().filter(|o| !o.is_assessed()).count();
        info!(total, failures, "batch assessment settled");

        slots
            .into_iter()
            .zip(case_ids)
            .map(|(slot, case_id)| {
                slot.unwrap_or_else(|| BatchOutcome::Failed {
                    case_id,
                    error: RiskError::Task("task did not settle".to_string()).to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::model::{CaseAnalysis, CaseOutcome, HistoricalCaseRecord, RiskTolerance};

    fn case(id: &str, base: f64) -> CaseInput {
        CaseInput {
            case_id: id.to_string(),
            case_type: "mietrecht".to_string(),
            analysis: CaseAnalysis {
                base_risk_score: base,
                risk_factors: vec!["weak_evidence".to_string()],
                confidence: 0.8,
            },
        }
    }

    fn profile() -> ClientProfile {
        ClientProfile {
            client_id: "client-1".to_string(),
            risk_tolerance: RiskTolerance::Medium,
            financial_stability: 0.8,
            risk_history: None,
        }
    }

    fn corpus() -> HistoricalCorpus {
        HistoricalCorpus {
            version: "v1".to_string(),
            cases: vec![HistoricalCaseRecord {
                case_type: "mietrecht".to_string(),
                outcome: CaseOutcome::Successful,
                duration_days: 30.0,
                risk_factors: vec!["weak_evidence".to_string()],
            }],
        }
    }

    #[tokio::test]
    async fn test_batch_preserves_input_order() {
        let engine = RiskAssessmentEngine::new(EngineConfig::default());
        let cases: Vec<CaseInput> = (0..25).map(|i| case(&format!("case-{}", i), 0.5)).collect();

        let outcomes = engine.assess_case_risk_batch(cases, &profile(), &corpus()).await;

        assert_eq!(outcomes.len(), 25);
        for (i, outcome) in outcomes.iter().enumerate() {
            let result = outcome.as_assessed().expect("all cases valid");
            assert_eq!(result.case_id, format!("case-{}", i));
        }
    }

    #[tokio::test]
    async fn test_failure_is_isolated_at_its_index() {
        let engine = RiskAssessmentEngine::new(EngineConfig::default());
        let mut cases: Vec<CaseInput> =
            (0..12).map(|i| case(&format!("case-{}", i), 0.5)).collect();
        // Case #5 (index 4) carries a malformed analysis
        cases[4].analysis.base_risk_score = f64::NAN;

        let outcomes = engine.assess_case_risk_batch(cases, &profile(), &corpus()).await;

        assert_eq!(outcomes.len(), 12);
        for (i, outcome) in outcomes.iter().enumerate() {
            if i == 4 {
                match outcome {
                    BatchOutcome::Failed { case_id, error } => {
                        assert_eq!(case_id, "case-4");
                        assert!(error.contains("base_risk_score"));
                    }
                    BatchOutcome::Assessed(_) => panic!("case 4 should have failed"),
                }
            } else {
                assert!(outcome.is_assessed(), "case {} affected by sibling failure", i);
            }
        }
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let engine = RiskAssessmentEngine::new(EngineConfig::default());
        let outcomes = engine.assess_case_risk_batch(vec![], &profile(), &corpus()).await;
        assert!(outcomes.is_empty());
    }

    #[tokio::test]
    async fn test_batch_workers_share_the_cache() {
        use crate::cache::{PatternKey, TtlCache};
        use crate::model::PatternAnalysisResult;
        use std::sync::Arc;
        use std::time::Duration;

        let cache: Arc<TtlCache<PatternKey, PatternAnalysisResult>> =
            Arc::new(TtlCache::new(Duration::from_secs(60)));
        let engine = RiskAssessmentEngine::with_cache(EngineConfig::default(), cache.clone());
        let cases: Vec<CaseInput> = (0..20).map(|i| case(&format!("case-{}", i), 0.5)).collect();

        let outcomes = engine.assess_case_risk_batch(cases, &profile(), &corpus()).await;

        assert!(outcomes.iter().all(BatchOutcome::is_assessed));
        // One distinct (case_type, version) key, computed at most once per
        // concurrent race, then served from cache
        assert_eq!(cache.len(), 1);
        assert!(cache.stats().hits() > 0);
    }

    #[test]
    fn test_failed_outcome_serialization() {
        let outcome = BatchOutcome::Failed {
            case_id: "case-1".to_string(),
            error: "boom".to_string(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["case_id"], "case-1");
    }
}
