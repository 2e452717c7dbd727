//! Historical pattern analysis
//!
//! Aggregates statistics over the corpus slice for one case type: success
//! rate, average duration, common risk factors, and trending risk factors.
//! Trend detection compares relative frequencies between a recent tail and
//! the older head of the chronologically-ordered slice, so a factor can
//! trend even in a shrinking dataset.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::cache::{PatternCache, PatternKey};
use crate::model::{CaseOutcome, HistoricalCaseRecord, HistoricalCorpus, PatternAnalysisResult};

/// Factors must appear in more than this share of the filtered cases to
/// count as common (strict greater-than)
const COMMON_FACTOR_SHARE: f64 = 0.1;

/// Recent window is at most this many cases
const RECENT_WINDOW_MAX: usize = 50;

/// Recent window is at most this fraction of the filtered slice
const RECENT_WINDOW_FRACTION: f64 = 0.3;

/// A factor trends when its recent relative frequency exceeds its older
/// relative frequency by this ratio
const TRENDING_RATIO: f64 = 1.5;

/// Compute aggregate statistics for one case type over the full corpus.
///
/// Pure function; an empty slice yields the neutral prior.
pub fn analyze_historical_patterns(
    corpus: &HistoricalCorpus,
    case_type: &str,
) -> PatternAnalysisResult {
    let relevant: Vec<&HistoricalCaseRecord> = corpus
        .cases
        .iter()
        .filter(|record| record.case_type == case_type)
        .collect();

    if relevant.is_empty() {
        return PatternAnalysisResult::neutral_prior();
    }

    let total = relevant.len();
    let successful = relevant
        .iter()
        .filter(|record| record.outcome == CaseOutcome::Successful)
        .count();
    let success_rate = successful as f64 / total as f64;

    let average_duration_days =
        relevant.iter().map(|record| record.duration_days).sum::<f64>() / total as f64;

    let common_risk_factors = common_factors(&relevant, total);
    let trending_risk_factors = trending_factors(&relevant, total);

    PatternAnalysisResult {
        success_rate,
        average_duration_days,
        common_risk_factors,
        trending_risk_factors,
        total_cases: total,
    }
}

/// Count factor occurrences over records, preserving first-seen order
fn count_factors<'a>(
    records: &[&'a HistoricalCaseRecord],
) -> (Vec<&'a str>, HashMap<&'a str, usize>) {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for record in records {
        for factor in &record.risk_factors {
            let count = counts.entry(factor.as_str()).or_insert(0);
            if *count == 0 {
                order.push(factor.as_str());
            }
            *count += 1;
        }
    }

    (order, counts)
}

fn common_factors(relevant: &[&HistoricalCaseRecord], total: usize) -> Vec<String> {
    let (order, counts) = count_factors(relevant);
    let threshold = total as f64 * COMMON_FACTOR_SHARE;

    order
        .into_iter()
        .filter(|factor| counts[factor] as f64 > threshold)
        .map(str::to_string)
        .collect()
}

fn trending_factors(relevant: &[&HistoricalCaseRecord], total: usize) -> Vec<String> {
    let recent_size = RECENT_WINDOW_MAX.min((total as f64 * RECENT_WINDOW_FRACTION) as usize);
    if recent_size == 0 || recent_size >= total {
        // Too little history to split; produces no trending factors
        return Vec::new();
    }
    let older_size = total - recent_size;

    let (recent_order, recent_counts) = count_factors(&relevant[older_size..]);
    let (_, older_counts) = count_factors(&relevant[..older_size]);

    recent_order
        .into_iter()
        .filter(|factor| {
            let recent_ratio = recent_counts[factor] as f64 / recent_size as f64;
            let older_ratio =
                older_counts.get(factor).copied().unwrap_or(0) as f64 / older_size as f64;
            recent_ratio > older_ratio * TRENDING_RATIO
        })
        .map(str::to_string)
        .collect()
}

/// Pattern analyzer with TTL memoization of computed statistics
#[derive(Clone)]
pub struct HistoricalPatternAnalyzer {
    cache: Arc<dyn PatternCache>,
}

impl HistoricalPatternAnalyzer {
    /// Create an analyzer backed by the given cache
    pub fn new(cache: Arc<dyn PatternCache>) -> Self {
        Self { cache }
    }

    /// Analyze through the cache, keyed on (case type, corpus version).
    /// A hit returns the cached result without recomputation.
    pub fn analyze_cached(
        &self,
        corpus: &HistoricalCorpus,
        case_type: &str,
    ) -> PatternAnalysisResult {
        let key = PatternKey::new(case_type, &corpus.version);

        if let Some(cached) = self.cache.get(&key) {
            debug!(key = %key, "pattern cache hit");
            return cached;
        }

        debug!(key = %key, "pattern cache miss, computing");
        let result = analyze_historical_patterns(corpus, case_type);
        self.cache.set(key, result.clone());
        result
    }
}
