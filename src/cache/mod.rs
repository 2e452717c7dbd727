//! Pattern cache
//!
//! TTL memoization of historical-pattern statistics. The engine constructs
//! one store per process and passes it into the analyzer explicitly; tests
//! inject fakes through the [`PatternCache`] trait.

pub mod keys;
pub mod store;

pub use keys::PatternKey;
pub use store::{CacheStats, CacheStatsSnapshot, TtlCache};

use crate::model::PatternAnalysisResult;

/// Injected memoization interface for pattern analysis results
pub trait PatternCache: Send + Sync {
    /// Look up a cached result; absent or expired entries return `None`
    fn get(&self, key: &PatternKey) -> Option<PatternAnalysisResult>;
    /// Store a freshly computed result at the store's configured TTL
    fn set(&self, key: PatternKey, value: PatternAnalysisResult);
}

impl PatternCache for TtlCache<PatternKey, PatternAnalysisResult> {
    fn get(&self, key: &PatternKey) -> Option<PatternAnalysisResult> {
        TtlCache::get(self, key)
    }

    fn set(&self, key: PatternKey, value: PatternAnalysisResult) {
        TtlCache::set(self, key, value)
    }
}
