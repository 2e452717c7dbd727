//! Engine configuration
//!
//! Defaults match the production behavior: 30 minute pattern cache TTL and
//! batches of 10 concurrent assessments. Both can be overridden from the
//! environment for deployments with different load profiles.

use std::time::Duration;

/// Configuration for the risk assessment engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// TTL for cached historical-pattern results (default: 30 minutes)
    pub cache_ttl: Duration,
    /// Cases assessed concurrently per batch (default: 10)
    pub batch_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(30 * 60), // 30 minutes
            batch_size: 10,
        }
    }
}

impl EngineConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("PATTERN_CACHE_TTL_SECS") {
            if let Ok(secs) = val.parse::<u64>() {
                config.cache_ttl = Duration::from_secs(secs);
            }
        }

        if let Ok(val) = std::env::var("ASSESSMENT_BATCH_SIZE") {
            if let Ok(size) = val.parse::<usize>() {
                if size > 0 {
                    config.batch_size = size;
                }
            }
        }

        config
    }
}
