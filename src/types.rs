//! Shared error and result types for the risk engine.

use thiserror::Error;

/// Error types for risk assessment operations
#[derive(Debug, Error)]
pub enum RiskError {
    /// Case analysis carried non-finite or out-of-range numbers
    #[error("Invalid case analysis: {0}")]
    InvalidAnalysis(String),

    /// Client profile carried non-finite or out-of-range numbers
    #[error("Invalid client profile: {0}")]
    InvalidProfile(String),

    /// A batch assessment task failed to settle cleanly
    #[error("Assessment task failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, RiskError>;
