//! SmartLaw Risk Engine
//!
//! Turns a legal case plus a corpus of historical case outcomes into a
//! numeric risk score, qualitative risk factors, and ranked mitigation
//! strategies.
//!
//! ## Components
//!
//! - **Cache**: TTL memoization of historical-pattern statistics
//! - **Analysis**: pattern statistics, weighted scoring, factor
//!   identification, mitigation catalog, confidence estimation
//! - **Pipeline**: single-case assessment orchestration
//! - **Batch**: bounded-concurrency coordinator with per-case failure
//!   isolation

pub mod analysis;
pub mod batch;
pub mod cache;
pub mod config;
pub mod model;
pub mod pipeline;
pub mod types;

pub use batch::{BatchAssessmentCoordinator, BatchOutcome};
pub use config::EngineConfig;
pub use pipeline::RiskAssessmentEngine;
pub use types::{Result, RiskError};
