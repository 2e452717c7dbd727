//! smartlaw-risk - batch risk assessment from JSON inputs
//!
//! Loads cases, a client profile, and a historical corpus from JSON files,
//! runs a batch assessment, and prints the outcomes as JSON. The HTTP
//! service drives the engine the same way through the library API.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use smartlaw_risk::model::{CaseInput, ClientProfile, HistoricalCorpus};
use smartlaw_risk::{EngineConfig, RiskAssessmentEngine};

/// SmartLaw risk assessment engine
#[derive(Parser, Debug)]
#[command(name = "smartlaw-risk")]
#[command(about = "Assess legal-case risk against a historical corpus")]
struct Args {
    /// JSON file with the cases to assess (array of case inputs)
    #[arg(long, env = "CASES_FILE")]
    cases: PathBuf,

    /// JSON file with the client profile
    #[arg(long, env = "CLIENT_FILE")]
    client: PathBuf,

    /// JSON file with the historical corpus
    #[arg(long, env = "CORPUS_FILE")]
    corpus: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("smartlaw_risk={},info", args.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cases: Vec<CaseInput> = serde_json::from_str(&std::fs::read_to_string(&args.cases)?)?;
    let profile: ClientProfile = serde_json::from_str(&std::fs::read_to_string(&args.client)?)?;
    let corpus: HistoricalCorpus = serde_json::from_str(&std::fs::read_to_string(&args.corpus)?)?;

    let config = EngineConfig::from_env();
    info!(
        cases = cases.len(),
        corpus_cases = corpus.cases.len(),
        corpus_version = %corpus.version,
        batch_size = config.batch_size,
        "starting assessment"
    );

    let engine = RiskAssessmentEngine::new(config);
    let outcomes = engine.assess_case_risk_batch(cases, &profile, &corpus).await;

    let failures = outcomes.iter().filter(|o| !o.is_assessed()).count();
    info!(total = outcomes.len(), failures, "assessment finished");

    println!("{}", serde_json::to_string_pretty(&outcomes)?);

    Ok(())
}
