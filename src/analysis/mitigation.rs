//! Mitigation strategy catalog and selection
//!
//! Maps identified risk-factor labels to a fixed strategy catalog. The
//! mapping is many-to-many: one factor can add several strategies, and
//! duplicate ids across matches collapse to the first match. An empty
//! match set yields exactly one generic fallback.

use crate::analysis::factors::{
    LOW_FINANCIAL_STABILITY, LOW_RISK_TOLERANCE, LOW_SUCCESS_RATE, TRENDING_FACTORS_PREFIX,
};
use crate::model::{MitigationStrategy, StrategyPriority};

const COMMUNICATION_PLAN: MitigationStrategy = MitigationStrategy {
    id: "communication_plan",
    title: "Tailored communication plan",
    description: "Regular updates and transparent communication about progress \
        and challenges to manage the client's expectations.",
    priority: StrategyPriority::High,
};

const COST_MANAGEMENT: MitigationStrategy = MitigationStrategy {
    id: "cost_management",
    title: "Cost management",
    description: "Cost-efficient approach with clear budget limits and regular \
        cost reviews.",
    priority: StrategyPriority::High,
};

const LEGAL_RESEARCH: MitigationStrategy = MitigationStrategy {
    id: "legal_research",
    title: "Extended research",
    description: "In-depth research of current case law and newly emerging \
        trends connected to the identified risk factors.",
    priority: StrategyPriority::Medium,
};

const ALTERNATIVE_APPROACHES: MitigationStrategy = MitigationStrategy {
    id: "alternative_approaches",
    title: "Evaluate alternative approaches",
    description: "Review of out-of-court resolutions and alternative \
        strategies to reduce risk.",
    priority: StrategyPriority::High,
};

const SPECIALIST_CONSULTATION: MitigationStrategy = MitigationStrategy {
    id: "specialist_consultation",
    title: "Consult subject-matter specialists",
    description: "Involve specialists for complex aspects of the case to \
        strengthen the strategy.",
    priority: StrategyPriority::Medium,
};

const STANDARD_PRECAUTIONS: MitigationStrategy = MitigationStrategy {
    id: "standard_precautions",
    title: "Standard precautions",
    description: "Document every step, review the strategy regularly, and \
        identify problems early.",
    priority: StrategyPriority::Medium,
};

/// The full, versioned strategy catalog
pub fn catalog() -> &'static [MitigationStrategy] {
    const CATALOG: [MitigationStrategy; 6] = [
        COMMUNICATION_PLAN,
        COST_MANAGEMENT,
        LEGAL_RESEARCH,
        ALTERNATIVE_APPROACHES,
        SPECIALIST_CONSULTATION,
        STANDARD_PRECAUTIONS,
    ];
    &CATALOG
}

/// Select mitigation strategies for the identified risk factors
pub fn generate_mitigation_strategies(risk_factors: &[String]) -> Vec<MitigationStrategy> {
    let mut strategies: Vec<MitigationStrategy> = Vec::new();

    if risk_factors.iter().any(|f| f == LOW_RISK_TOLERANCE) {
        push_unique(&mut strategies, COMMUNICATION_PLAN);
    }

    if risk_factors.iter().any(|f| f == LOW_FINANCIAL_STABILITY) {
        push_unique(&mut strategies, COST_MANAGEMENT);
    }

    // The trending label carries a joined factor list, match by prefix
    if risk_factors.iter().any(|f| f.contains(TRENDING_FACTORS_PREFIX)) {
        push_unique(&mut strategies, LEGAL_RESEARCH);
    }

    if risk_factors.iter().any(|f| f == LOW_SUCCESS_RATE) {
        push_unique(&mut strategies, ALTERNATIVE_APPROACHES);
        push_unique(&mut strategies, SPECIALIST_CONSULTATION);
    }

    if strategies.is_empty() {
        strategies.push(STANDARD_PRECAUTIONS);
    }

    strategies
}

fn push_unique(strategies: &mut Vec<MitigationStrategy>, strategy: MitigationStrategy) {
    if !strategies.iter().any(|s| s.id == strategy.id) {
        strategies.push(strategy);
    }
}
