//! Qualitative risk evaluation for a scenario
//!
//! Risks are derived facts recomputed fresh on every call; the output
//! order is the evaluation order below and is stable across calls.

use serde::{Deserialize, Serialize};

use crate::multipliers::CareerFactors;
use crate::scenario::{Career, Investment, Location, Scenario};

/// Stress level above which a health risk is flagged
const STRESS_RISK_THRESHOLD: f64 = 1.2;

/// Category of a flagged risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskType {
    Health,
    Financial,
    Adaptation,
    Career,
}

/// Severity of a flagged risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// One flagged risk for a scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    #[serde(rename = "type")]
    pub risk_type: RiskType,
    pub level: RiskLevel,
    pub description: String,
}

impl Risk {
    fn new(risk_type: RiskType, level: RiskLevel, description: &str) -> Self {
        Self {
            risk_type,
            level,
            description: description.to_string(),
        }
    }
}

/// Evaluate risk flags for a scenario and its resolved career factors
///
/// An empty vec is a valid outcome meaning no condition tripped; callers
/// should render it as a distinct state, not an error.
pub fn evaluate(scenario: &Scenario, career: &CareerFactors) -> Vec<Risk> {
    let mut risks = Vec::new();

    if career.stress > STRESS_RISK_THRESHOLD {
        risks.push(Risk::new(
            RiskType::Health,
            RiskLevel::High,
            "Elevated chance of health decline under sustained stress",
        ));
    }

    if scenario.investment == Investment::Aggressive {
        risks.push(Risk::new(
            RiskType::Financial,
            RiskLevel::Medium,
            "Asset drawdown risk from market volatility",
        ));
    }

    if scenario.location == Location::Overseas {
        risks.push(Risk::new(
            RiskType::Adaptation,
            RiskLevel::Medium,
            "Cultural adjustment and language barriers",
        ));
    }

    if scenario.career == Career::Startup {
        risks.push(Risk::new(
            RiskType::Career,
            RiskLevel::High,
            "Business failure and income instability",
        ));
    }

    risks
}
