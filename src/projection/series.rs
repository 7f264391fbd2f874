//! Output structures for scenario projections

use serde::{Deserialize, Serialize};

use crate::risk::Risk;
use crate::scenario::Scenario;

/// One sample in a yearly time series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearPoint {
    /// Calendar year label
    pub year: i32,
    /// Rounded sample value
    pub value: i64,
}

/// Complete projection output for one scenario
///
/// Owned exclusively by the caller; the engine holds no reference after
/// returning it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// The scenario that produced this result
    pub scenario: Scenario,

    /// Running asset balance per year
    pub assets: Vec<YearPoint>,

    /// Health score per year, clamped to [20, 100]
    pub health: Vec<YearPoint>,

    /// Happiness score per year (jittered), capped at 100
    pub happiness: Vec<YearPoint>,

    /// Last element of the assets series
    pub final_assets: i64,

    /// Last element of the health series
    pub final_health: i64,

    /// Last element of the happiness series
    pub final_happiness: i64,

    /// Qualitative risk flags, in evaluation order; empty means
    /// "no flagged risks", not an error
    pub risks: Vec<Risk>,
}

impl ScenarioResult {
    /// Number of yearly samples (horizon + 1)
    pub fn years(&self) -> usize {
        self.assets.len()
    }

    /// Highest flagged risk level, if any risks were flagged
    pub fn max_risk_level(&self) -> Option<crate::risk::RiskLevel> {
        self.risks.iter().map(|r| r.level).max()
    }
}
