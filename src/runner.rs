//! Simulation runner for pairwise scenario comparisons
//!
//! Pre-builds tables and config once, then runs any number of projections
//! without re-constructing the engine per call.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::multipliers::MultiplierTables;
use crate::projection::{ProjectionConfig, ProjectionEngine, ScenarioResult};
use crate::scenario::Scenario;

/// Pre-loaded runner for scenario projections
///
/// # Example
/// ```ignore
/// let runner = SimulationRunner::new();
/// let comparison = runner.run_pair(&plan_a, &plan_b, &mut rand::thread_rng());
/// println!("{}", comparison.asset_gap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulationRunner {
    engine: ProjectionEngine,
}

impl SimulationRunner {
    /// Create a runner with the standard tables and default config
    pub fn new() -> Self {
        Self {
            engine: ProjectionEngine::standard(),
        }
    }

    /// Create a runner with a custom projection config
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(MultiplierTables::standard(), config),
        }
    }

    /// Create a runner with pre-built tables and config
    pub fn with_engine(engine: ProjectionEngine) -> Self {
        Self { engine }
    }

    /// Run a single projection with the given RNG
    pub fn run<R: Rng + ?Sized>(&self, scenario: &Scenario, rng: &mut R) -> ScenarioResult {
        self.engine.project(scenario, rng)
    }

    /// Run a single projection with a fixed seed for reproducible output
    pub fn run_seeded(&self, scenario: &Scenario, seed: u64) -> ScenarioResult {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        self.engine.project(scenario, &mut rng)
    }

    /// Project two scenarios side by side, sharing one RNG stream
    pub fn run_pair<R: Rng + ?Sized>(
        &self,
        first: &Scenario,
        second: &Scenario,
        rng: &mut R,
    ) -> ComparisonResult {
        ComparisonResult {
            first: self.engine.project(first, rng),
            second: self.engine.project(second, rng),
        }
    }

    /// Project a batch of scenarios with one shared RNG stream
    pub fn run_batch<R: Rng + ?Sized>(
        &self,
        scenarios: &[Scenario],
        rng: &mut R,
    ) -> Vec<ScenarioResult> {
        scenarios.iter().map(|s| self.engine.project(s, rng)).collect()
    }

    /// Get reference to the underlying engine
    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }
}

/// Two projections rendered side by side by the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub first: ScenarioResult,
    pub second: ScenarioResult,
}

impl ComparisonResult {
    /// Final asset difference, first minus second
    pub fn asset_gap(&self) -> i64 {
        self.first.final_assets - self.second.final_assets
    }

    /// Final health difference, first minus second
    pub fn health_gap(&self) -> i64 {
        self.first.final_health - self.second.final_health
    }

    /// Final happiness difference, first minus second
    pub fn happiness_gap(&self) -> i64 {
        self.first.final_happiness - self.second.final_happiness
    }

    /// Name of the scenario with the higher final asset balance, or None
    /// on an exact tie
    pub fn richer_scenario(&self) -> Option<&str> {
        match self.asset_gap() {
            0 => None,
            gap if gap > 0 => Some(&self.first.scenario.name),
            _ => Some(&self.second.scenario.name),
        }
    }
}
