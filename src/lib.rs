//! Lifesim - Projection engine for comparing life-path scenarios
//!
//! This library provides:
//! - Ten-year projections of assets, health, and happiness per scenario
//! - Constant multiplier tables mapping career/location/lifestyle choices to factors
//! - Qualitative risk evaluation per scenario
//! - A runner for pairwise scenario comparison

pub mod multipliers;
pub mod projection;
pub mod risk;
pub mod runner;
pub mod scenario;

// Re-export commonly used types
pub use multipliers::MultiplierTables;
pub use projection::{ProjectionConfig, ProjectionEngine, ScenarioResult, YearPoint};
pub use risk::{Risk, RiskLevel, RiskType};
pub use runner::{ComparisonResult, SimulationRunner};
pub use scenario::{Career, Investment, Lifestyle, Location, Scenario};
