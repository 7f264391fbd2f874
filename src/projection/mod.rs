//! Yearly projection of assets, health, and happiness for one scenario

mod engine;
mod series;

pub use engine::{ProjectionConfig, ProjectionEngine};
pub use series::{ScenarioResult, YearPoint};
