//! Scenario data structures and the scenario-file loader

mod data;
pub mod loader;

pub use data::{Career, Investment, Lifestyle, Location, Scenario};
pub use loader::{load_scenarios, ScenarioFileError};
