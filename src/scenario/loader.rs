//! JSON scenario-file loader
//!
//! The loader is caller-side plumbing: it performs the validation the engine
//! deliberately skips (non-empty names, non-empty file) and funnels raw string
//! labels through the per-axis fallbacks.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::Scenario;

/// Errors raised while reading a scenario file
#[derive(Debug, Error)]
pub enum ScenarioFileError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("scenario file contains no scenarios")]
    Empty,

    #[error("scenario at index {index} has an empty name")]
    EmptyName { index: usize },
}

/// Raw on-disk form: free-form labels, resolved through the enum fallbacks
#[derive(Debug, Deserialize)]
struct RawScenario {
    name: String,
    #[serde(default)]
    career: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    lifestyle: String,
    #[serde(default)]
    investment: String,
}

/// Load scenarios from a JSON array of labeled records
///
/// Unrecognized choice labels fall back per axis (LargeCorp / Capital /
/// Balanced / Conservative). Empty names are rejected here because the
/// engine itself never validates them.
pub fn load_scenarios(path: &Path) -> Result<Vec<Scenario>, ScenarioFileError> {
    let contents = fs::read_to_string(path)?;
    let raw: Vec<RawScenario> = serde_json::from_str(&contents)?;

    if raw.is_empty() {
        return Err(ScenarioFileError::Empty);
    }

    let mut scenarios = Vec::with_capacity(raw.len());
    for (index, r) in raw.into_iter().enumerate() {
        if r.name.trim().is_empty() {
            return Err(ScenarioFileError::EmptyName { index });
        }
        scenarios.push(Scenario::from_labels(
            r.name,
            &r.career,
            &r.location,
            &r.lifestyle,
            &r.investment,
        ));
    }

    log::debug!("loaded {} scenarios from {}", scenarios.len(), path.display());
    Ok(scenarios)
}
