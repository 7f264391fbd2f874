//! Scenario record and the four categorical choice axes

use serde::{Deserialize, Serialize};

/// Career track chosen for a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Career {
    /// Early-stage startup (high income, high stress)
    Startup,
    /// Established large corporation
    LargeCorp,
    /// Independent freelance work
    Freelancer,
    /// Public-sector civil service
    CivilServant,
}

impl Career {
    /// All variants, in table order
    pub const ALL: [Career; 4] = [
        Career::Startup,
        Career::LargeCorp,
        Career::Freelancer,
        Career::CivilServant,
    ];

    /// Parse a free-form label, falling back to the default track
    /// for anything unrecognized
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "startup" => Career::Startup,
            "largecorp" | "large_corp" | "large corp" => Career::LargeCorp,
            "freelancer" => Career::Freelancer,
            "civilservant" | "civil_servant" | "civil servant" => Career::CivilServant,
            _ => Career::default(),
        }
    }
}

impl Default for Career {
    fn default() -> Self {
        Career::LargeCorp
    }
}

/// Where the scenario plays out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Capital metro area (high cost, high opportunity)
    Capital,
    /// Regional city
    Regional,
    /// Abroad
    Overseas,
}

impl Location {
    /// All variants, in table order
    pub const ALL: [Location; 3] = [Location::Capital, Location::Regional, Location::Overseas];

    /// Parse a free-form label, falling back to the default location
    /// for anything unrecognized
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "capital" => Location::Capital,
            "regional" => Location::Regional,
            "overseas" => Location::Overseas,
            _ => Location::default(),
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::Capital
    }
}

/// Spending posture of the scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lifestyle {
    /// Deliberately frugal
    Minimal,
    /// Middle-of-the-road spending
    Balanced,
    /// High-end consumption
    Luxury,
}

impl Lifestyle {
    /// All variants, in table order
    pub const ALL: [Lifestyle; 3] = [Lifestyle::Minimal, Lifestyle::Balanced, Lifestyle::Luxury];

    /// Parse a free-form label, falling back to the default lifestyle
    /// for anything unrecognized
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "minimal" => Lifestyle::Minimal,
            "balanced" => Lifestyle::Balanced,
            "luxury" => Lifestyle::Luxury,
            _ => Lifestyle::default(),
        }
    }
}

impl Default for Lifestyle {
    fn default() -> Self {
        Lifestyle::Balanced
    }
}

/// Investment posture for the running asset balance
///
/// Conservative is deliberately the same tier unrecognized labels land in:
/// it carries the base 2% return and acts as the floor of the ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Investment {
    /// Capital preservation, 2% annual return
    Conservative,
    /// Balanced portfolio, 5% annual return
    Moderate,
    /// Equity-heavy portfolio, 8% annual return
    Aggressive,
}

impl Investment {
    /// All variants, in ascending return order
    pub const ALL: [Investment; 3] = [
        Investment::Conservative,
        Investment::Moderate,
        Investment::Aggressive,
    ];

    /// Parse a free-form label; unrecognized labels land on the
    /// lowest-return tier
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "conservative" => Investment::Conservative,
            "moderate" => Investment::Moderate,
            "aggressive" => Investment::Aggressive,
            _ => Investment::default(),
        }
    }

    /// Annual growth factor applied to the asset balance every
    /// projected year, year 0 included
    pub fn return_factor(&self) -> f64 {
        match self {
            Investment::Aggressive => 1.08,
            Investment::Moderate => 1.05,
            Investment::Conservative => 1.02,
        }
    }
}

impl Default for Investment {
    fn default() -> Self {
        Investment::Conservative
    }
}

/// One user-defined life scenario, immutable once submitted
///
/// The engine never validates `name`; the caller (form layer or the
/// scenario-file loader) is responsible for rejecting empty names before
/// projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Display label for charts and comparison cards
    pub name: String,

    /// Career track
    pub career: Career,

    /// Home base
    pub location: Location,

    /// Spending posture
    pub lifestyle: Lifestyle,

    /// Investment posture
    pub investment: Investment,
}

impl Scenario {
    /// Create a scenario from resolved choice values
    pub fn new(
        name: impl Into<String>,
        career: Career,
        location: Location,
        lifestyle: Lifestyle,
        investment: Investment,
    ) -> Self {
        Self {
            name: name.into(),
            career,
            location,
            lifestyle,
            investment,
        }
    }

    /// Build a scenario from raw string labels, applying the per-axis
    /// fallbacks for anything unrecognized
    pub fn from_labels(
        name: impl Into<String>,
        career: &str,
        location: &str,
        lifestyle: &str,
        investment: &str,
    ) -> Self {
        Self {
            name: name.into(),
            career: Career::from_label(career),
            location: Location::from_label(location),
            lifestyle: Lifestyle::from_label(lifestyle),
            investment: Investment::from_label(investment),
        }
    }
}
