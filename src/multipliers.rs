//! Constant multiplier tables mapping categorical choices to numeric factors
//!
//! These tables are the sole coupling between the choice enums and the
//! numeric model. They are built once and never mutated; lookup is total
//! and falls back to the default variant's record on a missing entry.

use std::collections::HashMap;

use crate::scenario::{Career, Lifestyle, Location};

/// Income/stress/happiness factors for one career track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CareerFactors {
    /// Scales base income
    pub income: f64,
    /// Drives health decay and the stress-based risk flag
    pub stress: f64,
    /// Contributes to the happiness sample
    pub happiness: f64,
}

/// Cost/opportunity factors for one location
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationFactors {
    /// Scales living cost
    pub cost: f64,
    /// Relative career opportunity (reserved for presentation-side scoring)
    pub opportunity: f64,
}

/// Cost/happiness factors for one lifestyle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LifestyleFactors {
    /// Scales living cost
    pub cost: f64,
    /// Contributes to the happiness sample
    pub happiness: f64,
}

/// Fallback records, matching the default variant of each axis
const DEFAULT_CAREER: CareerFactors = CareerFactors {
    income: 1.0,
    stress: 1.0,
    happiness: 0.9,
};
const DEFAULT_LOCATION: LocationFactors = LocationFactors {
    cost: 1.5,
    opportunity: 1.3,
};
const DEFAULT_LIFESTYLE: LifestyleFactors = LifestyleFactors {
    cost: 1.0,
    happiness: 1.0,
};

/// Container for all choice-to-factor tables
#[derive(Debug, Clone)]
pub struct MultiplierTables {
    career: HashMap<Career, CareerFactors>,
    location: HashMap<Location, LocationFactors>,
    lifestyle: HashMap<Lifestyle, LifestyleFactors>,
}

impl MultiplierTables {
    /// Build the standard pricing tables
    pub fn standard() -> Self {
        let mut career = HashMap::new();
        career.insert(
            Career::Startup,
            CareerFactors {
                income: 1.2,
                stress: 1.4,
                happiness: 1.3,
            },
        );
        career.insert(Career::LargeCorp, DEFAULT_CAREER);
        career.insert(
            Career::Freelancer,
            CareerFactors {
                income: 0.9,
                stress: 0.8,
                happiness: 1.2,
            },
        );
        career.insert(
            Career::CivilServant,
            CareerFactors {
                income: 0.8,
                stress: 0.6,
                happiness: 1.0,
            },
        );

        let mut location = HashMap::new();
        location.insert(Location::Capital, DEFAULT_LOCATION);
        location.insert(
            Location::Regional,
            LocationFactors {
                cost: 0.7,
                opportunity: 0.8,
            },
        );
        location.insert(
            Location::Overseas,
            LocationFactors {
                cost: 1.2,
                opportunity: 1.5,
            },
        );

        let mut lifestyle = HashMap::new();
        lifestyle.insert(
            Lifestyle::Minimal,
            LifestyleFactors {
                cost: 0.6,
                happiness: 1.1,
            },
        );
        lifestyle.insert(Lifestyle::Balanced, DEFAULT_LIFESTYLE);
        lifestyle.insert(
            Lifestyle::Luxury,
            LifestyleFactors {
                cost: 1.8,
                happiness: 0.9,
            },
        );

        Self {
            career,
            location,
            lifestyle,
        }
    }

    /// Resolve career factors; falls back to the LargeCorp record on a miss
    pub fn career(&self, key: Career) -> CareerFactors {
        self.career.get(&key).copied().unwrap_or(DEFAULT_CAREER)
    }

    /// Resolve location factors; falls back to the Capital record on a miss
    pub fn location(&self, key: Location) -> LocationFactors {
        self.location.get(&key).copied().unwrap_or(DEFAULT_LOCATION)
    }

    /// Resolve lifestyle factors; falls back to the Balanced record on a miss
    pub fn lifestyle(&self, key: Lifestyle) -> LifestyleFactors {
        self.lifestyle
            .get(&key)
            .copied()
            .unwrap_or(DEFAULT_LIFESTYLE)
    }
}

impl Default for MultiplierTables {
    fn default() -> Self {
        Self::standard()
    }
}
