//! Surface-type classification.
//!
//! A deterministic decision list evaluated top to bottom, first match wins.
//! Boundary values use strict inequalities and fall through to the next
//! rule. The list is kept as an explicit ordered table so the boundary
//! semantics stay auditable.

use crate::domain::{CleanRow, PlanetType};

/// One predicate of the decision list.
#[derive(Debug, Clone, Copy)]
enum Rule {
    RadiusAbove(f64),
    TemperatureAbove(f64),
    TemperatureBelow(f64),
}

impl Rule {
    fn matches(self, radius: f64, stellar_temperature: f64) -> bool {
        match self {
            Rule::RadiusAbove(limit) => radius > limit,
            Rule::TemperatureAbove(limit) => stellar_temperature > limit,
            Rule::TemperatureBelow(limit) => stellar_temperature < limit,
        }
    }
}

/// Ordered decision list; `Rocky` is the default when nothing matches.
const RULES: [(Rule, PlanetType); 4] = [
    (Rule::RadiusAbove(10.0), PlanetType::GasGiant),
    (Rule::RadiusAbove(2.0), PlanetType::Neptunian),
    (Rule::TemperatureAbove(5000.0), PlanetType::Lava),
    (Rule::TemperatureBelow(3000.0), PlanetType::Ice),
];

/// Classify a planet from radius and stellar temperature alone.
///
/// Pure function: no randomness, no model dependency.
pub fn classify(row: &CleanRow) -> PlanetType {
    classify_values(row.radius, row.stellar_temperature)
}

pub fn classify_values(radius: f64, stellar_temperature: f64) -> PlanetType {
    for (rule, label) in RULES {
        if rule.matches(radius, stellar_temperature) {
            return label;
        }
    }
    PlanetType::Rocky
}
