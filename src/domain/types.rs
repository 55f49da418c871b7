//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they
//! can be:
//!
//! - used in-memory while scoring and classifying
//! - returned as JSON by the HTTP service
//! - exported to a results file for later inspection

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Canonical feature order used by the scorer and the importance reporter.
///
/// Model artifacts that carry their own `feature_names` override this for
/// the importance report, but prediction always consumes features in this
/// order.
pub const FEATURE_NAMES: [&str; 4] = ["radius", "mass", "stellar_temperature", "system_distance"];

/// Coarse surface/composition label derived from physical attributes only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanetType {
    GasGiant,
    Neptunian,
    Lava,
    Ice,
    Rocky,
}

impl PlanetType {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            PlanetType::GasGiant => "gas giant",
            PlanetType::Neptunian => "neptunian",
            PlanetType::Lava => "lava",
            PlanetType::Ice => "ice",
            PlanetType::Rocky => "rocky",
        }
    }
}

/// One catalog row as fetched.
///
/// Every field is optional: the archive reports blanks for measurements a
/// survey never took, and most rows are missing at least one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPlanetRow {
    pub name: Option<String>,
    /// Planet radius in Earth radii.
    pub radius: Option<f64>,
    /// Planet mass in Earth masses.
    pub mass: Option<f64>,
    /// Host star effective temperature in Kelvin.
    pub stellar_temperature: Option<f64>,
    /// Distance to the planetary system in parsecs.
    pub system_distance: Option<f64>,
}

/// A sanitized row: all fields present, `name` unique within its table.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanRow {
    pub name: String,
    pub radius: f64,
    pub mass: f64,
    pub stellar_temperature: f64,
    pub system_distance: f64,
}

impl CleanRow {
    /// Feature vector in canonical order (see [`FEATURE_NAMES`]).
    pub fn features(&self) -> [f64; 4] {
        [self.radius, self.mass, self.stellar_temperature, self.system_distance]
    }
}

/// A fully enriched record: sanitized fields plus the derived score and type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetRecord {
    pub name: String,
    pub radius: f64,
    pub mass: f64,
    pub stellar_temperature: f64,
    pub system_distance: f64,
    /// Habitability estimate in [0,1].
    pub habitability_score: f64,
    pub planet_type: PlanetType,
}

/// One ranked entry of the feature-importance report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub display_name: String,
    pub importance: f64,
    /// `importance * 100`, for display.
    pub percentage: f64,
}

/// A full run's configuration as understood by the pipeline.
///
/// Derived from CLI flags plus environment overrides. The model path is an
/// explicit config value rather than a global so tests can inject a fake
/// artifact location.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// TAP sync endpoint of the exoplanet catalog.
    pub catalog_url: String,
    /// Timeout for the single catalog request.
    pub request_timeout: Duration,
    /// Maximum number of enriched records to return.
    pub limit: usize,
    /// Over-fetch multiplier: the catalog query requests
    /// `limit * overfetch_ratio` rows to compensate for rows later dropped
    /// for missing critical fields.
    pub overfetch_ratio: usize,
    /// Location of the trained model artifact (JSON).
    pub model_path: PathBuf,
}

impl PipelineConfig {
    /// Row cap actually sent to the catalog.
    pub fn fetch_cap(&self) -> usize {
        self.limit.saturating_mul(self.overfetch_ratio).max(self.limit)
    }
}
