//! Reporting: feature-importance ranking and formatted terminal output.

use std::path::Path;

use crate::domain::{FeatureImportance, FEATURE_NAMES};
use crate::error::AppError;
use crate::models::{ModelArtifact, ModelError};

pub mod format;

/// Friendly display label for a known feature name.
///
/// Unknown features keep their raw name so artifacts trained on extra
/// columns still render.
fn display_name(feature: &str) -> String {
    match feature {
        "radius" => "Planet Radius (R⊕)".to_string(),
        "mass" => "Planet Mass (M⊕)".to_string(),
        "stellar_temperature" => "Star Temperature (K)".to_string(),
        "system_distance" => "System Distance (pc)".to_string(),
        other => other.to_string(),
    }
}

/// Rank the trained model's per-feature contributions, descending.
///
/// Unlike the scorer there is no sensible fallback here: a missing or
/// unusable artifact is a typed error for the caller to present.
pub fn rank_importances(model_path: &Path) -> Result<Vec<FeatureImportance>, AppError> {
    let artifact = match ModelArtifact::load(model_path) {
        Ok(artifact) => artifact,
        Err(ModelError::NotFound) => return Err(AppError::ModelNotFound(model_path.to_path_buf())),
        Err(err) => return Err(AppError::ModelInvalid(err.to_string())),
    };

    let Some(importances) = artifact.feature_importances else {
        return Err(AppError::UnsupportedModel);
    };

    let names: Vec<String> = match artifact.feature_names {
        Some(names) => names,
        None => FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
    };

    let mut out: Vec<FeatureImportance> = names
        .into_iter()
        .zip(importances)
        .map(|(feature, importance)| FeatureImportance {
            display_name: display_name(&feature),
            feature,
            importance,
            percentage: importance * 100.0,
        })
        .collect();

    // Stable sort: ties keep training order.
    out.sort_by(|a, b| {
        b.importance
            .partial_cmp(&a.importance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(out)
}
