//! Habitability scoring: model-backed with a deterministic analytic fallback.
//!
//! The strategy is selected once per table, not per row. Tier-1 (model)
//! failures are never surfaced to the caller: the contract here is "always
//! returns a score", so an absent artifact, a load failure, or any predict
//! error routes the whole table to the fallback.

use std::path::Path;

use crate::domain::CleanRow;
use crate::models::{ModelArtifact, ModelError};

/// A single scoring capability: one sanitized row in, one score out.
pub trait ScoringStrategy {
    fn score(&self, row: &CleanRow) -> Result<f64, ModelError>;
}

/// Tier 1: trained classifier artifact.
pub struct ModelBacked {
    artifact: ModelArtifact,
}

impl ModelBacked {
    pub fn new(artifact: ModelArtifact) -> Self {
        Self { artifact }
    }
}

impl ScoringStrategy for ModelBacked {
    fn score(&self, row: &CleanRow) -> Result<f64, ModelError> {
        self.artifact.predict_proba(&row.features())
    }
}

/// Tier 2: Earth-similarity index from radius and mass only.
///
/// Requires no external artifact, so it is always reachable.
pub struct AnalyticFallback;

impl ScoringStrategy for AnalyticFallback {
    fn score(&self, row: &CleanRow) -> Result<f64, ModelError> {
        Ok(earth_similarity(row.radius, row.mass))
    }
}

/// Earth-similarity-style index in [0,1].
///
/// Each factor is 1.0 at the Earth reference value (radius = 1 R⊕,
/// mass = 1 M⊕) and decays toward 0 as the value diverges in either
/// direction; the product combines both dimensions. Negative results are
/// floored at 0 (not reachable for positive physical inputs, but guarded
/// regardless).
pub fn earth_similarity(radius: f64, mass: f64) -> f64 {
    let radius_factor = 1.0 - ((radius - 1.0) / (radius + 1.0)).abs();
    let mass_factor = 1.0 - ((mass - 1.0) / (mass + 1.0)).abs();
    (radius_factor * mass_factor).max(0.0)
}

/// Score every row of a sanitized table.
///
/// A model artifact at `model_path` is preferred; any tier-1 problem falls
/// back to the analytic index for the whole table. An empty table never
/// invokes the model.
pub fn score_table(rows: &[CleanRow], model_path: &Path) -> Vec<f64> {
    if rows.is_empty() {
        return Vec::new();
    }

    match ModelArtifact::load(model_path) {
        Ok(artifact) => {
            let strategy = ModelBacked::new(artifact);
            match score_with(&strategy, rows) {
                Ok(scores) => return scores,
                Err(err) => {
                    tracing::warn!("model prediction failed, using analytic fallback: {err}");
                }
            }
        }
        Err(ModelError::NotFound) => {
            tracing::debug!(
                "no model artifact at '{}', using analytic fallback",
                model_path.display()
            );
        }
        Err(err) => {
            tracing::warn!("failed to load model artifact, using analytic fallback: {err}");
        }
    }

    rows.iter()
        .map(|row| earth_similarity(row.radius, row.mass))
        .collect()
}

fn score_with(strategy: &dyn ScoringStrategy, rows: &[CleanRow]) -> Result<Vec<f64>, ModelError> {
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        out.push(strategy.score(row)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use approx::assert_relative_eq;

    fn row(name: &str, radius: f64, mass: f64) -> CleanRow {
        CleanRow {
            name: name.to_string(),
            radius,
            mass,
            stellar_temperature: 5000.0,
            system_distance: 10.0,
        }
    }

    fn temp_artifact(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("exo-score-{name}-{}.json", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn fallback_is_one_at_earth_reference() {
        assert_relative_eq!(earth_similarity(1.0, 1.0), 1.0);
    }

    #[test]
    fn fallback_decays_away_from_earth_in_both_directions() {
        let at_earth = earth_similarity(1.0, 1.0);
        let larger = earth_similarity(2.0, 1.0);
        let even_larger = earth_similarity(5.0, 1.0);
        let smaller = earth_similarity(0.5, 1.0);
        assert!(larger < at_earth);
        assert!(even_larger < larger);
        assert!(smaller < at_earth);

        let heavier = earth_similarity(1.0, 3.0);
        let even_heavier = earth_similarity(1.0, 10.0);
        assert!(heavier < at_earth);
        assert!(even_heavier < heavier);
    }

    #[test]
    fn fallback_stays_within_unit_interval() {
        for &(r, m) in &[(0.1, 0.1), (1.0, 1.0), (3.0, 300.0), (25.0, 4000.0)] {
            let s = earth_similarity(r, m);
            assert!((0.0..=1.0).contains(&s), "score {s} out of range for r={r}, m={m}");
        }
    }

    #[test]
    fn missing_artifact_routes_to_fallback() {
        let rows = vec![row("earth-twin", 1.0, 1.0)];
        let scores = score_table(&rows, Path::new("/nonexistent/model.json"));
        assert_eq!(scores.len(), 1);
        assert_relative_eq!(scores[0], 1.0);
    }

    #[test]
    fn corrupt_artifact_routes_to_fallback() {
        let path = temp_artifact("corrupt", "{ definitely not a model");
        let rows = vec![row("earth-twin", 1.0, 1.0)];
        let scores = score_table(&rows, &path);
        std::fs::remove_file(&path).ok();
        assert_relative_eq!(scores[0], 1.0);
    }

    #[test]
    fn predict_error_routes_to_fallback() {
        // Two coefficients against a four-feature row: predict fails, and the
        // failure must stay invisible to the caller.
        let path = temp_artifact(
            "mismatch",
            r#"{"version":1,"coefficients":[0.5,0.5],"intercept":0.0}"#,
        );
        let rows = vec![row("earth-twin", 1.0, 1.0)];
        let scores = score_table(&rows, &path);
        std::fs::remove_file(&path).ok();
        assert_relative_eq!(scores[0], 1.0);
    }

    #[test]
    fn valid_artifact_scores_through_the_model() {
        // Zero coefficients and intercept: sigmoid(0) = 0.5 for every row,
        // which the fallback would never produce at the Earth reference.
        let path = temp_artifact(
            "valid",
            r#"{"version":1,"coefficients":[0.0,0.0,0.0,0.0],"intercept":0.0}"#,
        );
        let rows = vec![row("earth-twin", 1.0, 1.0), row("giant", 12.0, 900.0)];
        let scores = score_table(&rows, &path);
        std::fs::remove_file(&path).ok();
        assert_eq!(scores.len(), 2);
        assert_relative_eq!(scores[0], 0.5);
        assert_relative_eq!(scores[1], 0.5);
    }

    #[test]
    fn empty_table_never_invokes_the_model() {
        // A corrupt artifact would log, but an empty table short-circuits
        // before the load.
        let scores = score_table(&[], Path::new("/nonexistent/model.json"));
        assert!(scores.is_empty());
    }
}
