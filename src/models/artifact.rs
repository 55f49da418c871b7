//! Versioned JSON model artifact.
//!
//! Training happens out of process; the pipeline only consumes the persisted
//! artifact. The file carries a logistic model (one coefficient per input
//! feature plus an intercept) and, optionally, the ordered feature names and
//! per-feature importance weights recorded at training time.
//!
//! The artifact is loaded lazily on each invocation, read-only, and never
//! cached across calls: concurrent invocations each hold their own copy.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an artifact could not be loaded or used.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("artifact not found")]
    NotFound,
    #[error("failed to read artifact: {0}")]
    Io(String),
    #[error("failed to parse artifact: {0}")]
    Parse(String),
    #[error("feature vector has {got} values, model expects {expected}")]
    FeatureMismatch { expected: usize, got: usize },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Schema version of the artifact file.
    pub version: u32,
    /// Logistic-regression coefficients, one per input feature.
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    /// Ordered feature names recorded at training time.
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    /// Per-feature contribution weights, aligned with `feature_names`.
    #[serde(default)]
    pub feature_importances: Option<Vec<f64>>,
}

impl ModelArtifact {
    /// Load an artifact from disk.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::NotFound);
        }
        let raw = std::fs::read_to_string(path).map_err(|e| ModelError::Io(e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| ModelError::Parse(e.to_string()))
    }

    /// Probability of the positive (habitable) class for one feature vector.
    pub fn predict_proba(&self, features: &[f64]) -> Result<f64, ModelError> {
        if features.len() != self.coefficients.len() {
            return Err(ModelError::FeatureMismatch {
                expected: self.coefficients.len(),
                got: features.len(),
            });
        }
        let z = self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(c, x)| c * x)
                .sum::<f64>();
        Ok(sigmoid(z))
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
