//! Trained model artifact: loading and prediction.

pub mod artifact;

pub use artifact::{ModelArtifact, ModelError};
