//! Error taxonomy for the pipeline and its front-ends.
//!
//! Each variant maps to a stable process exit code so scripted callers can
//! distinguish "catalog down" from "model missing" without parsing stderr.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// Remote catalog fetch failed, timed out, or returned a non-success
    /// status. The pipeline aborts for that call; no partial data.
    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// No model artifact exists at the configured path.
    ///
    /// Only the importance reporter surfaces this; the scorer treats an
    /// absent artifact as a silent route to the analytic fallback.
    #[error("model artifact not found at '{}'", .0.display())]
    ModelNotFound(PathBuf),

    /// The artifact exists but could not be read or parsed.
    #[error("invalid model artifact: {0}")]
    ModelInvalid(String),

    /// The artifact loaded but carries no per-feature importances.
    #[error("model does not support feature importance")]
    UnsupportedModel,

    #[error("export failed: {0}")]
    Export(String),

    #[error("server error: {0}")]
    Server(String),
}

impl AppError {
    /// Process exit code for the `exo` binary.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::CatalogUnavailable(_) => 4,
            AppError::ModelNotFound(_) | AppError::ModelInvalid(_) | AppError::UnsupportedModel => 3,
            AppError::Export(_) => 2,
            AppError::Server(_) => 5,
        }
    }
}
