//! Export enriched records to JSON.
//!
//! The export is the "portable" representation of a run: tool name,
//! generation timestamp, and the full record list. It is meant to be easy to
//! consume from notebooks or a frontend without re-running the fetch.

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::PlanetRecord;
use crate::error::AppError;

/// Schema of the exported JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub count: usize,
    pub records: Vec<PlanetRecord>,
}

/// Write enriched records to a JSON file.
pub fn write_records_json(path: &Path, records: &[PlanetRecord]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::Export(format!("failed to create '{}': {e}", path.display())))?;

    let result = ResultFile {
        tool: "exo".to_string(),
        generated_at: Utc::now(),
        count: records.len(),
        records: records.to_vec(),
    };

    serde_json::to_writer_pretty(file, &result)
        .map_err(|e| AppError::Export(format!("failed to write records JSON: {e}")))?;

    Ok(())
}
