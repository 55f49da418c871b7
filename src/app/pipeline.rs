//! Shared pipeline logic used by both the CLI and the HTTP service.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! catalog fetch -> sanitize -> score -> classify -> truncate
//!
//! The CLI and the server then focus on presentation (tables vs envelopes).

use crate::data::CatalogClient;
use crate::domain::{PipelineConfig, PlanetRecord, RawPlanetRow};
use crate::error::AppError;
use crate::{classify, clean, score};

/// All computed outputs of a single fetch run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub records: Vec<PlanetRecord>,
    /// Raw rows returned by the catalog before sanitization.
    pub rows_fetched: usize,
    /// Rows surviving sanitization, before the limit is applied.
    pub rows_clean: usize,
}

/// Execute the full fetch -> sanitize -> score -> classify pipeline.
pub fn run_fetch(config: &PipelineConfig) -> Result<RunOutput, AppError> {
    let client = CatalogClient::new(&config.catalog_url, config.request_timeout)?;
    let raw = client.fetch(config.fetch_cap())?;
    Ok(run_with_rows(config, raw))
}

/// Execute the pipeline over pre-fetched rows.
///
/// This is the seam used by tests: everything past the network boundary is
/// deterministic.
pub fn run_with_rows(config: &PipelineConfig, raw: Vec<RawPlanetRow>) -> RunOutput {
    let rows_fetched = raw.len();

    let rows = clean::sanitize(raw);
    let rows_clean = rows.len();

    let scores = score::score_table(&rows, &config.model_path);

    let mut records: Vec<PlanetRecord> = rows
        .into_iter()
        .zip(scores)
        .map(|(row, habitability_score)| PlanetRecord {
            planet_type: classify::classify(&row),
            name: row.name,
            radius: row.radius,
            mass: row.mass,
            stellar_temperature: row.stellar_temperature,
            system_distance: row.system_distance,
            habitability_score,
        })
        .collect();

    records.truncate(config.limit);

    RunOutput {
        records,
        rows_fetched,
        rows_clean,
    }
}
