//! NASA Exoplanet Archive TAP integration.
//!
//! We issue a single bounded synchronous query against the `ps` (planetary
//! systems) table and parse the delimited response into raw rows. Everything
//! that can go wrong here (transport failure, timeout, non-success status,
//! malformed body) maps to `AppError::CatalogUnavailable` so callers see one
//! failure kind at this boundary.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::domain::RawPlanetRow;
use crate::error::AppError;

/// Default TAP sync endpoint of the NASA Exoplanet Archive.
pub const DEFAULT_TAP_URL: &str = "https://exoplanetarchive.ipac.caltech.edu/TAP/sync";

/// Columns requested from the `ps` table, in order.
const COLUMNS: &str = "pl_name, pl_rade, pl_bmasse, st_teff, sy_dist";

pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::CatalogUnavailable(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch up to `max_rows` raw catalog rows.
    ///
    /// `max_rows` is the over-fetched cap, not the user-facing limit: the
    /// caller requests far more rows than it will return because most rows
    /// are later dropped for missing critical fields.
    pub fn fetch(&self, max_rows: usize) -> Result<Vec<RawPlanetRow>, AppError> {
        let query = format!("SELECT TOP {max_rows} {COLUMNS} FROM ps");

        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("query", query.as_str()), ("format", "csv")])
            .send()
            .map_err(|e| AppError::CatalogUnavailable(format!("catalog request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::CatalogUnavailable(format!(
                "catalog returned status {}",
                resp.status()
            )));
        }

        let body = resp
            .text()
            .map_err(|e| AppError::CatalogUnavailable(format!("failed to read catalog response: {e}")))?;

        parse_table(&body)
    }
}

/// Parse a TAP CSV body into raw rows.
///
/// Blank fields become `None`. Non-numeric junk in a numeric column is also
/// treated as missing rather than failing the whole fetch; the sanitizer
/// decides what to do with incomplete rows.
pub fn parse_table(body: &str) -> Result<Vec<RawPlanetRow>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| AppError::CatalogUnavailable(format!("malformed catalog response: {e}")))?
        .clone();

    let col = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
    let name_idx = col("pl_name");
    let radius_idx = col("pl_rade");
    let mass_idx = col("pl_bmasse");
    let teff_idx = col("st_teff");
    let dist_idx = col("sy_dist");

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| AppError::CatalogUnavailable(format!("malformed catalog row: {e}")))?;

        let field = |idx: Option<usize>| idx.and_then(|i| record.get(i));

        rows.push(RawPlanetRow {
            name: field(name_idx).and_then(parse_name),
            radius: field(radius_idx).and_then(parse_value),
            mass: field(mass_idx).and_then(parse_value),
            stellar_temperature: field(teff_idx).and_then(parse_value),
            system_distance: field(dist_idx).and_then(parse_value),
        });
    }

    Ok(rows)
}

fn parse_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let v = trimmed.parse::<f64>().ok()?;
    if v.is_finite() {
        Some(v)
    } else {
        None
    }
}
