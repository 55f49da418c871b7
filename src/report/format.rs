//! Formatted terminal output.
//!
//! Formatting lives in one place so:
//! - the pipeline code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::app::pipeline::RunOutput;
use crate::domain::{FeatureImportance, PipelineConfig, PlanetRecord};

/// Format the run summary (fetch/sanitize counts + configuration).
pub fn format_run_summary(run: &RunOutput, config: &PipelineConfig) -> String {
    let mut out = String::new();

    out.push_str("=== exo - Exoplanet Habitability Screener ===\n");
    out.push_str(&format!("Catalog: {}\n", config.catalog_url));
    out.push_str(&format!(
        "Rows: fetched={} | sanitized={} | returned={} (limit {})\n",
        run.rows_fetched,
        run.rows_clean,
        run.records.len(),
        config.limit,
    ));

    out
}

/// Format the enriched records as a fixed-width table.
pub fn format_records(records: &[PlanetRecord]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<28} {:>8} {:>10} {:>9} {:>9} {:>7} {:<10}\n",
        "name", "radius", "mass", "teff_k", "dist_pc", "score", "type"
    ));
    out.push_str(&format!(
        "{:-<28} {:-<8} {:-<10} {:-<9} {:-<9} {:-<7} {:-<10}\n",
        "", "", "", "", "", "", ""
    ));

    for r in records {
        out.push_str(&format!(
            "{:<28} {:>8.2} {:>10.2} {:>9.0} {:>9.2} {:>7.3} {:<10}\n",
            r.name,
            r.radius,
            r.mass,
            r.stellar_temperature,
            r.system_distance,
            r.habitability_score,
            r.planet_type.display_name(),
        ));
    }

    out
}

/// Format the ranked feature importances.
pub fn format_importances(list: &[FeatureImportance]) -> String {
    let mut out = String::new();

    out.push_str("Feature importance (descending):\n");
    out.push_str(&format!(
        "{:<24} {:<24} {:>12} {:>8}\n",
        "feature", "display", "importance", "pct"
    ));
    out.push_str(&format!("{:-<24} {:-<24} {:-<12} {:-<8}\n", "", "", "", ""));

    for item in list {
        out.push_str(&format!(
            "{:<24} {:<24} {:>12.4} {:>7.1}%\n",
            item.feature, item.display_name, item.importance, item.percentage,
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlanetType;

    #[test]
    fn records_table_contains_every_row() {
        let records = vec![PlanetRecord {
            name: "Kepler-22b".to_string(),
            radius: 2.4,
            mass: 9.1,
            stellar_temperature: 5518.0,
            system_distance: 190.0,
            habitability_score: 0.41,
            planet_type: PlanetType::Neptunian,
        }];
        let table = format_records(&records);
        assert!(table.contains("Kepler-22b"));
        assert!(table.contains("neptunian"));
    }

    #[test]
    fn importance_table_shows_percentages() {
        let list = vec![FeatureImportance {
            feature: "mass".to_string(),
            display_name: "Planet Mass (M⊕)".to_string(),
            importance: 0.5,
            percentage: 50.0,
        }];
        let table = format_importances(&list);
        assert!(table.contains("50.0%"));
    }
}
