//! Record sanitization: imputation, critical-field filtering, deduplication.
//!
//! The policy runs in this exact order (later steps assume earlier ones ran):
//!
//! 1. fill missing `stellar_temperature` values with the column mean and
//!    missing `system_distance` values with the column median, both computed
//!    once over the pre-fill columns
//! 2. drop any row missing a critical field (`name`, `radius`, `mass`)
//! 3. deduplicate by `name`, keeping the first occurrence in table order

use std::collections::HashSet;

use crate::domain::{CleanRow, RawPlanetRow};

/// Sanitize raw catalog rows into scoring-ready rows.
///
/// An empty input yields an empty output, never an error. A row whose
/// imputable field is missing *and* whose column has no present values to
/// impute from is dropped, so every surviving row is fully populated.
pub fn sanitize(rows: Vec<RawPlanetRow>) -> Vec<CleanRow> {
    let teff_fill = mean(rows.iter().filter_map(|r| r.stellar_temperature));
    let dist_fill = median(rows.iter().filter_map(|r| r.system_distance).collect());

    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(rows.len());

    for row in rows {
        // Critical fields cannot be imputed: they drive both scoring and
        // classification.
        let (Some(name), Some(radius), Some(mass)) = (row.name, row.radius, row.mass) else {
            continue;
        };
        let Some(stellar_temperature) = row.stellar_temperature.or(teff_fill) else {
            continue;
        };
        let Some(system_distance) = row.system_distance.or(dist_fill) else {
            continue;
        };
        if !seen.insert(name.clone()) {
            continue;
        }
        out.push(CleanRow {
            name,
            radius,
            mass,
            stellar_temperature,
            system_distance,
        });
    }

    out
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut n = 0usize;
    for v in values {
        sum += v;
        n += 1;
    }
    if n == 0 {
        None
    } else {
        Some(sum / n as f64)
    }
}

/// Median of the present values; the midpoint average for even counts.
fn median(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Some(values[mid])
    } else {
        Some((values[mid - 1] + values[mid]) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(
        name: Option<&str>,
        radius: Option<f64>,
        mass: Option<f64>,
        teff: Option<f64>,
        dist: Option<f64>,
    ) -> RawPlanetRow {
        RawPlanetRow {
            name: name.map(str::to_string),
            radius,
            mass,
            stellar_temperature: teff,
            system_distance: dist,
        }
    }

    #[test]
    fn imputes_temperature_with_mean_of_present_values() {
        let rows = vec![
            raw(Some("a"), Some(1.0), Some(1.0), Some(4000.0), Some(1.0)),
            raw(Some("b"), Some(1.0), Some(1.0), None, Some(1.0)),
            raw(Some("c"), Some(1.0), Some(1.0), Some(6000.0), Some(1.0)),
        ];
        let clean = sanitize(rows);
        assert_eq!(clean.len(), 3);
        assert_eq!(clean[1].stellar_temperature, 5000.0);
    }

    #[test]
    fn imputes_distance_with_median_of_present_values() {
        let rows = vec![
            raw(Some("a"), Some(1.0), Some(1.0), Some(5000.0), Some(10.0)),
            raw(Some("b"), Some(1.0), Some(1.0), Some(5000.0), Some(200.0)),
            raw(Some("c"), Some(1.0), Some(1.0), Some(5000.0), Some(30.0)),
            raw(Some("d"), Some(1.0), Some(1.0), Some(5000.0), None),
        ];
        let clean = sanitize(rows);
        // Median of [10, 30, 200] is 30, unmoved by the 200 outlier.
        assert_eq!(clean[3].system_distance, 30.0);
    }

    #[test]
    fn drops_rows_missing_critical_fields() {
        let rows = vec![
            raw(Some("a"), None, Some(2.0), Some(5000.0), Some(1.0)),
            raw(Some("b"), Some(3.0), Some(2.0), Some(5000.0), Some(1.0)),
            raw(None, Some(3.0), Some(2.0), Some(5000.0), Some(1.0)),
        ];
        let clean = sanitize(rows);
        assert_eq!(clean.len(), 1);
        assert_eq!(clean[0].radius, 3.0);
        assert_eq!(clean[0].mass, 2.0);
    }

    #[test]
    fn deduplicates_by_name_keeping_first_occurrence() {
        let rows = vec![
            raw(Some("Kepler-1b"), Some(1.0), Some(1.0), Some(5000.0), Some(1.0)),
            raw(Some("Kepler-1b"), Some(9.0), Some(9.0), Some(5000.0), Some(1.0)),
        ];
        let clean = sanitize(rows);
        assert_eq!(clean.len(), 1);
        assert_eq!(clean[0].radius, 1.0, "first occurrence wins");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(sanitize(Vec::new()).is_empty());
    }

    #[test]
    fn drops_rows_when_imputable_column_is_entirely_missing() {
        // No present value to impute from: the row cannot be completed.
        let rows = vec![raw(Some("a"), Some(1.0), Some(1.0), None, Some(1.0))];
        assert!(sanitize(rows).is_empty());
    }

    #[test]
    fn names_are_unique_after_sanitization() {
        let rows = vec![
            raw(Some("a"), Some(1.0), Some(1.0), Some(5000.0), Some(1.0)),
            raw(Some("b"), Some(2.0), Some(2.0), Some(5000.0), Some(2.0)),
            raw(Some("a"), Some(3.0), Some(3.0), Some(5000.0), Some(3.0)),
        ];
        let clean = sanitize(rows);
        let mut names: Vec<&str> = clean.iter().map(|r| r.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), clean.len());
    }

    #[test]
    fn median_averages_middle_pair_for_even_counts() {
        assert_eq!(median(vec![1.0, 3.0]), Some(2.0));
        assert_eq!(median(vec![4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(Vec::new()), None);
    }
}
