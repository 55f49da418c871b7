//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - raw catalog rows as fetched (`RawPlanetRow`)
//! - sanitized rows that are safe to score (`CleanRow`)
//! - fully enriched output records (`PlanetRecord`)
//! - run configuration (`PipelineConfig`)

pub mod types;

pub use types::*;
