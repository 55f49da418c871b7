//! Remote catalog access.

pub mod catalog;

pub use catalog::CatalogClient;
