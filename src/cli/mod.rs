//! Command-line parsing for the exoplanet habitability screener.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the pipeline code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::data::catalog::DEFAULT_TAP_URL;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "exo",
    version,
    about = "Exoplanet habitability screener (NASA Exoplanet Archive)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch catalog rows, sanitize, score, classify, and print the results.
    Fetch(FetchArgs),
    /// Print the trained model's ranked feature importances.
    Importance(ModelArgs),
    /// Serve the pipeline over HTTP (records + feature importance).
    Serve(ServeArgs),
}

/// Options shared by every command that touches the model artifact.
#[derive(Debug, Parser, Clone)]
pub struct ModelArgs {
    /// Path to the trained model artifact (JSON).
    #[arg(long, env = "EXO_MODEL_PATH", default_value = "habitability_model.json")]
    pub model: PathBuf,
}

/// Common options for fetching and serving.
#[derive(Debug, Parser, Clone)]
pub struct FetchArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Maximum number of enriched records to return.
    #[arg(short = 'n', long, default_value_t = 100)]
    pub limit: usize,

    /// Over-fetch multiplier applied to the catalog row cap.
    ///
    /// Most catalog rows lack a measured mass, so the query requests
    /// `limit * ratio` rows to still end up with `limit` complete records.
    #[arg(long, default_value_t = 50)]
    pub overfetch_ratio: usize,

    /// Catalog TAP sync endpoint.
    #[arg(long, env = "EXO_CATALOG_URL", default_value = DEFAULT_TAP_URL)]
    pub catalog_url: String,

    /// Request timeout (seconds) for the catalog query.
    #[arg(long, default_value_t = 15)]
    pub timeout_secs: u64,

    /// Export enriched records to a JSON file.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Options for the HTTP service.
#[derive(Debug, Parser, Clone)]
pub struct ServeArgs {
    #[command(flatten)]
    pub fetch: FetchArgs,

    /// Port to listen on.
    #[arg(short, long, env = "EXO_PORT", default_value_t = 8000)]
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_defaults_match_catalog_conventions() {
        let cli = Cli::parse_from(["exo", "fetch"]);
        let Command::Fetch(args) = cli.command else {
            panic!("expected fetch command");
        };
        assert_eq!(args.limit, 100);
        assert_eq!(args.overfetch_ratio, 50);
        assert_eq!(args.timeout_secs, 15);
        assert_eq!(args.catalog_url, DEFAULT_TAP_URL);
    }

    #[test]
    fn serve_accepts_port_and_limit() {
        let cli = Cli::parse_from(["exo", "serve", "--port", "9000", "-n", "25"]);
        let Command::Serve(args) = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(args.port, 9000);
        assert_eq!(args.fetch.limit, 25);
    }
}
