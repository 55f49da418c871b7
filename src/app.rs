//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - initializes logging
//! - runs the fetch pipeline or the importance lookup
//! - prints reports and writes optional exports
//! - starts the HTTP service for `exo serve`

use std::time::Duration;

use clap::Parser;

use crate::cli::{Cli, Command, FetchArgs, ModelArgs};
use crate::domain::PipelineConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `exo` binary.
pub fn run() -> Result<(), AppError> {
    // Load .env before clap so env-backed arguments can see it.
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Fetch(args) => handle_fetch(args),
        Command::Importance(args) => handle_importance(args),
        Command::Serve(args) => crate::serve::run(args),
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("exo_screen=info,warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn handle_fetch(args: FetchArgs) -> Result<(), AppError> {
    let config = pipeline_config_from_args(&args);
    let run = pipeline::run_fetch(&config)?;

    println!("{}", crate::report::format::format_run_summary(&run, &config));
    println!("{}", crate::report::format::format_records(&run.records));

    if let Some(path) = &args.export {
        crate::io::export::write_records_json(path, &run.records)?;
        println!("Exported {} records to {}", run.records.len(), path.display());
    }

    Ok(())
}

fn handle_importance(args: ModelArgs) -> Result<(), AppError> {
    let list = crate::report::rank_importances(&args.model)?;
    println!("{}", crate::report::format::format_importances(&list));
    Ok(())
}

pub fn pipeline_config_from_args(args: &FetchArgs) -> PipelineConfig {
    PipelineConfig {
        catalog_url: args.catalog_url.clone(),
        request_timeout: Duration::from_secs(args.timeout_secs),
        limit: args.limit,
        overfetch_ratio: args.overfetch_ratio,
        model_path: args.model.model.clone(),
    }
}
