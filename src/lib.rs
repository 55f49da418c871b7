//! `exo-screen` library crate.
//!
//! The binary (`exo`) is a thin wrapper around this library so that:
//!
//! - the fetch/score pipeline is testable without spawning processes or
//!   touching the network
//! - modules are reusable from both the CLI and the HTTP service
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod classify;
pub mod clean;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod models;
pub mod report;
pub mod score;
pub mod serve;
