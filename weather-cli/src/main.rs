//! Binary crate for the `weather-archiver` batch job.
//!
//! This crate focuses on:
//! - Loading `.env` and installing logging
//! - Parsing the (flag-less) command line
//! - Wiring configuration into the core orchestrator

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cmd = cli::Cli::parse();
    exit_code(cmd.run().await)
}

/// Per-city failures still exit 0; only an error that ends the run fails it.
fn exit_code(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("Error in main: {err:#}");
            ExitCode::FAILURE
        }
    }
}
