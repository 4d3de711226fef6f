//! Binary crate for the `weather-csv` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Installing the log subscriber
//! - Handing off to `weather_csv_core::pipeline`

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
