use anyhow::Context;
use clap::Parser;
use tracing::info;
use weather_csv_core::{Config, pipeline};

/// Append current weather for Boston, San Francisco and London to a CSV file.
#[derive(Debug, Parser)]
#[command(name = "weather-csv", version, about = "Append current city weather to a CSV file")]
pub struct Cli {
    /// OpenWeather API key.
    pub api_key: String,

    /// Output file; `.csv` is appended when missing.
    pub output: String,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::new(self.api_key.as_str(), &self.output)
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let config = self.config();
        info!(path = %config.output_path.display(), cities = ?config.cities, "Starting weather run");

        pipeline::run(&config)
            .await
            .with_context(|| format!("Failed to record weather to {}", config.output_path.display()))?;

        Ok(())
    }
}
