use clap::Parser;
use weather_core::{
    Config, DEFAULT_CITIES, WeatherArchiver, provider_from_config, store_from_config,
};

/// Top-level CLI struct. The city list is compiled in, so there is nothing
/// to configure beyond `--help` and `--version`.
#[derive(Debug, Parser)]
#[command(
    name = "weather-archiver",
    version,
    about = "Fetch current weather for a fixed set of cities and archive it to blob storage"
)]
pub struct Cli {}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::from_env();
        config.log_resolved();

        let archiver = WeatherArchiver::new(
            provider_from_config(&config),
            store_from_config(&config),
            config.container_name.clone(),
        );

        archiver.run(&DEFAULT_CITIES).await?;
        Ok(())
    }
}
