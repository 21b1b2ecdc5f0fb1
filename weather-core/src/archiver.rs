//! Sequential fetch-then-archive loop over a list of cities.

use tracing::{error, info};

use crate::{
    clock::{Clock, SystemClock},
    error::{Error, Result},
    model::{ArchiveReceipt, Observation, WeatherPayload, blob_name},
    provider::WeatherProvider,
    storage::{BlobStore, ContainerStatus},
};

/// Cities archived on every run.
pub const DEFAULT_CITIES: [&str; 3] = ["Philadelphia", "Seattle", "New York"];

/// What happened to one city during a run.
#[derive(Debug, Clone, PartialEq)]
pub enum CityOutcome {
    Archived(ArchiveReceipt),
    FetchFailed,
    SaveFailed,
}

pub struct WeatherArchiver {
    provider: Box<dyn WeatherProvider>,
    store: Box<dyn BlobStore>,
    clock: Box<dyn Clock>,
    container_name: String,
}

impl WeatherArchiver {
    pub fn new(
        provider: Box<dyn WeatherProvider>,
        store: Box<dyn BlobStore>,
        container_name: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            store,
            clock: Box::new(SystemClock),
            container_name: container_name.into(),
        }
    }

    /// Replace the clock used to stamp archived objects.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Create the container if needed, logging the outcome either way.
    pub async fn ensure_container(&self) -> Result<ContainerStatus> {
        match self.store.ensure_container().await {
            Ok(status) => {
                match status {
                    ContainerStatus::Created => {
                        info!("Container {} was created", self.container_name)
                    }
                    ContainerStatus::AlreadyExists => {
                        info!("Container {} already exists", self.container_name)
                    }
                }
                Ok(status)
            }
            Err(err) => {
                error!("Error creating container {}: {}", self.container_name, err.report());
                Err(err)
            }
        }
    }

    pub async fn fetch_weather(&self, city: &str) -> Result<WeatherPayload> {
        self.provider.get_weather(city).await
    }

    /// Upload the observation's payload as `{city}-{timestamp}.json`.
    ///
    /// Without an observation nothing is sent and the call fails.
    pub async fn save_observation(
        &self,
        observation: Option<&Observation>,
        city: &str,
    ) -> Result<ArchiveReceipt> {
        let Some(observation) = observation else {
            return Err(Error::MissingObservation { city: city.to_string() });
        };

        let captured_at = self.clock.now();
        let name = blob_name(city, captured_at);

        match self.store.put_json(&name, observation.payload.to_json_bytes()).await {
            Ok(()) => {
                info!("Successfully saved data for {city} to blob storage");
                Ok(ArchiveReceipt { blob_name: name, captured_at })
            }
            Err(err) => {
                error!("Error saving {name} to blob storage: {}", err.report());
                Err(err)
            }
        }
    }

    /// Archive every city in order, one at a time.
    ///
    /// Fetch and upload failures only affect their own city. A payload that
    /// cannot be read as an observation stops the run; cities archived
    /// before it stay archived.
    pub async fn run(&self, cities: &[&str]) -> Result<Vec<CityOutcome>> {
        // Upload failures that follow are reported per city.
        let _ = self.ensure_container().await;

        let mut outcomes = Vec::with_capacity(cities.len());
        for &city in cities {
            let outcome = match self.archive_city(city).await {
                Ok(receipt) => CityOutcome::Archived(receipt),
                Err(err) if err.is_unrecoverable() => return Err(err),
                Err(Error::Storage { .. } | Error::MissingObservation { .. }) => {
                    CityOutcome::SaveFailed
                }
                Err(_) => {
                    info!("Failed to fetch weather data for {city}");
                    CityOutcome::FetchFailed
                }
            };
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }

    async fn archive_city(&self, city: &str) -> Result<ArchiveReceipt> {
        info!("Fetching weather for {city}...");
        let payload = self.fetch_weather(city).await?;

        let observation = Observation::from_payload(city, payload)?;
        info!("Temperature: {}°F", observation.temperature);
        info!("Feels like: {}°F", observation.feels_like);
        info!("Humidity: {}%", observation.humidity);
        info!("Conditions: {}", observation.description);

        let receipt = self.save_observation(Some(&observation), city).await?;
        info!("Weather data for {city} saved to blob storage as {}", receipt.blob_name);
        Ok(receipt)
    }
}
