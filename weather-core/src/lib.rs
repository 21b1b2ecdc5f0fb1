//! Core library for the `weather-archiver` batch job.
//!
//! This crate defines:
//! - Configuration resolved from the environment
//! - Abstraction over the weather provider (OpenWeather)
//! - Abstraction over blob storage (Azure Blob Storage)
//! - The observation model and the fetch-then-archive orchestrator
//!
//! It is used by `weather-archiver`, but the orchestrator takes its
//! collaborators as values, so other binaries or tests can swap them.

pub mod archiver;
pub mod clock;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod storage;

pub use archiver::{CityOutcome, DEFAULT_CITIES, WeatherArchiver};
pub use clock::{Clock, SystemClock};
pub use config::Config;
pub use error::{Error, Result};
pub use model::{ArchiveReceipt, Observation, WeatherPayload, blob_name};
pub use provider::{WeatherProvider, provider_from_config};
pub use storage::{BlobStore, ContainerStatus, store_from_config};
