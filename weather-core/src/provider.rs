use async_trait::async_trait;

use crate::{Config, WeatherPayload, error::Result, provider::openweather::OpenWeatherProvider};

pub mod openweather;

/// Source of current weather for a named city.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch the current conditions for `city`.
    ///
    /// The city is sent verbatim. A successful result carries the provider's
    /// JSON untouched; its shape is not checked here.
    async fn get_weather(&self, city: &str) -> Result<WeatherPayload>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> Box<dyn WeatherProvider> {
    Box::new(OpenWeatherProvider::new(config.api_key.clone()))
}
