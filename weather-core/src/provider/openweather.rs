use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, error};

use crate::{
    WeatherPayload,
    error::{Error, Result, truncate_body},
};

use super::WeatherProvider;

/// Current-weather endpoint of the OpenWeather API.
pub const CURRENT_WEATHER_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Temperatures come back in Fahrenheit.
const UNITS: &str = "imperial";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: CURRENT_WEATHER_URL.to_string(),
            http: Client::new(),
        }
    }

    /// Point the provider at a different endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherPayload> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", UNITS)])
            .send()
            .await
            .map_err(|source| Error::Request { city: city.to_string(), source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| Error::Request { city: city.to_string(), source })?;
        debug!(%city, %status, bytes = body.len(), "OpenWeather responded");

        interpret_response(city, status, &body)
    }
}

/// Turn a status and body into a payload or an error.
///
/// Any 2xx with a JSON body is accepted, whatever its shape.
pub(crate) fn interpret_response(
    city: &str,
    status: StatusCode,
    body: &str,
) -> Result<WeatherPayload> {
    if !status.is_success() {
        return Err(Error::Status {
            city: city.to_string(),
            status,
            body: truncate_body(body),
        });
    }

    serde_json::from_str(body).map_err(|source| Error::Body { city: city.to_string(), source })
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn get_weather(&self, city: &str) -> Result<WeatherPayload> {
        let result = self.fetch_current(city).await;
        if let Err(err) = &result {
            error!("Error fetching weather data for {city}: {}", err.report());
        }
        result
    }
}
