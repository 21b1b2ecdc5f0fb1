use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Raw JSON returned by the weather provider, kept verbatim for archival.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherPayload(pub Value);

impl WeatherPayload {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// JSON text of the payload as it will be stored.
    pub fn to_json_bytes(&self) -> Vec<u8> {
        // Serializing a `Value` cannot fail: its keys are always strings.
        serde_json::to_vec(&self.0).unwrap_or_default()
    }
}

/// One city's current conditions, read out of a provider payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub city: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: i64,
    pub description: String,
    pub payload: WeatherPayload,
}

impl Observation {
    /// Extract the metrics from `payload`.
    ///
    /// Either every field is present and typed as expected, or a
    /// [`Error::Shape`] names the first path that is not.
    pub fn from_payload(city: &str, payload: WeatherPayload) -> Result<Self> {
        let value = payload.as_value();
        let shape = |path| Error::Shape { city: city.to_string(), path };

        let temperature = value
            .pointer("/main/temp")
            .and_then(Value::as_f64)
            .ok_or_else(|| shape("main.temp"))?;
        let feels_like = value
            .pointer("/main/feels_like")
            .and_then(Value::as_f64)
            .ok_or_else(|| shape("main.feels_like"))?;
        let humidity = value
            .pointer("/main/humidity")
            .and_then(Value::as_i64)
            .ok_or_else(|| shape("main.humidity"))?;
        let description = value
            .pointer("/weather/0/description")
            .and_then(Value::as_str)
            .ok_or_else(|| shape("weather[0].description"))?
            .to_string();

        Ok(Self {
            city: city.to_string(),
            temperature,
            feels_like,
            humidity,
            description,
            payload,
        })
    }
}

/// Where an observation ended up and when it was captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveReceipt {
    pub blob_name: String,
    pub captured_at: NaiveDateTime,
}

/// Object name for an observation: `{city}-{YYYYMMDD-HHmmss}.json`.
///
/// Second resolution: two captures of the same city within one second share
/// a name, and the later upload replaces the earlier one.
pub fn blob_name(city: &str, captured_at: NaiveDateTime) -> String {
    format!("{}-{}.json", city, captured_at.format("%Y%m%d-%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use serde_json::json;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    fn seattle_payload() -> WeatherPayload {
        WeatherPayload(json!({
            "main": { "temp": 52.1, "feels_like": 49.0, "humidity": 80 },
            "weather": [{ "description": "light rain" }]
        }))
    }

    #[test]
    fn observation_reads_all_metrics() {
        let obs = Observation::from_payload("Seattle", seattle_payload()).unwrap();

        assert_eq!(obs.city, "Seattle");
        assert_eq!(obs.temperature, 52.1);
        assert_eq!(obs.feels_like, 49.0);
        assert_eq!(obs.humidity, 80);
        assert_eq!(obs.description, "light rain");
        assert_eq!(obs.payload, seattle_payload());
    }

    #[test]
    fn integral_temperatures_are_accepted() {
        let payload = WeatherPayload(json!({
            "main": { "temp": 70, "feels_like": 71, "humidity": 40 },
            "weather": [{ "description": "clear sky" }]
        }));

        let obs = Observation::from_payload("Philadelphia", payload).unwrap();
        assert_eq!(obs.temperature, 70.0);
        assert_eq!(obs.feels_like, 71.0);
    }

    #[test]
    fn empty_weather_list_is_a_shape_error() {
        let payload = WeatherPayload(json!({
            "main": { "temp": 52.1, "feels_like": 49.0, "humidity": 80 },
            "weather": []
        }));

        let err = Observation::from_payload("Seattle", payload).unwrap_err();
        assert!(matches!(err, Error::Shape { path: "weather[0].description", .. }));
    }

    #[test]
    fn missing_main_is_a_shape_error() {
        let payload = WeatherPayload(json!({ "weather": [{ "description": "fog" }] }));

        let err = Observation::from_payload("Seattle", payload).unwrap_err();
        assert!(matches!(err, Error::Shape { path: "main.temp", .. }));
        assert!(err.to_string().contains("Seattle"));
    }

    #[test]
    fn stored_json_keeps_every_provider_field() {
        let payload = WeatherPayload(json!({
            "coord": { "lon": -122.33, "lat": 47.61 },
            "main": { "temp": 52.1, "feels_like": 49.0, "humidity": 80, "pressure": 1012 },
            "weather": [{ "id": 500, "main": "Rain", "description": "light rain" }],
            "name": "Seattle"
        }));

        let stored: Value = serde_json::from_slice(&payload.to_json_bytes()).unwrap();
        assert_eq!(&stored, payload.as_value());
    }

    #[test]
    fn stored_json_keeps_provider_key_order() {
        let body = r#"{"weather":[{"description":"mist"}],"main":{"temp":40.5,"feels_like":38.2,"humidity":93}}"#;
        let payload: WeatherPayload = serde_json::from_str(body).unwrap();

        assert_eq!(payload.to_json_bytes(), body.as_bytes());
    }

    #[test]
    fn blob_name_uses_second_resolution_timestamp() {
        assert_eq!(blob_name("Seattle", at(9, 5, 3)), "Seattle-20240307-090503.json");
        assert_eq!(blob_name("New York", at(23, 59, 59)), "New York-20240307-235959.json");
    }

    #[test]
    fn same_second_collides_next_second_does_not() {
        let first = at(12, 0, 0);
        let same_second = first + Duration::milliseconds(999);
        let next_second = first + Duration::seconds(1);

        assert_eq!(blob_name("Seattle", first), blob_name("Seattle", same_second));
        assert_ne!(blob_name("Seattle", first), blob_name("Seattle", next_second));
    }
}
