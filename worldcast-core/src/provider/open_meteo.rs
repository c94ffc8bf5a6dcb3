use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::ForecastConfig;
use crate::geography::Country;
use crate::model::{WeatherCondition, WeatherReading, celsius_to_fahrenheit};

use super::{ForecastProvider, WeatherServiceError};

/// Field list for the `current` query parameter.
const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,weather_code,wind_speed_10m";

/// Client for the Open-Meteo forecast endpoint.
///
/// Each `fetch` performs exactly one GET against the configured base URL,
/// bounded by the configured timeout. No caching, no retries.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    base_url: String,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new(config: &ForecastConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { base_url: config.base_url.clone(), http })
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoProvider {
    async fn fetch(&self, country: &Country) -> Result<WeatherReading, WeatherServiceError> {
        debug!(country = country.name, capital = country.capital, "requesting current weather");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("latitude", country.latitude.to_string()),
                ("longitude", country.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
            ])
            .send()
            .await
            .map_err(|e| WeatherServiceError::request(country, e))?;

        let status = res.status();
        if !status.is_success() {
            return Err(WeatherServiceError::status(country, status));
        }

        let body = res
            .text()
            .await
            .map_err(|e| WeatherServiceError::request(country, e))?;

        parse_body(country, &body)
    }
}

/// Decode a forecast response body into a reading for `country`.
fn parse_body(country: &Country, body: &str) -> Result<WeatherReading, WeatherServiceError> {
    let parsed: ForecastResponse = serde_json::from_str(body)
        .map_err(|e| WeatherServiceError::invalid_response(country, e.to_string()))?;

    let current = parsed.current;

    Ok(WeatherReading {
        country: country.name.to_string(),
        capital: country.capital.to_string(),
        continent: country.continent.to_string(),
        temperature_c: current.temperature_2m,
        temperature_f: celsius_to_fahrenheit(current.temperature_2m),
        humidity_pct: current.relative_humidity_2m,
        wind_speed_kmh: current.wind_speed_10m,
        condition: WeatherCondition::from_code(current.weather_code),
        weather_code: current.weather_code,
    })
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temperature_2m: f64,
    relative_humidity_2m: u8,
    weather_code: i32,
    wind_speed_10m: f64,
}
