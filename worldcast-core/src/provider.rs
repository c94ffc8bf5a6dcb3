use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

use crate::geography::Country;
use crate::model::WeatherReading;

pub mod open_meteo;

/// Error raised when a weather reading could not be produced for a location.
///
/// Every variant names the country and capital being fetched, so batch
/// callers can tell which location failed.
#[derive(Debug, Error)]
pub enum WeatherServiceError {
    /// The request never produced a usable HTTP response
    /// (connection error, timeout, unreadable body).
    #[error("Failed to fetch weather for {country} ({capital}): {source}")]
    Request {
        country: String,
        capital: String,
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-success status code.
    #[error("Failed to fetch weather for {country} ({capital}): HTTP status {status}")]
    Status {
        country: String,
        capital: String,
        status: reqwest::StatusCode,
    },

    /// The response body did not have the expected shape.
    #[error("Invalid response for {country} ({capital}): {reason}")]
    InvalidResponse {
        country: String,
        capital: String,
        reason: String,
    },
}

impl WeatherServiceError {
    pub(crate) fn request(country: &Country, source: reqwest::Error) -> Self {
        WeatherServiceError::Request {
            country: country.name.to_string(),
            capital: country.capital.to_string(),
            source,
        }
    }

    pub(crate) fn status(country: &Country, status: reqwest::StatusCode) -> Self {
        WeatherServiceError::Status {
            country: country.name.to_string(),
            capital: country.capital.to_string(),
            status,
        }
    }

    pub(crate) fn invalid_response(country: &Country, reason: impl Into<String>) -> Self {
        WeatherServiceError::InvalidResponse {
            country: country.name.to_string(),
            capital: country.capital.to_string(),
            reason: reason.into(),
        }
    }
}

/// A source of current weather readings for countries.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    /// Produce one reading for the country's capital coordinates.
    async fn fetch(&self, country: &Country) -> Result<WeatherReading, WeatherServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testland() -> Country {
        Country::new("TestLand", "TestCity", "TestContinent", 10.0, 20.0)
    }

    #[test]
    fn errors_name_the_location() {
        let err = WeatherServiceError::invalid_response(&testland(), "missing field `current`");
        let msg = err.to_string();
        assert!(msg.contains("TestLand"));
        assert!(msg.contains("TestCity"));
        assert!(msg.contains("missing field `current`"));
    }

    #[test]
    fn status_error_names_the_code() {
        let err = WeatherServiceError::status(&testland(), reqwest::StatusCode::BAD_GATEWAY);
        assert!(err.to_string().contains("502"));
    }
}
