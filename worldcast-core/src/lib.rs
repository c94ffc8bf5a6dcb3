//! Core library for the `worldcast` tools.
//!
//! This crate defines:
//! - The static world geography tables (countries, cities, regions)
//! - A client for the Open-Meteo forecast service
//! - A sequential batch fetch pipeline with a configurable error policy
//! - Plain-text weather report formatting
//!
//! It is used by `worldcast-cli` and `worldcast-api`, but can also be reused
//! by other binaries or services.

pub mod batch;
pub mod config;
pub mod geography;
pub mod model;
pub mod provider;
pub mod report;

pub use batch::{BatchOutcome, ErrorPolicy, fetch_batch};
pub use config::{Config, ForecastConfig};
pub use geography::{City, Country, Region};
pub use model::{WeatherCondition, WeatherReading};
pub use provider::{ForecastProvider, WeatherServiceError, open_meteo::OpenMeteoProvider};
