//! Sequential multi-country fetch with a configurable error policy.

use tracing::warn;

use crate::geography::Country;
use crate::model::WeatherReading;
use crate::provider::{ForecastProvider, WeatherServiceError};

/// Rule governing whether a multi-location fetch stops on the first failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Record the failure and keep going.
    #[default]
    Skip,
    /// Abort on the first failure, discarding partial results.
    Raise,
}

/// Successful readings plus the failures skipped along the way.
///
/// `failures` is empty unless the batch ran under [`ErrorPolicy::Skip`] and
/// at least one location failed; skipped failures are surfaced here rather
/// than silently dropped.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub readings: Vec<WeatherReading>,
    pub failures: Vec<WeatherServiceError>,
}

/// Fetch weather for each country in turn.
///
/// Countries are processed strictly in input order with a single request in
/// flight at a time, so `readings` preserves the input order of the
/// successful locations. An empty input returns an empty outcome without
/// touching the provider. Under [`ErrorPolicy::Raise`] the first failure is
/// returned as the error and no partial results are exposed.
pub async fn fetch_batch(
    provider: &dyn ForecastProvider,
    countries: &[Country],
    policy: ErrorPolicy,
) -> Result<BatchOutcome, WeatherServiceError> {
    let mut outcome = BatchOutcome::default();

    for country in countries {
        match provider.fetch(country).await {
            Ok(reading) => outcome.readings.push(reading),
            Err(err) => match policy {
                ErrorPolicy::Raise => return Err(err),
                ErrorPolicy::Skip => {
                    warn!(country = country.name, error = %err, "skipping failed fetch");
                    outcome.failures.push(err);
                }
            },
        }
    }

    Ok(outcome)
}
