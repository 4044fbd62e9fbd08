use async_trait::async_trait;
use chrono::NaiveDate;
use std::time::Duration;

use gdd_core::{ForecastPeriod, GddError, TemperatureReading, TemperatureUnit, UserSettings};

/// Settings store boundary. `Ok(None)` is the explicit not-found signal;
/// the coordinator maps it to `GddError::ConfigurationMissing`.
#[async_trait]
pub trait SettingsProvider: Send + Sync {
    async fn user_settings(&self, user_id: &str) -> Result<Option<UserSettings>, GddError>;
}

/// Weather data boundary. Implementations perform whatever I/O and retry
/// policy they need; the engine sees only ordered, plain data.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Daily high/low series for `[start, end]` inclusive, ordered by
    /// date, in the requested unit.
    async fn historical_temperatures(
        &self,
        latitude: f64,
        longitude: f64,
        start: NaiveDate,
        end: NaiveDate,
        unit: TemperatureUnit,
    ) -> Result<Vec<TemperatureReading>, GddError>;

    /// Raw forecast periods (possibly day/night split, mixed units, and
    /// more than 7 calendar days).
    async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<ForecastPeriod>, GddError>;
}

/// Entry-history boundary: the most recent qualifying application date.
#[async_trait]
pub trait ApplicationHistoryProvider: Send + Sync {
    async fn last_application_date(&self, user_id: &str)
        -> Result<Option<NaiveDate>, GddError>;
}

/// Key/value result cache with per-entry TTL. Keys are
/// per-user-per-operation, so entries are independent across requests.
#[async_trait]
pub trait ResultCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, GddError>;
    async fn set(
        &self,
        key: &str,
        value: serde_json::Value,
        ttl: Duration,
    ) -> Result<(), GddError>;
    async fn delete(&self, key: &str) -> Result<(), GddError>;
}
