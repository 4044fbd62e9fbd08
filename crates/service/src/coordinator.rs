use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use gdd_core::{
    Coordinates, CurrentGddResult, ForecastGddResult, GddConfig, GddError, HistoricalGddResult,
    ServiceConfig, TemperatureReading, UserSettings,
};
use gdd_engine::{accumulate, classify, dormancy_occurred, is_dormant, project, reduce_periods};

use crate::providers::{
    ApplicationHistoryProvider, ResultCache, SettingsProvider, WeatherProvider,
};

/// Orchestrates settings, weather, and application history into the three
/// public result shapes. All numeric and state logic lives in
/// `gdd-engine`; the coordinator only fetches inputs, applies the
/// cycle-reset rule, and assembles responses behind a
/// cache-then-compute-then-populate pattern.
pub struct GddCoordinator {
    settings: Arc<dyn SettingsProvider>,
    weather: Arc<dyn WeatherProvider>,
    history: Arc<dyn ApplicationHistoryProvider>,
    cache: Arc<dyn ResultCache>,
    config: ServiceConfig,
}

impl GddCoordinator {
    pub fn new(
        settings: Arc<dyn SettingsProvider>,
        weather: Arc<dyn WeatherProvider>,
        history: Arc<dyn ApplicationHistoryProvider>,
        cache: Arc<dyn ResultCache>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            settings,
            weather,
            history,
            cache,
            config,
        }
    }

    fn ttl(&self) -> Duration {
        Duration::from_secs(self.config.cache_ttl_secs)
    }

    async fn cached<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, GddError> {
        match self.cache.get(key).await? {
            // A shape mismatch (stale schema) is treated as a miss.
            Some(value) => Ok(serde_json::from_value(value).ok()),
            None => Ok(None),
        }
    }

    async fn store<T: Serialize>(&self, key: &str, value: &T) -> Result<(), GddError> {
        let json = serde_json::to_value(value).map_err(|e| GddError::Cache(e.to_string()))?;
        self.cache.set(key, json, self.ttl()).await
    }

    async fn user_config(
        &self,
        user_id: &str,
    ) -> Result<(UserSettings, Coordinates, GddConfig), GddError> {
        let settings = self
            .settings
            .user_settings(user_id)
            .await?
            .ok_or_else(|| GddError::ConfigurationMissing(user_id.to_string()))?;
        let location = settings
            .location
            .ok_or_else(|| GddError::LocationNotConfigured(user_id.to_string()))?;
        let config = GddConfig::for_user(
            settings.grass_type,
            settings.temperature_unit,
            settings.custom_target_gdd,
        );
        Ok((settings, location, config))
    }

    // ── Current status ────────────────────────────────────────

    pub async fn current_status(&self, user_id: &str) -> Result<CurrentGddResult, GddError> {
        self.current_status_as_of(user_id, Utc::now().date_naive())
            .await
    }

    pub async fn current_status_as_of(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> Result<CurrentGddResult, GddError> {
        let key = format!("gdd:current:{user_id}");
        if let Some(hit) = self.cached(&key).await? {
            return Ok(hit);
        }
        let result = self.compute_current(user_id, today).await?;
        self.store(&key, &result).await?;
        Ok(result)
    }

    async fn compute_current(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> Result<CurrentGddResult, GddError> {
        let (_, location, cfg) = self.user_config(user_id).await?;
        let anchor = self.history.last_application_date(user_id).await?;

        let (accumulated_gdd, anchor_date, days_since_anchor, dormant) = match anchor {
            Some(anchor) => {
                // The fetch starts at the anchor itself so the reset scan
                // sees the entire gap, however long.
                let readings = self
                    .weather
                    .historical_temperatures(
                        location.latitude,
                        location.longitude,
                        anchor,
                        today,
                        cfg.temperature_unit,
                    )
                    .await?;
                let dormant = trailing_dormant(&readings, &cfg);

                if dormancy_occurred(
                    &readings,
                    cfg.dormancy_window_days,
                    cfg.dormancy_high_threshold,
                ) {
                    // A dormancy period since the anchor restarts the
                    // biological clock: the anchor is treated as absent
                    // for this evaluation only, never written back.
                    info!(user_id, %anchor, "dormancy since anchor, cycle reset");
                    (0.0, None, None, dormant)
                } else {
                    // The application day itself contributes nothing to
                    // the new cycle.
                    let cycle: Vec<TemperatureReading> =
                        readings.iter().filter(|r| r.date > anchor).copied().collect();
                    let acc =
                        accumulate(cfg.base_temperature, cfg.max_temperature_cap, &cycle);
                    let days = today.signed_duration_since(anchor).num_days();
                    (acc.total_gdd, Some(anchor), Some(days), dormant)
                }
            }
            None => {
                // No anchor: accumulation is defined as 0, but the
                // dormancy signal still comes from the trailing window.
                let window = cfg.dormancy_window_days.max(1) as u64;
                let start = today - chrono::Days::new(window - 1);
                let readings = self
                    .weather
                    .historical_temperatures(
                        location.latitude,
                        location.longitude,
                        start,
                        today,
                        cfg.temperature_unit,
                    )
                    .await?;
                (0.0, None, None, trailing_dormant(&readings, &cfg))
            }
        };

        let cycle_status = classify(
            accumulated_gdd,
            cfg.target_gdd,
            days_since_anchor,
            dormant,
            &cfg,
        );
        let percentage_to_target = if cfg.target_gdd > 0.0 {
            (accumulated_gdd / cfg.target_gdd * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };

        debug!(
            user_id,
            accumulated_gdd,
            ?cycle_status,
            "current status computed"
        );

        Ok(CurrentGddResult {
            accumulated_gdd,
            anchor_date,
            days_since_anchor,
            base_temperature: cfg.base_temperature,
            target_gdd: cfg.target_gdd,
            percentage_to_target,
            grass_type: cfg.grass_type,
            cycle_status,
        })
    }

    // ── Historical range ──────────────────────────────────────

    /// Raw accumulation over an explicit range. No anchor, no cycle
    /// status — just daily contributions and their total.
    pub async fn historical(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HistoricalGddResult, GddError> {
        if end < start {
            return Err(GddError::InvalidDateRange(format!(
                "end {end} precedes start {start}"
            )));
        }

        let key = format!("gdd:history:{user_id}:{start}:{end}");
        if let Some(hit) = self.cached(&key).await? {
            return Ok(hit);
        }

        let (_, location, cfg) = self.user_config(user_id).await?;
        let readings = self
            .weather
            .historical_temperatures(
                location.latitude,
                location.longitude,
                start,
                end,
                cfg.temperature_unit,
            )
            .await?;
        let acc = accumulate(cfg.base_temperature, cfg.max_temperature_cap, &readings);

        let result = HistoricalGddResult {
            daily_breakdown: acc.daily_breakdown,
            total_gdd: acc.total_gdd,
            start_date: start,
            end_date: end,
            base_temperature: cfg.base_temperature,
        };
        self.store(&key, &result).await?;
        Ok(result)
    }

    /// Trailing rolling-window view ending today, inclusive.
    pub async fn rolling_window(&self, user_id: &str) -> Result<HistoricalGddResult, GddError> {
        self.rolling_window_as_of(user_id, Utc::now().date_naive())
            .await
    }

    pub async fn rolling_window_as_of(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> Result<HistoricalGddResult, GddError> {
        let days = self.config.rolling_window_days.max(1) as u64;
        let start = today - chrono::Days::new(days - 1);
        self.historical(user_id, start, today).await
    }

    // ── Forecast projection ───────────────────────────────────

    pub async fn forecast(&self, user_id: &str) -> Result<ForecastGddResult, GddError> {
        self.forecast_as_of(user_id, Utc::now().date_naive()).await
    }

    pub async fn forecast_as_of(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> Result<ForecastGddResult, GddError> {
        let key = format!("gdd:forecast:{user_id}");
        if let Some(hit) = self.cached(&key).await? {
            return Ok(hit);
        }

        // The starting total is recomputed rather than read from the
        // current-status cache, so a stale entry can never seed a fresh
        // projection.
        let current = self.compute_current(user_id, today).await?;
        let (settings, location, cfg) = self.user_config(user_id).await?;

        let periods = self
            .weather
            .forecast(location.latitude, location.longitude)
            .await?;
        let readings = reduce_periods(
            &periods,
            settings.temperature_unit,
            self.config.forecast_horizon_days,
        );
        let projection = project(
            current.accumulated_gdd,
            cfg.target_gdd,
            cfg.base_temperature,
            cfg.max_temperature_cap,
            &readings,
        );

        let projected_completion_date =
            projection.crossing_index.map(|i| projection.daily[i].date);
        let days_until_completion = projection.crossing_index.map(|i| i as i64 + 1);

        let result = ForecastGddResult {
            daily_forecast: projection.daily,
            projected_total: projection.projected_total,
            current_accumulated: current.accumulated_gdd,
            target_gdd: cfg.target_gdd,
            projected_completion_date,
            days_until_completion,
        };
        self.store(&key, &result).await?;
        Ok(result)
    }

    // ── Invalidation ──────────────────────────────────────────

    /// Drop the user's anchor-dependent cache entries. Called by the host
    /// whenever an application event is recorded; historical-range
    /// entries have no anchor dependence and are left to expire.
    pub async fn invalidate(&self, user_id: &str) -> Result<(), GddError> {
        self.cache.delete(&format!("gdd:current:{user_id}")).await?;
        self.cache.delete(&format!("gdd:forecast:{user_id}")).await?;
        Ok(())
    }
}

/// Dormancy signal from the most recent `dormancy_window_days` readings
/// (fewer when history is short).
fn trailing_dormant(readings: &[TemperatureReading], cfg: &GddConfig) -> bool {
    let start = readings.len().saturating_sub(cfg.dormancy_window_days);
    let highs: Vec<f64> = readings[start..].iter().map(|r| r.high_temp).collect();
    is_dormant(&highs, cfg.dormancy_high_threshold)
}
