use std::env;

use serde::{Deserialize, Serialize};

use crate::types::{GrassType, TemperatureUnit};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

// ── Per-user agronomic configuration ──────────────────────────

/// Derived thresholds for one user's GDD tracking.
///
/// Base temperatures: 32°F/0°C for cool-season grass, 50°F/10°C for
/// warm-season. The 86°F/30°C cap reflects the point past which extra
/// heat stops accelerating growth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GddConfig {
    pub grass_type: GrassType,
    pub temperature_unit: TemperatureUnit,
    pub base_temperature: f64,
    pub target_gdd: f64,
    pub max_temperature_cap: f64,
    pub overdue_gdd_multiplier: f64,
    pub overdue_days_threshold: i64,
    pub dormancy_window_days: usize,
    /// Mean daily high below which the grass is considered dormant.
    /// A named constant per grass type, not derived from the base.
    pub dormancy_high_threshold: f64,
}

const TARGET_GDD_COOL: f64 = 200.0;
const TARGET_GDD_WARM: f64 = 220.0;

impl GddConfig {
    pub fn for_user(
        grass_type: GrassType,
        unit: TemperatureUnit,
        custom_target: Option<f64>,
    ) -> Self {
        let base_temperature = match (grass_type, unit) {
            (GrassType::Cool, TemperatureUnit::Fahrenheit) => 32.0,
            (GrassType::Cool, TemperatureUnit::Celsius) => 0.0,
            (GrassType::Warm, TemperatureUnit::Fahrenheit) => 50.0,
            (GrassType::Warm, TemperatureUnit::Celsius) => 10.0,
        };
        let max_temperature_cap = match unit {
            TemperatureUnit::Fahrenheit => 86.0,
            TemperatureUnit::Celsius => 30.0,
        };
        let target_gdd = custom_target.unwrap_or(match grass_type {
            GrassType::Cool => TARGET_GDD_COOL,
            GrassType::Warm => TARGET_GDD_WARM,
        });
        let dormancy_high_threshold = match (grass_type, unit) {
            (GrassType::Cool, TemperatureUnit::Fahrenheit) => 50.0,
            (GrassType::Cool, TemperatureUnit::Celsius) => 10.0,
            (GrassType::Warm, TemperatureUnit::Fahrenheit) => 60.0,
            (GrassType::Warm, TemperatureUnit::Celsius) => 15.5,
        };

        debug_assert!(base_temperature < max_temperature_cap);

        Self {
            grass_type,
            temperature_unit: unit,
            base_temperature,
            target_gdd,
            max_temperature_cap,
            overdue_gdd_multiplier: 2.0,
            overdue_days_threshold: 45,
            dormancy_window_days: 7,
            dormancy_high_threshold,
        }
    }
}

// ── Service-level tunables ────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// TTL applied to every cached result, in seconds.
    pub cache_ttl_secs: u64,
    /// Maximum number of usable forecast days in a projection.
    pub forecast_horizon_days: usize,
    /// Length of the rolling historical view, in days.
    pub rolling_window_days: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: 86_400,
            forecast_horizon_days: 7,
            rolling_window_days: 15,
        }
    }
}

impl ServiceConfig {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self {
            cache_ttl_secs: env_u64("GDD_CACHE_TTL_SECS", 86_400),
            forecast_horizon_days: env_u64("GDD_FORECAST_HORIZON_DAYS", 7) as usize,
            rolling_window_days: env_u64("GDD_ROLLING_WINDOW_DAYS", 15) as usize,
        }
    }

    pub fn log_summary(&self) {
        tracing::info!(
            "GDD service config: cache_ttl={}s, forecast_horizon={}d, rolling_window={}d",
            self.cache_ttl_secs,
            self.forecast_horizon_days,
            self.rolling_window_days
        );
    }
}
