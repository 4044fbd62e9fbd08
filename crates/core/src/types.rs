use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Grass category that drives base temperature, target, and dormancy thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrassType {
    Cool,
    Warm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Fahrenheit,
    Celsius,
}

/// One day's observed high/low, in the unit the caller configured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReading {
    pub date: NaiveDate,
    pub high_temp: f64,
    pub low_temp: f64,
}

/// Classification of the current application cycle.
///
/// Not stored anywhere — recomputed from (accumulation, elapsed days,
/// dormancy) on every evaluation, so it can change with the passage of
/// time alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleStatus {
    Active,
    Complete,
    Overdue,
    Dormant,
}

/// One day's thermal contribution in an accumulation breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyGdd {
    pub date: NaiveDate,
    pub gdd: f64,
}

/// Running accumulation over an ordered series of readings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccumulationResult {
    pub total_gdd: f64,
    pub daily_breakdown: Vec<DailyGdd>,
}

/// One projected forecast day: its own contribution plus the cumulative
/// total after it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub gdd: f64,
    pub projected_total: f64,
}

/// Raw forecast record from the weather collaborator, prior to reduction
/// into per-date high/low pairs. Daytime periods carry the high, nighttime
/// periods the low.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPeriod {
    pub start_time: DateTime<Utc>,
    pub is_daytime: bool,
    pub temperature: f64,
    pub unit: TemperatureUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Per-user settings as supplied by the settings collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    pub location: Option<Coordinates>,
    pub grass_type: GrassType,
    pub temperature_unit: TemperatureUnit,
    pub custom_target_gdd: Option<f64>,
}

/// Current cycle snapshot for a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentGddResult {
    pub accumulated_gdd: f64,
    /// Reference application date, or None when there is no anchor or a
    /// dormancy period since the anchor has reset the cycle.
    pub anchor_date: Option<NaiveDate>,
    /// Calendar-day difference between today and the anchor.
    pub days_since_anchor: Option<i64>,
    pub base_temperature: f64,
    pub target_gdd: f64,
    /// Progress toward the target, capped at 100.
    pub percentage_to_target: f64,
    pub grass_type: GrassType,
    pub cycle_status: CycleStatus,
}

/// Raw accumulation over an explicit date range; no cycle semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalGddResult {
    pub daily_breakdown: Vec<DailyGdd>,
    pub total_gdd: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub base_temperature: f64,
}

/// Forward projection from the current accumulated total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastGddResult {
    pub daily_forecast: Vec<ForecastDay>,
    pub projected_total: f64,
    pub current_accumulated: f64,
    pub target_gdd: f64,
    pub projected_completion_date: Option<NaiveDate>,
    pub days_until_completion: Option<i64>,
}
