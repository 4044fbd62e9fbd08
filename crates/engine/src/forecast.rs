use std::collections::BTreeMap;

use tracing::debug;

use gdd_core::config::{celsius_to_fahrenheit, fahrenheit_to_celsius};
use gdd_core::{ForecastDay, ForecastPeriod, TemperatureReading, TemperatureUnit};

use crate::daily::daily_gdd;

/// Outcome of walking a forecast series from the current accumulated total.
#[derive(Debug, Clone)]
pub struct Projection {
    pub daily: Vec<ForecastDay>,
    pub projected_total: f64,
    /// First day index (0-based) at which the running total reaches the
    /// target, inclusive of that day. None if the horizon never crosses.
    pub crossing_index: Option<usize>,
}

fn convert(temp: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    match (from, to) {
        (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => fahrenheit_to_celsius(temp),
        (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => celsius_to_fahrenheit(temp),
        _ => temp,
    }
}

#[derive(Default)]
struct DayPair {
    high: Option<f64>,
    low: Option<f64>,
}

/// Reduce raw forecast periods to one high/low pair per calendar date.
///
/// Conversion into the user's unit happens before pairing so mixed-unit
/// sources compare correctly. Daytime periods supply the high, nighttime
/// the low; when a date carries several of either, the warmest high and
/// coldest low win. A date missing either side is dropped outright —
/// never guessed. Output is date-ordered and truncated to the horizon.
pub fn reduce_periods(
    periods: &[ForecastPeriod],
    user_unit: TemperatureUnit,
    horizon_days: usize,
) -> Vec<TemperatureReading> {
    let mut by_date: BTreeMap<chrono::NaiveDate, DayPair> = BTreeMap::new();

    for period in periods {
        let temp = convert(period.temperature, period.unit, user_unit);
        let entry = by_date.entry(period.start_time.date_naive()).or_default();
        if period.is_daytime {
            entry.high = Some(entry.high.map_or(temp, |h: f64| h.max(temp)));
        } else {
            entry.low = Some(entry.low.map_or(temp, |l: f64| l.min(temp)));
        }
    }

    let dropped = by_date
        .values()
        .filter(|p| p.high.is_none() || p.low.is_none())
        .count();
    if dropped > 0 {
        debug!(dropped, "forecast dates missing a high or low were dropped");
    }

    by_date
        .into_iter()
        .filter_map(|(date, pair)| {
            Some(TemperatureReading {
                date,
                high_temp: pair.high?,
                low_temp: pair.low?,
            })
        })
        .take(horizon_days)
        .collect()
}

/// Walk the reduced forecast in order, extending the running total and
/// recording the first day the target is reached.
pub fn project(
    starting_accumulated: f64,
    target_gdd: f64,
    base: f64,
    cap: f64,
    forecast_readings: &[TemperatureReading],
) -> Projection {
    let mut running = starting_accumulated;
    let mut crossing_index = None;
    let mut daily = Vec::with_capacity(forecast_readings.len());

    for (i, r) in forecast_readings.iter().enumerate() {
        let gdd = daily_gdd(base, cap, r.high_temp, r.low_temp);
        running += gdd;
        if crossing_index.is_none() && running >= target_gdd {
            crossing_index = Some(i);
        }
        daily.push(ForecastDay {
            date: r.date,
            gdd,
            projected_total: running,
        });
    }

    Projection {
        daily,
        projected_total: running,
        crossing_index,
    }
}
