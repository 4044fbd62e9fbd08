use gdd_core::{AccumulationResult, DailyGdd, TemperatureReading};

use crate::daily::daily_gdd;

/// Sum a series of daily readings into a running total.
///
/// The total is order-independent; the breakdown preserves input order
/// for display. Empty input yields a zero total and empty breakdown.
pub fn accumulate(base: f64, cap: f64, readings: &[TemperatureReading]) -> AccumulationResult {
    let daily_breakdown: Vec<DailyGdd> = readings
        .iter()
        .map(|r| DailyGdd {
            date: r.date,
            gdd: daily_gdd(base, cap, r.high_temp, r.low_temp),
        })
        .collect();

    let total_gdd = daily_breakdown.iter().map(|d| d.gdd).sum();

    AccumulationResult {
        total_gdd,
        daily_breakdown,
    }
}
