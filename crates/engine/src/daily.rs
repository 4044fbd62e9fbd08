/// Thermal contribution of a single day.
///
/// The low is clamped up to the base so a cold night never subtracts
/// growth; the high is capped at `cap` and then clamped up to the base so
/// a day entirely below the base contributes exactly 0 even after
/// capping. Result is the midpoint excess over the base, never negative.
pub fn daily_gdd(base: f64, cap: f64, high: f64, low: f64) -> f64 {
    let low = low.max(base);
    let high = high.min(cap).max(base);
    (high + low) / 2.0 - base
}
