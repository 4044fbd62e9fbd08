use gdd_core::TemperatureReading;

/// Mean of a window of daily highs. None on an empty window.
pub fn mean_high(highs: &[f64]) -> Option<f64> {
    if highs.is_empty() {
        return None;
    }
    Some(highs.iter().sum::<f64>() / highs.len() as f64)
}

/// Dormant iff the mean high of the supplied window is below the
/// threshold. An empty window reads as "not dormant" rather than a
/// division by zero. Deliberately a single coarse signal so results stay
/// explainable.
pub fn is_dormant(recent_highs: &[f64], threshold: f64) -> bool {
    match mean_high(recent_highs) {
        Some(mean) => mean < threshold,
        None => false,
    }
}

/// Whole-range dormancy scan: true iff ANY run of `window_days`
/// consecutive readings has a mean high below the threshold.
///
/// This drives the cycle-reset rule, so it must examine every window in
/// the series between the anchor and the present, not just the trailing
/// one — a cold stretch months ago followed by a warm spring still resets
/// the cycle. A series shorter than the window cannot contain a full
/// dormancy period and returns false.
pub fn dormancy_occurred(
    readings: &[TemperatureReading],
    window_days: usize,
    threshold: f64,
) -> bool {
    if window_days == 0 || readings.len() < window_days {
        return false;
    }
    readings.windows(window_days).any(|w| {
        let mean = w.iter().map(|r| r.high_temp).sum::<f64>() / window_days as f64;
        mean < threshold
    })
}
