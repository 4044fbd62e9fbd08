use gdd_core::{CycleStatus, GddConfig};

/// Priority-ordered cycle classification. First match wins:
///
/// 1. Dormant — overrides everything, including an otherwise-overdue
///    cycle: an overdue signal during genuine dormancy is not actionable.
/// 2. Overdue — accumulation at or past `target × multiplier`, or the
///    anchor is at least `overdue_days_threshold` days old. Either alone
///    suffices.
/// 3. Complete — accumulation at or past the target.
/// 4. Active — otherwise, including the no-anchor case (accumulation is
///    defined as 0 there).
///
/// A pure function of the current facts; no previous state is consulted.
pub fn classify(
    accumulated_gdd: f64,
    target_gdd: f64,
    days_since_anchor: Option<i64>,
    is_dormant: bool,
    cfg: &GddConfig,
) -> CycleStatus {
    if is_dormant {
        return CycleStatus::Dormant;
    }

    let gdd_overdue = accumulated_gdd >= target_gdd * cfg.overdue_gdd_multiplier;
    let days_overdue =
        days_since_anchor.is_some_and(|days| days >= cfg.overdue_days_threshold);
    if gdd_overdue || days_overdue {
        return CycleStatus::Overdue;
    }

    if accumulated_gdd >= target_gdd {
        return CycleStatus::Complete;
    }

    CycleStatus::Active
}
