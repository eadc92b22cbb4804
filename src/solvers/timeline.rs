//! Timeline inversion: years to reach the target at a given annual rate

use serde::{Deserialize, Serialize};

/// Display precision for solved timelines (tenths of a year)
///
/// Both the natural and accelerated timelines round through this policy so
/// the two figures are directly comparable.
const YEAR_PRECISION: f64 = 10.0;

/// Solved timeline together with the rate it was solved at
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimelineResult {
    /// Years to reach the target; `None` when the goal is unreachable at
    /// this rate (never a computed finite number from a non-positive rate)
    pub years: Option<f64>,

    /// Annual return percentage the timeline was solved at
    pub annual_return: f64,
}

impl TimelineResult {
    /// Solve the timeline at a rate and record the rate alongside it
    pub fn compute(current: f64, target: f64, annual_return_pct: f64) -> Self {
        Self {
            years: years_to_target(current, target, annual_return_pct),
            annual_return: annual_return_pct,
        }
    }
}

/// Years for `current` to compound into `target` at an annual rate
///
/// Inverts the future-value equation:
/// `years = ln(target / current) / ln(1 + rate / 100)`, rounded half-up to a
/// tenth of a year. Already-met goals return `Some(0.0)`. A non-positive
/// rate (or a zero starting balance below target) cannot reach the target
/// by compounding alone and returns `None`.
pub fn years_to_target(current: f64, target: f64, annual_return_pct: f64) -> Option<f64> {
    if current >= target {
        return Some(0.0);
    }
    if !(annual_return_pct > 0.0) || current <= 0.0 {
        return None;
    }

    let raw = (target / current).ln() / (1.0 + annual_return_pct / 100.0).ln();
    Some((raw * YEAR_PRECISION).round() / YEAR_PRECISION)
}
