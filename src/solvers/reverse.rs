//! Reverse/what-if calculator
//!
//! Holds some plan variables fixed and solves for an alternate unknown by
//! remapping the timeline and contribution inversions; no new numerical
//! methods are introduced.

use super::contribution::{solve_required_contribution, ContributionResult};
use crate::plan::{CashFlow, CashFlowKind};
use crate::projection::future_value;

/// Search ceiling for the earliest-age sweep
const MAX_ATTAINABLE_AGE: u32 = 100;

/// Synthetic id for the hypothetical extra SIP
const WHAT_IF_SIP_ID: u32 = 0;

/// Earliest age at which the target is attainable with an extra monthly SIP
///
/// Sweeps whole-year horizons, projecting current wealth, the existing
/// flows, and a hypothetical extra monthly contribution running from year 1
/// through each candidate horizon, and returns the first age whose projected
/// value reaches the target. `Some(current_age)` when the goal is already
/// met; `None` when even age 100 falls short, or the rate is negative.
pub fn earliest_attainable_age(
    current_wealth: f64,
    target_wealth: f64,
    current_age: u32,
    annual_return_pct: f64,
    existing_cash_flows: &[CashFlow],
    extra_monthly: f64,
) -> Option<u32> {
    if current_wealth >= target_wealth {
        return Some(current_age);
    }
    if !(annual_return_pct >= 0.0) || current_age >= MAX_ATTAINABLE_AGE {
        return None;
    }

    let max_years = MAX_ATTAINABLE_AGE - current_age;
    let mut augmented = existing_cash_flows.to_vec();
    augmented.push(CashFlow::recurring(
        WHAT_IF_SIP_ID,
        CashFlowKind::Sip,
        extra_monthly,
        1,
        max_years,
    ));

    for years in 1..=max_years {
        let fv = future_value(current_wealth, years * 12, annual_return_pct, &augmented);
        if fv >= target_wealth {
            return Some(current_age + years);
        }
    }

    None
}

/// Monthly investment needed to retire at a hypothetical earlier age
///
/// Fixes the timeline at `retire_age - current_age` and delegates to the
/// required-contribution inversion. `None` when the hypothetical age is not
/// in the future.
pub fn required_monthly_for_age(
    current_wealth: f64,
    target_wealth: f64,
    current_age: u32,
    retire_age: u32,
    annual_return_pct: f64,
    existing_cash_flows: &[CashFlow],
) -> Option<ContributionResult> {
    if retire_age <= current_age {
        return None;
    }
    let timeline = (retire_age - current_age) as f64;
    solve_required_contribution(
        current_wealth,
        target_wealth,
        timeline,
        annual_return_pct,
        existing_cash_flows,
    )
}

/// Constant annual return needed to reach the target in a fixed timeline
///
/// Closed-form remap of the timeline inversion, solved for the rate:
/// `rate = ((target / current)^(1 / years) - 1) * 100`. `Some(0.0)` when the
/// goal is already met; `None` for a non-positive horizon or a zero
/// starting balance below target.
pub fn required_annual_return(current: f64, target: f64, years: f64) -> Option<f64> {
    if current >= target {
        return Some(0.0);
    }
    if !(years > 0.0) || current <= 0.0 {
        return None;
    }

    Some(((target / current).powf(1.0 / years) - 1.0) * 100.0)
}
