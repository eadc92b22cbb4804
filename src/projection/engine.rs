//! Cash-flow-aware compounding projector
//!
//! Steps a balance forward month by month under the plan's annual return,
//! applying scheduled cash flows, and samples the trajectory once per year.

use super::series::ProjectionSeries;
use super::state::ProjectionState;
use crate::plan::{CashFlow, CashFlowKind};

/// Synthetic id for the injected required-contribution SIP
const REQUIRED_SIP_ID: u32 = 0;

/// Longest horizon the projector will step; timelines beyond a human
/// planning span carry no information worth a trajectory
const MAX_PROJECTION_YEARS: f64 = 120.0;

/// Future value after a fixed number of monthly steps
///
/// Each month the balance grows by `annual_return_pct / 100 / 12`, then the
/// net scheduled flow for that month is applied (end-of-month convention, so
/// a level SIP accumulates exactly as an ordinary annuity). A zero rate
/// degenerates to plain accumulation of flows.
pub fn future_value(
    starting_value: f64,
    months: u32,
    annual_return_pct: f64,
    cash_flows: &[CashFlow],
) -> f64 {
    let monthly_rate = annual_return_pct / 100.0 / 12.0;
    let mut state = ProjectionState::from_start(starting_value);

    for _ in 0..months {
        state.advance_month();
        let net_flow: f64 = cash_flows
            .iter()
            .map(|flow| flow.monthly_amount(state.year, state.month_in_year))
            .sum();
        state.balance = state.balance * (1.0 + monthly_rate) + net_flow;
    }

    state.balance
}

/// Project a value trajectory over the timeline
///
/// Returns one point per year from 0 (the starting value) to the horizon
/// inclusive, where the horizon is the timeline rounded up to whole years so
/// the last sample is a full year-end balance. Returns `None` when the
/// timeline or the annual return is non-positive (no valid compounding
/// basis, and a fabricated trajectory would mislead) or the timeline exceeds
/// 120 years.
pub fn project(
    starting_value: f64,
    timeline_years: f64,
    annual_return_pct: f64,
    cash_flows: &[CashFlow],
) -> Option<ProjectionSeries> {
    if !(timeline_years > 0.0)
        || timeline_years > MAX_PROJECTION_YEARS
        || !(annual_return_pct > 0.0)
    {
        return None;
    }

    let horizon = timeline_years.ceil() as u32;
    let monthly_rate = annual_return_pct / 100.0 / 12.0;

    let mut series = ProjectionSeries::with_capacity(horizon as usize);
    series.add_point(0, starting_value);

    let mut state = ProjectionState::from_start(starting_value);
    for _ in 0..horizon * 12 {
        state.advance_month();
        let net_flow: f64 = cash_flows
            .iter()
            .map(|flow| flow.monthly_amount(state.year, state.month_in_year))
            .sum();
        state.balance = state.balance * (1.0 + monthly_rate) + net_flow;

        if state.at_year_end() {
            series.add_point(state.year, state.balance);
        }
    }

    Some(series)
}

/// Project the "what it would take" trajectory
///
/// Injects a synthetic monthly SIP spanning year 1 through the timeline on
/// top of the existing flows, leaving the caller's list untouched. Used when
/// the required-contribution solver reports the goal is not achievable from
/// existing flows alone, so the displayed trajectory shows the scenario that
/// actually reaches the target.
pub fn project_with_required_contribution(
    starting_value: f64,
    timeline_years: f64,
    annual_return_pct: f64,
    cash_flows: &[CashFlow],
    required_monthly_sip: f64,
) -> Option<ProjectionSeries> {
    if !(timeline_years > 0.0) {
        return None;
    }

    let mut augmented = cash_flows.to_vec();
    augmented.push(CashFlow::recurring(
        REQUIRED_SIP_ID,
        CashFlowKind::Sip,
        required_monthly_sip,
        1,
        timeline_years.ceil() as u32,
    ));

    project(starting_value, timeline_years, annual_return_pct, &augmented)
}
