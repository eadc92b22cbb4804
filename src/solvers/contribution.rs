//! Required-contribution solver (inverted ordinary annuity)

use crate::plan::CashFlow;
use crate::projection::future_value;
use serde::{Deserialize, Serialize};

/// Outcome of the required-contribution solve
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ContributionResult {
    /// Level monthly SIP needed on top of the existing flows to close the
    /// gap; 0 when the goal is already achievable
    pub required_monthly_sip: f64,

    /// True when current wealth plus existing flows alone reach the target
    /// by the desired timeline
    pub achievable_with_existing: bool,

    /// Future value at the desired timeline from existing flows alone
    pub projected_fv: f64,
}

/// Solve for the additional monthly contribution that closes the gap
///
/// First projects current wealth plus the existing flows to the desired
/// timeline (reusing the projector's compounding, zero additional SIP). If
/// that future value already covers the target the goal is achievable and
/// the required SIP is 0. Otherwise the level monthly contribution comes
/// from the ordinary-annuity future-value formula inverted for the payment:
///
/// `C = shortfall * i / ((1 + i)^n - 1)` with `i = annual/100/12`,
/// `n = desired_timeline * 12`; a zero monthly rate degenerates to the
/// linear form `C = shortfall / n`.
///
/// Returns `None` when the timeline yields no whole month to contribute in
/// or the rate is negative; the derive pipeline additionally gates this
/// solver on a positive desired timeline and weighted return.
pub fn solve_required_contribution(
    current_wealth: f64,
    target_wealth: f64,
    desired_timeline: f64,
    annual_return_pct: f64,
    existing_cash_flows: &[CashFlow],
) -> Option<ContributionResult> {
    if !(desired_timeline > 0.0) || !(annual_return_pct >= 0.0) {
        return None;
    }
    let months = (desired_timeline * 12.0).round() as u32;
    if months == 0 {
        return None;
    }

    let projected_fv = future_value(
        current_wealth,
        months,
        annual_return_pct,
        existing_cash_flows,
    );

    if projected_fv >= target_wealth {
        return Some(ContributionResult {
            required_monthly_sip: 0.0,
            achievable_with_existing: true,
            projected_fv,
        });
    }

    let shortfall = target_wealth - projected_fv;
    let monthly_rate = annual_return_pct / 100.0 / 12.0;
    let required_monthly_sip = if monthly_rate > 0.0 {
        shortfall * monthly_rate / ((1.0 + monthly_rate).powi(months as i32) - 1.0)
    } else {
        shortfall / months as f64
    };

    Some(ContributionResult {
        required_monthly_sip,
        achievable_with_existing: false,
        projected_fv,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::CashFlowKind;
    use crate::projection::project_with_required_contribution;
    use approx::assert_relative_eq;

    #[test]
    fn test_achievable_from_existing_flows() {
        // 100k at 12% for 10 years more than triples; target well below FV
        let result = solve_required_contribution(100_000.0, 200_000.0, 10.0, 12.0, &[])
            .expect("solvable");

        assert!(result.achievable_with_existing);
        assert_eq!(result.required_monthly_sip, 0.0);
        assert!(result.projected_fv >= 200_000.0);
    }

    #[test]
    fn test_shortfall_matches_annuity_formula() {
        // No starting wealth, no flows: shortfall is the whole target
        let target = 1_200_000.0;
        let result = solve_required_contribution(0.0, target, 10.0, 10.0, &[])
            .expect("solvable");

        assert!(!result.achievable_with_existing);
        let i = 0.10 / 12.0;
        let expected = target * i / ((1.0 + i).powi(120) - 1.0);
        assert_relative_eq!(result.required_monthly_sip, expected, max_relative = 1e-10);
    }

    #[test]
    fn test_reinjected_sip_reaches_target() {
        // Solve, then re-project with the solved SIP injected: the trajectory
        // must land on the target within 0.5%
        let flows = vec![CashFlow::recurring(1, CashFlowKind::Sip, 5_000.0, 1, 10)];
        let result =
            solve_required_contribution(500_000.0, 10_000_000.0, 10.0, 10.0, &flows)
                .expect("solvable");
        assert!(!result.achievable_with_existing);
        assert!(result.required_monthly_sip > 0.0);

        let series = project_with_required_contribution(
            500_000.0,
            10.0,
            10.0,
            &flows,
            result.required_monthly_sip,
        )
        .expect("valid basis");

        let relative_gap = (series.final_value() - 10_000_000.0).abs() / 10_000_000.0;
        assert!(
            relative_gap < 0.005,
            "trajectory missed target by {:.4}%",
            relative_gap * 100.0
        );
    }

    #[test]
    fn test_zero_rate_uses_linear_form() {
        let result = solve_required_contribution(10_000.0, 130_000.0, 10.0, 0.0, &[])
            .expect("solvable");

        assert!(!result.achievable_with_existing);
        // 120k shortfall over 120 months
        assert_relative_eq!(result.required_monthly_sip, 1_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_invalid_inputs_yield_none() {
        assert!(solve_required_contribution(0.0, 100.0, 0.0, 10.0, &[]).is_none());
        assert!(solve_required_contribution(0.0, 100.0, -2.0, 10.0, &[]).is_none());
        assert!(solve_required_contribution(0.0, 100.0, 10.0, -1.0, &[]).is_none());
    }

    #[test]
    fn test_existing_flows_reduce_required_sip() {
        let flows = vec![CashFlow::recurring(1, CashFlowKind::Sip, 2_000.0, 1, 10)];
        let bare = solve_required_contribution(0.0, 1_000_000.0, 10.0, 10.0, &[])
            .expect("solvable");
        let helped = solve_required_contribution(0.0, 1_000_000.0, 10.0, 10.0, &flows)
            .expect("solvable");

        assert!(helped.required_monthly_sip < bare.required_monthly_sip);
        // The existing 2k SIP accumulates as an ordinary annuity, so it
        // offsets the requirement exactly
        assert_relative_eq!(
            bare.required_monthly_sip - helped.required_monthly_sip,
            2_000.0,
            max_relative = 1e-9
        );
    }
}
