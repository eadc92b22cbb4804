//! Boundary validation for plan snapshots

use super::PlanState;
use crate::error::PlanError;

/// Reject out-of-range inputs before any computation.
///
/// Returns the first violation found. Allocation percentages not summing to
/// 100 are deliberately NOT an error here: that is an advisory data-quality
/// signal reported on `DerivedPlan`, and the engine still computes a weighted
/// return from whatever entries are present.
pub fn validate(plan: &PlanState) -> Result<(), PlanError> {
    if !plan.current_wealth.is_finite() || plan.current_wealth < 0.0 {
        return Err(PlanError::InvalidCurrentWealth(plan.current_wealth));
    }
    if !plan.target_wealth.is_finite() || plan.target_wealth < 0.0 {
        return Err(PlanError::InvalidTargetWealth(plan.target_wealth));
    }
    if plan.current_age == 0 || plan.current_age > 120 {
        return Err(PlanError::InvalidCurrentAge(plan.current_age));
    }

    for entry in &plan.allocations {
        if !entry.allocation_pct.is_finite()
            || entry.allocation_pct < 0.0
            || entry.allocation_pct > 100.0
        {
            return Err(PlanError::InvalidAllocationPct {
                asset_class: entry.asset_class.clone(),
                pct: entry.allocation_pct,
            });
        }
        if !entry.return_rate.is_finite() || entry.return_rate < 0.0 {
            return Err(PlanError::InvalidReturnRate {
                asset_class: entry.asset_class.clone(),
                rate: entry.return_rate,
            });
        }
    }

    for flow in &plan.cash_flows {
        if !flow.amount.is_finite() || flow.amount <= 0.0 {
            return Err(PlanError::InvalidCashFlowAmount {
                id: flow.id,
                amount: flow.amount,
            });
        }
        if flow.start_year < 1 {
            return Err(PlanError::InvalidStartYear {
                id: flow.id,
                start_year: flow.start_year,
            });
        }
        if flow.kind.is_recurring() {
            match flow.end_year {
                None => return Err(PlanError::MissingEndYear { id: flow.id }),
                Some(end) if end < flow.start_year => {
                    return Err(PlanError::EndBeforeStart {
                        id: flow.id,
                        start_year: flow.start_year,
                        end_year: end,
                    });
                }
                Some(_) => {}
            }
        }
    }

    if let Some(desired) = plan.desired_timeline {
        if !desired.is_finite() || desired <= 0.0 || desired > 100.0 {
            return Err(PlanError::InvalidDesiredTimeline(desired));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{AllocationEntry, CashFlow, CashFlowKind, PlanMode, PlanState, RiskProfile};

    fn valid_plan() -> PlanState {
        PlanState {
            current_wealth: 1_000_000.0,
            target_wealth: 10_000_000.0,
            current_age: 35,
            risk_profile: RiskProfile::Moderate,
            allocations: vec![
                AllocationEntry::new("Equity", 60.0, 12.0),
                AllocationEntry::new("Debt", 40.0, 7.0),
            ],
            cash_flows: vec![CashFlow::recurring(1, CashFlowKind::Sip, 10_000.0, 1, 10)],
            desired_timeline: None,
            mode: PlanMode::Vision,
        }
    }

    #[test]
    fn test_valid_plan_passes() {
        assert!(validate(&valid_plan()).is_ok());
    }

    #[test]
    fn test_negative_wealth_rejected() {
        let mut plan = valid_plan();
        plan.current_wealth = -1.0;
        assert_eq!(
            validate(&plan),
            Err(PlanError::InvalidCurrentWealth(-1.0))
        );

        let mut plan = valid_plan();
        plan.target_wealth = f64::NAN;
        assert!(matches!(
            validate(&plan),
            Err(PlanError::InvalidTargetWealth(_))
        ));
    }

    #[test]
    fn test_age_bounds() {
        let mut plan = valid_plan();
        plan.current_age = 0;
        assert_eq!(validate(&plan), Err(PlanError::InvalidCurrentAge(0)));

        plan.current_age = 121;
        assert_eq!(validate(&plan), Err(PlanError::InvalidCurrentAge(121)));
    }

    #[test]
    fn test_allocation_percentage_bounds() {
        let mut plan = valid_plan();
        plan.allocations[0].allocation_pct = 120.0;
        assert!(matches!(
            validate(&plan),
            Err(PlanError::InvalidAllocationPct { .. })
        ));

        let mut plan = valid_plan();
        plan.allocations[1].return_rate = -2.0;
        assert!(matches!(
            validate(&plan),
            Err(PlanError::InvalidReturnRate { .. })
        ));
    }

    #[test]
    fn test_allocation_sum_is_not_an_error() {
        // Sum != 100 is advisory, not a rejection
        let mut plan = valid_plan();
        plan.allocations[0].allocation_pct = 30.0;
        assert!(validate(&plan).is_ok());
    }

    #[test]
    fn test_cash_flow_window_rejected() {
        let mut plan = valid_plan();
        plan.cash_flows[0].end_year = Some(0);
        // end_year 0 < start_year 1
        assert!(matches!(
            validate(&plan),
            Err(PlanError::EndBeforeStart { .. })
        ));

        let mut plan = valid_plan();
        plan.cash_flows[0].end_year = None;
        assert_eq!(validate(&plan), Err(PlanError::MissingEndYear { id: 1 }));

        let mut plan = valid_plan();
        plan.cash_flows[0].start_year = 0;
        assert!(matches!(
            validate(&plan),
            Err(PlanError::InvalidStartYear { .. })
        ));

        let mut plan = valid_plan();
        plan.cash_flows[0].amount = 0.0;
        assert!(matches!(
            validate(&plan),
            Err(PlanError::InvalidCashFlowAmount { .. })
        ));
    }

    #[test]
    fn test_one_time_flow_needs_no_end_year() {
        let mut plan = valid_plan();
        plan.cash_flows = vec![CashFlow::one_time(7, CashFlowKind::Lumpsum, 50_000.0, 3)];
        assert!(validate(&plan).is_ok());
    }

    #[test]
    fn test_desired_timeline_must_be_positive() {
        let mut plan = valid_plan();
        plan.desired_timeline = Some(0.0);
        assert_eq!(
            validate(&plan),
            Err(PlanError::InvalidDesiredTimeline(0.0))
        );

        plan.desired_timeline = Some(150.0);
        assert_eq!(
            validate(&plan),
            Err(PlanError::InvalidDesiredTimeline(150.0))
        );
    }
}
