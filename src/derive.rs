//! Full plan derivation pipeline
//!
//! One entry point turns a `PlanState` snapshot into a `DerivedPlan`. The
//! recompute is total and atomic: every derived field is rebuilt from the
//! snapshot on every call, so the weighted return used by the accelerated
//! timeline is always the one just computed from the current allocations.

use crate::allocation::{is_allocation_valid, weighted_return};
use crate::assumptions::Assumptions;
use crate::error::PlanError;
use crate::plan::{validate, PlanState};
use crate::projection::{project, project_with_required_contribution, ProjectionSeries};
use crate::solvers::{
    solve_required_contribution, years_to_target, ContributionResult, TimelineResult,
};
use serde::{Deserialize, Serialize};

/// Everything the planner derives from one plan snapshot
///
/// Recomputed wholesale, never partially mutated; owned solely by the
/// caller once returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivedPlan {
    /// Timeline at the risk profile's baseline rate, no extra cash flows
    pub natural_timeline: TimelineResult,

    /// Blended annual return of the asset allocation
    pub weighted_return: f64,

    /// Advisory flag: allocation percentages sum to 100 (within tolerance)
    pub allocation_valid: bool,

    /// Timeline at the weighted return; `None` when the weighted return is
    /// non-positive or cannot reach the target
    pub accelerated_timeline: Option<f64>,

    /// User-set timeline taken verbatim, else the accelerated timeline,
    /// else 0 when neither is available
    pub desired_timeline: f64,

    /// Required-contribution solve; `None` unless the desired timeline and
    /// weighted return are both positive
    pub requirements: Option<ContributionResult>,

    /// Year-by-year trajectory over the desired timeline; includes the
    /// required monthly SIP whenever the goal is not achievable from the
    /// existing flows alone
    pub projections: Option<ProjectionSeries>,
}

/// Derivation engine holding the planning assumptions
pub struct PlanEngine {
    assumptions: Assumptions,
}

impl PlanEngine {
    /// Create an engine with the baseline planning assumptions
    pub fn new() -> Self {
        Self {
            assumptions: Assumptions::default_planning(),
        }
    }

    /// Create an engine with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    /// Get reference to the assumptions for inspection
    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Derive the full plan output from one snapshot
    ///
    /// Rejects out-of-range inputs before computing anything; all other
    /// conditions surface as sentinel fields on the result.
    pub fn derive(&self, plan: &PlanState) -> Result<DerivedPlan, PlanError> {
        validate(plan)?;

        let natural_rate = self.assumptions.natural_rates.natural_rate(plan.risk_profile);
        let natural_timeline =
            TimelineResult::compute(plan.current_wealth, plan.target_wealth, natural_rate);

        let blended = weighted_return(&plan.allocations);
        let allocation_valid = is_allocation_valid(&plan.allocations);

        let accelerated_timeline = if blended > 0.0 {
            years_to_target(plan.current_wealth, plan.target_wealth, blended)
        } else {
            None
        };

        // User-set value wins verbatim; otherwise fall back to the
        // accelerated timeline, or 0 when nothing is computable
        let desired_timeline = plan
            .desired_timeline
            .or(accelerated_timeline)
            .unwrap_or(0.0);

        let requirements = if desired_timeline > 0.0 && blended > 0.0 {
            solve_required_contribution(
                plan.current_wealth,
                plan.target_wealth,
                desired_timeline,
                blended,
                &plan.cash_flows,
            )
        } else {
            None
        };

        let projections = match &requirements {
            Some(req) if !req.achievable_with_existing => project_with_required_contribution(
                plan.current_wealth,
                desired_timeline,
                blended,
                &plan.cash_flows,
                req.required_monthly_sip,
            ),
            _ => project(plan.current_wealth, desired_timeline, blended, &plan.cash_flows),
        };

        log::debug!(
            "derived plan: natural {:?}y, weighted {:.2}%, accelerated {:?}y, desired {}y",
            natural_timeline.years,
            blended,
            accelerated_timeline,
            desired_timeline
        );

        Ok(DerivedPlan {
            natural_timeline,
            weighted_return: blended,
            allocation_valid,
            accelerated_timeline,
            desired_timeline,
            requirements,
            projections,
        })
    }
}

impl Default for PlanEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive with the baseline assumptions
pub fn derive_plan(plan: &PlanState) -> Result<DerivedPlan, PlanError> {
    PlanEngine::new().derive(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{AllocationEntry, CashFlow, CashFlowKind, PlanMode, RiskProfile};
    use approx::assert_relative_eq;

    fn test_plan() -> PlanState {
        PlanState {
            current_wealth: 1_000_000.0,
            target_wealth: 10_000_000.0,
            current_age: 35,
            risk_profile: RiskProfile::Moderate,
            allocations: vec![
                AllocationEntry::new("Equity", 60.0, 12.0),
                AllocationEntry::new("Debt", 40.0, 7.0),
            ],
            cash_flows: Vec::new(),
            desired_timeline: None,
            mode: PlanMode::Vision,
        }
    }

    #[test]
    fn test_full_derivation() {
        let derived = derive_plan(&test_plan()).expect("valid plan");

        // Natural: 10x at the Moderate baseline of 12% -> 20.3 years
        assert_eq!(derived.natural_timeline.annual_return, 12.0);
        assert_relative_eq!(
            derived.natural_timeline.years.expect("reachable"),
            20.3,
            epsilon = 1e-12
        );

        // Weighted: 0.6*12 + 0.4*7 = 10.0
        assert_relative_eq!(derived.weighted_return, 10.0, epsilon = 1e-12);
        assert!(derived.allocation_valid);

        // Accelerated: 10x at 10% -> 24.2 years, and it becomes the desired
        // timeline since the user set none
        let accelerated = derived.accelerated_timeline.expect("reachable");
        assert_relative_eq!(accelerated, 24.2, epsilon = 1e-12);
        assert_relative_eq!(derived.desired_timeline, accelerated, epsilon = 1e-12);

        // Monthly compounding at 10% over 24.2 years more than 10x-es the
        // starting wealth, so the goal is achievable without extra SIP
        let req = derived.requirements.expect("solved");
        assert!(req.achievable_with_existing);
        assert_eq!(req.required_monthly_sip, 0.0);

        let projections = derived.projections.expect("projected");
        assert_eq!(projections.points[0].value, 1_000_000.0);
        assert!(projections.final_value() >= 10_000_000.0);
    }

    #[test]
    fn test_user_desired_timeline_taken_verbatim() {
        let mut plan = test_plan();
        plan.desired_timeline = Some(10.0);

        let derived = derive_plan(&plan).expect("valid plan");
        assert_eq!(derived.desired_timeline, 10.0);

        // 10x in 10 years at 10% is not achievable from wealth alone, so the
        // requirements carry a positive SIP and the displayed trajectory is
        // the "what it would take" scenario that reaches the target
        let req = derived.requirements.expect("solved");
        assert!(!req.achievable_with_existing);
        assert!(req.required_monthly_sip > 0.0);

        let projections = derived.projections.expect("projected");
        let gap = (projections.final_value() - 10_000_000.0).abs() / 10_000_000.0;
        assert!(gap < 0.005, "trajectory missed target by {:.4}%", gap * 100.0);
    }

    #[test]
    fn test_goal_already_met() {
        let mut plan = test_plan();
        plan.current_wealth = 20_000_000.0;

        let derived = derive_plan(&plan).expect("valid plan");
        assert_eq!(derived.natural_timeline.years, Some(0.0));
        assert_eq!(derived.accelerated_timeline, Some(0.0));
        assert_eq!(derived.desired_timeline, 0.0);
        assert!(derived.requirements.is_none());
        assert!(derived.projections.is_none());
    }

    #[test]
    fn test_zero_weighted_return_disables_downstream() {
        let mut plan = test_plan();
        plan.allocations = Vec::new();

        let derived = derive_plan(&plan).expect("valid plan");
        assert_eq!(derived.weighted_return, 0.0);
        assert!(!derived.allocation_valid);
        assert!(derived.accelerated_timeline.is_none());
        assert_eq!(derived.desired_timeline, 0.0);
        assert!(derived.requirements.is_none());
        assert!(derived.projections.is_none());

        // The natural timeline is independent of the allocation
        assert!(derived.natural_timeline.years.is_some());
    }

    #[test]
    fn test_existing_flows_feed_the_solver() {
        let mut plan = test_plan();
        plan.desired_timeline = Some(10.0);
        plan.cash_flows = vec![CashFlow::recurring(1, CashFlowKind::Sip, 20_000.0, 1, 10)];

        let with_flows = derive_plan(&plan).expect("valid plan");
        plan.cash_flows.clear();
        let without = derive_plan(&plan).expect("valid plan");

        let sip_with = with_flows.requirements.expect("solved").required_monthly_sip;
        let sip_without = without.requirements.expect("solved").required_monthly_sip;
        assert!(sip_with < sip_without);
    }

    #[test]
    fn test_invalid_plan_is_rejected() {
        let mut plan = test_plan();
        plan.current_wealth = -5.0;
        assert!(derive_plan(&plan).is_err());
    }

    #[test]
    fn test_custom_assumptions_drive_natural_timeline() {
        let engine = PlanEngine::with_assumptions(Assumptions::default_planning());
        assert_eq!(
            engine
                .assumptions()
                .natural_rates
                .natural_rate(RiskProfile::Conservative),
            8.0
        );

        let mut plan = test_plan();
        plan.risk_profile = RiskProfile::Conservative;
        let derived = engine.derive(&plan).expect("valid plan");
        assert_eq!(derived.natural_timeline.annual_return, 8.0);
    }

    #[test]
    fn test_recompute_is_deterministic() {
        let plan = test_plan();
        let engine = PlanEngine::new();

        let first = engine.derive(&plan).expect("valid plan");
        let second = engine.derive(&plan).expect("valid plan");

        assert_eq!(first.weighted_return, second.weighted_return);
        assert_eq!(first.desired_timeline, second.desired_timeline);
        assert_eq!(
            first.projections.expect("projected").final_value(),
            second.projections.expect("projected").final_value()
        );
    }
}
