//! Typed errors for plan validation and derivation

use thiserror::Error;

/// Errors raised when a plan snapshot is rejected at the engine boundary.
///
/// Out-of-range inputs refuse to compute rather than silently clamp: a
/// corrected-but-wrong number is worse than no number in a planning tool.
/// Conditions with a meaningful "no solution" reading (unreachable goal,
/// not-computed downstream fields) are `None` sentinels on `DerivedPlan`,
/// not errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("current wealth must be a finite non-negative amount, got {0}")]
    InvalidCurrentWealth(f64),

    #[error("target wealth must be a finite non-negative amount, got {0}")]
    InvalidTargetWealth(f64),

    #[error("current age must be between 1 and 120, got {0}")]
    InvalidCurrentAge(u32),

    #[error("allocation '{asset_class}': percentage must be within 0-100, got {pct}")]
    InvalidAllocationPct { asset_class: String, pct: f64 },

    #[error("allocation '{asset_class}': return rate must be a finite non-negative percentage, got {rate}")]
    InvalidReturnRate { asset_class: String, rate: f64 },

    #[error("cash flow {id}: amount must be a finite positive amount, got {amount}")]
    InvalidCashFlowAmount { id: u32, amount: f64 },

    #[error("cash flow {id}: start year must be >= 1, got {start_year}")]
    InvalidStartYear { id: u32, start_year: u32 },

    #[error("cash flow {id}: recurring flows require an end year")]
    MissingEndYear { id: u32 },

    #[error("cash flow {id}: end year {end_year} precedes start year {start_year}")]
    EndBeforeStart {
        id: u32,
        start_year: u32,
        end_year: u32,
    },

    #[error("desired timeline must be between 0 and 100 years, got {0}")]
    InvalidDesiredTimeline(f64),
}
