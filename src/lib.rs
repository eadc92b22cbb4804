//! B2A Engine - Goal-planning calculation engine for wealth projections
//!
//! This library provides:
//! - Weighted-return aggregation across an asset allocation
//! - Natural and accelerated timeline solving (future-value inversion)
//! - Cash-flow-aware monthly compounding projections
//! - Required-contribution solving (reverse annuity)
//! - Reverse/what-if calculations (earliest age, required investment, required return)
//!
//! The engine is a pure, synchronous computation over a plan snapshot: it
//! consumes a `PlanState` and produces a `DerivedPlan`, with no I/O and no
//! state held between calls.

pub mod allocation;
pub mod assumptions;
pub mod derive;
pub mod error;
pub mod plan;
pub mod projection;
pub mod solvers;

// Re-export commonly used types
pub use assumptions::{Assumptions, NaturalRateTable};
pub use derive::{derive_plan, DerivedPlan, PlanEngine};
pub use error::PlanError;
pub use plan::{AllocationEntry, CashFlow, CashFlowKind, PlanMode, PlanState, RiskProfile};
pub use projection::{ProjectionPoint, ProjectionSeries};
pub use solvers::{ContributionResult, TimelineResult};
