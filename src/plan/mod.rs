//! Plan snapshot data structures and host-boundary loading

mod data;
pub mod loader;
mod validate;

pub use data::{AllocationEntry, CashFlow, CashFlowKind, PlanMode, PlanState, RiskProfile};
pub use loader::{load_cash_flows, load_cash_flows_from_reader, load_plan, load_plan_from_reader};
pub use validate::validate;
