//! Cash-flow-aware projection of the plan balance

mod engine;
mod series;
mod state;

pub use engine::{future_value, project, project_with_required_contribution};
pub use series::{ProjectionPoint, ProjectionSeries};
pub use state::ProjectionState;
