//! Numerical inversions: timeline, required contribution, what-if remaps

pub mod contribution;
pub mod reverse;
pub mod timeline;

pub use contribution::{solve_required_contribution, ContributionResult};
pub use reverse::{earliest_attainable_age, required_annual_return, required_monthly_for_age};
pub use timeline::{years_to_target, TimelineResult};
