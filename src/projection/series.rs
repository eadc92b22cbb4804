//! Projection output structures

use serde::{Deserialize, Serialize};

/// Balance sample at the end of one plan year
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Plan year (0 = start of plan)
    pub year: u32,

    /// Balance at the end of that year (starting value for year 0)
    pub value: f64,
}

/// Year-by-year value trajectory produced by the projector
///
/// One point per year from 0 to the projection horizon inclusive. Values are
/// raw numerics; formatting and localization belong to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSeries {
    pub points: Vec<ProjectionPoint>,
}

impl ProjectionSeries {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn with_capacity(years: usize) -> Self {
        Self {
            points: Vec::with_capacity(years + 1),
        }
    }

    /// Append a yearly sample
    pub fn add_point(&mut self, year: u32, value: f64) {
        self.points.push(ProjectionPoint { year, value });
    }

    /// Balance at the end of the projection horizon
    pub fn final_value(&self) -> f64 {
        self.points.last().map(|p| p.value).unwrap_or(0.0)
    }

    /// Number of yearly samples (horizon + 1 when non-empty)
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for ProjectionSeries {
    fn default() -> Self {
        Self::new()
    }
}
