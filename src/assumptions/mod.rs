//! Planning assumptions owned by the engine

mod rates;

pub use rates::NaturalRateTable;

/// Container for all derivation assumptions
#[derive(Debug, Clone)]
pub struct Assumptions {
    pub natural_rates: NaturalRateTable,
}

impl Assumptions {
    /// Create assumptions with the baseline planning tables
    pub fn default_planning() -> Self {
        Self {
            natural_rates: NaturalRateTable::baseline(),
        }
    }
}
