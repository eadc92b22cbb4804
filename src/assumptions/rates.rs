//! Baseline annual return lookup by risk profile

use crate::plan::RiskProfile;

/// Fixed risk-profile to baseline annual return mapping
///
/// The "natural" timeline compounds at this rate alone, before any asset-mix
/// acceleration. The table is owned by the engine and not externally
/// configurable; a revision ships as a new constructor so the values stay
/// testable in isolation.
#[derive(Debug, Clone)]
pub struct NaturalRateTable {
    conservative: f64,
    moderate: f64,
    aggressive: f64,
}

impl NaturalRateTable {
    /// Baseline table used by the B2A planner (annual %, pre-inflation)
    pub fn baseline() -> Self {
        Self {
            conservative: 8.0,
            moderate: 12.0,
            aggressive: 15.0,
        }
    }

    /// Annual return percentage for a risk profile
    pub fn natural_rate(&self, profile: RiskProfile) -> f64 {
        match profile {
            RiskProfile::Conservative => self.conservative,
            RiskProfile::Moderate => self.moderate,
            RiskProfile::Aggressive => self.aggressive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_rates() {
        let table = NaturalRateTable::baseline();

        assert_eq!(table.natural_rate(RiskProfile::Conservative), 8.0);
        assert_eq!(table.natural_rate(RiskProfile::Moderate), 12.0);
        assert_eq!(table.natural_rate(RiskProfile::Aggressive), 15.0);
    }

    #[test]
    fn test_rates_increase_with_risk() {
        let table = NaturalRateTable::baseline();

        assert!(
            table.natural_rate(RiskProfile::Conservative)
                < table.natural_rate(RiskProfile::Moderate)
        );
        assert!(
            table.natural_rate(RiskProfile::Moderate)
                < table.natural_rate(RiskProfile::Aggressive)
        );
    }
}
