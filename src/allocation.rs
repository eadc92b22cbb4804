//! Weighted-return aggregation across an asset allocation

use crate::plan::AllocationEntry;

/// Tolerance for the advisory "percentages sum to 100" check
pub const ALLOCATION_SUM_TOLERANCE: f64 = 0.01;

/// Blended annual return implied by an allocation's percentage/return pairs
///
/// Computes sum(pct_i / 100 * rate_i) over all entries with no normalization:
/// when the percentages do not sum to 100 the number is still produced, and
/// the caller is expected to check `is_allocation_valid` separately before
/// treating it as meaningful. An empty allocation yields 0.
pub fn weighted_return(allocations: &[AllocationEntry]) -> f64 {
    allocations
        .iter()
        .map(|entry| entry.allocation_pct / 100.0 * entry.return_rate)
        .sum()
}

/// Sum of allocation percentages across all entries
pub fn allocation_total(allocations: &[AllocationEntry]) -> f64 {
    allocations.iter().map(|entry| entry.allocation_pct).sum()
}

/// Advisory data-quality flag: do the percentages sum to 100 (within tolerance)?
pub fn is_allocation_valid(allocations: &[AllocationEntry]) -> bool {
    (allocation_total(allocations) - 100.0).abs() <= ALLOCATION_SUM_TOLERANCE
}
