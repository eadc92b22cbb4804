//! Plan snapshot data structures supplied by the hosting application

use serde::{Deserialize, Serialize};

/// Risk appetite of the client, selects the baseline ("natural") annual return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskProfile {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskProfile {
    /// String form used in plan documents and table output
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "Conservative",
            RiskProfile::Moderate => "Moderate",
            RiskProfile::Aggressive => "Aggressive",
        }
    }
}

/// Whether the plan is a persisted vision or a sandbox
///
/// Host-layer concern: controls whether edits are stored, never the math.
/// Carried on the snapshot so hosts can round-trip it through the engine's
/// JSON boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanMode {
    /// Persisted, meant to be stable
    Vision,
    /// Sandbox, not persisted
    Play,
}

impl Default for PlanMode {
    fn default() -> Self {
        PlanMode::Vision
    }
}

/// Kind of scheduled cash flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CashFlowKind {
    /// Systematic Investment Plan: recurring monthly contribution
    Sip,
    /// One-time contribution at the first month of its start year
    Lumpsum,
    /// Systematic Withdrawal Plan: recurring monthly withdrawal
    Swp,
    /// One-time deduction at the first month of its start year
    Withdrawal,
}

impl CashFlowKind {
    /// Recurring kinds repeat every month within [start_year, end_year]
    pub fn is_recurring(&self) -> bool {
        matches!(self, CashFlowKind::Sip | CashFlowKind::Swp)
    }

    /// Contributions add to the balance, withdrawals subtract
    pub fn is_inflow(&self) -> bool {
        matches!(self, CashFlowKind::Sip | CashFlowKind::Lumpsum)
    }

    /// String form matching plan documents
    pub fn as_str(&self) -> &'static str {
        match self {
            CashFlowKind::Sip => "SIP",
            CashFlowKind::Lumpsum => "Lumpsum",
            CashFlowKind::Swp => "SWP",
            CashFlowKind::Withdrawal => "Withdrawal",
        }
    }
}

/// A scheduled cash flow within the plan
///
/// Years are 1-indexed from the start of the plan: year 1 covers projection
/// months 1-12. `end_year` is required for recurring kinds and ignored for
/// one-time kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlow {
    pub id: u32,
    pub kind: CashFlowKind,
    /// Monthly amount for recurring kinds, full amount for one-time kinds
    pub amount: f64,
    pub start_year: u32,
    #[serde(default)]
    pub end_year: Option<u32>,
}

impl CashFlow {
    /// Create a recurring flow (SIP or SWP) over an inclusive year window
    pub fn recurring(id: u32, kind: CashFlowKind, amount: f64, start_year: u32, end_year: u32) -> Self {
        Self {
            id,
            kind,
            amount,
            start_year,
            end_year: Some(end_year),
        }
    }

    /// Create a one-time flow (Lumpsum or Withdrawal) at a given year
    pub fn one_time(id: u32, kind: CashFlowKind, amount: f64, start_year: u32) -> Self {
        Self {
            id,
            kind,
            amount,
            start_year,
            end_year: None,
        }
    }

    /// Signed amount this flow contributes in a given projection month
    ///
    /// `year` is 1-indexed, `month_in_year` runs 1-12. One-time flows land in
    /// the first month of their start year; recurring flows apply in every
    /// month of their inclusive year window.
    pub fn monthly_amount(&self, year: u32, month_in_year: u32) -> f64 {
        let applies = if self.kind.is_recurring() {
            let end = self.end_year.unwrap_or(self.start_year);
            year >= self.start_year && year <= end
        } else {
            year == self.start_year && month_in_year == 1
        };

        if !applies {
            return 0.0;
        }
        if self.kind.is_inflow() {
            self.amount
        } else {
            -self.amount
        }
    }
}

/// The full plan snapshot the engine computes from
///
/// Supplied by an external store on every edit; the engine holds no state
/// between calls and never mutates the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanState {
    /// Wealth already accumulated ("Before")
    pub current_wealth: f64,

    /// Wealth the client is planning toward ("After")
    pub target_wealth: f64,

    /// Client age in whole years
    pub current_age: u32,

    /// Risk appetite selecting the baseline annual return
    pub risk_profile: RiskProfile,

    /// Ordered asset allocation; percentages SHOULD sum to 100
    pub allocations: Vec<AllocationEntry>,

    /// Scheduled contributions and withdrawals
    #[serde(default)]
    pub cash_flows: Vec<CashFlow>,

    /// User-set timeline in years; None means "use the accelerated timeline"
    #[serde(default)]
    pub desired_timeline: Option<f64>,

    /// Vision (persisted) or Play (sandbox); never consulted by the math
    #[serde(default)]
    pub mode: PlanMode,
}

/// One asset class within the plan's allocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationEntry {
    /// Display name of the asset class
    pub asset_class: String,

    /// Share of the portfolio in percent (0-100)
    pub allocation_pct: f64,

    /// Expected annual return of the asset class in percent
    pub return_rate: f64,

    /// Chart color, passed through untouched for presentation
    #[serde(default)]
    pub color: String,
}

impl AllocationEntry {
    pub fn new(asset_class: &str, allocation_pct: f64, return_rate: f64) -> Self {
        Self {
            asset_class: asset_class.to_string(),
            allocation_pct,
            return_rate,
            color: String::new(),
        }
    }
}
