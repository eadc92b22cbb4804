//! Load plan snapshots from JSON and cash-flow schedules from CSV
//!
//! Host-layer only: the engine itself performs no I/O. These mirror the
//! formats the portal exports for offline runs.

use super::{CashFlow, CashFlowKind, PlanState};
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Load a plan snapshot from a JSON document
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<PlanState, Box<dyn Error>> {
    let file = std::fs::File::open(path.as_ref())?;
    let plan: PlanState = serde_json::from_reader(file)?;
    log::debug!(
        "loaded plan: wealth {:.0} -> {:.0}, {} allocations, {} cash flows",
        plan.current_wealth,
        plan.target_wealth,
        plan.allocations.len(),
        plan.cash_flows.len()
    );
    Ok(plan)
}

/// Parse a plan snapshot from any reader (e.g., string buffer, pipe)
pub fn load_plan_from_reader<R: std::io::Read>(reader: R) -> Result<PlanState, Box<dyn Error>> {
    let plan: PlanState = serde_json::from_reader(reader)?;
    Ok(plan)
}

/// Raw CSV row matching the exported cash-flow schedule columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Id")]
    id: u32,
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Amount")]
    amount: f64,
    #[serde(rename = "StartYear")]
    start_year: u32,
    #[serde(rename = "EndYear")]
    end_year: Option<u32>,
}

impl CsvRow {
    fn to_cash_flow(self) -> Result<CashFlow, Box<dyn Error>> {
        let kind = match self.kind.as_str() {
            "SIP" => CashFlowKind::Sip,
            "Lumpsum" => CashFlowKind::Lumpsum,
            "SWP" => CashFlowKind::Swp,
            "Withdrawal" => CashFlowKind::Withdrawal,
            other => return Err(format!("Unknown cash flow Type: {}", other).into()),
        };

        Ok(CashFlow {
            id: self.id,
            kind,
            amount: self.amount,
            start_year: self.start_year,
            end_year: self.end_year,
        })
    }
}

/// Load a cash-flow schedule from a CSV file
pub fn load_cash_flows<P: AsRef<Path>>(path: P) -> Result<Vec<CashFlow>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut flows = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        flows.push(row.to_cash_flow()?);
    }

    log::debug!("loaded {} cash flows from CSV", flows.len());
    Ok(flows)
}

/// Load a cash-flow schedule from any reader (e.g., string buffer)
pub fn load_cash_flows_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<CashFlow>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut flows = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        flows.push(row.to_cash_flow()?);
    }

    Ok(flows)
}
