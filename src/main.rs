//! B2A Engine CLI
//!
//! Command-line host for deriving a plan: loads a plan snapshot (or uses a
//! built-in demo plan), runs the derivation pipeline, and prints the
//! projection table.

use anyhow::{anyhow, Context};
use b2a_engine::plan::{load_cash_flows, load_plan};
use b2a_engine::{
    AllocationEntry, CashFlow, CashFlowKind, PlanEngine, PlanMode, PlanState, RiskProfile,
};
use clap::Parser;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "b2a_engine", about = "Derive goal-planning projections from a plan snapshot")]
struct Args {
    /// Plan snapshot JSON; omit to run the built-in demo plan
    plan: Option<PathBuf>,

    /// Replace the plan's cash flows with a schedule loaded from CSV
    #[arg(long)]
    cash_flows: Option<PathBuf>,

    /// Write the projection series to this CSV file
    #[arg(long)]
    csv_out: Option<PathBuf>,

    /// Emit the full derived plan as JSON instead of tables
    #[arg(long)]
    json: bool,
}

/// Demo plan used when no snapshot is supplied
fn demo_plan() -> PlanState {
    PlanState {
        current_wealth: 1_000_000.0,
        target_wealth: 10_000_000.0,
        current_age: 35,
        risk_profile: RiskProfile::Moderate,
        allocations: vec![
            AllocationEntry::new("Equity", 60.0, 12.0),
            AllocationEntry::new("Debt", 40.0, 7.0),
        ],
        cash_flows: vec![
            CashFlow::recurring(1, CashFlowKind::Sip, 25_000.0, 1, 10),
            CashFlow::one_time(2, CashFlowKind::Lumpsum, 500_000.0, 3),
        ],
        desired_timeline: Some(10.0),
        mode: PlanMode::Play,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut plan = match &args.plan {
        Some(path) => load_plan(path).map_err(|e| anyhow!("failed to load plan: {}", e))?,
        None => demo_plan(),
    };

    if let Some(path) = &args.cash_flows {
        plan.cash_flows =
            load_cash_flows(path).map_err(|e| anyhow!("failed to load cash flows: {}", e))?;
    }

    let engine = PlanEngine::new();
    let derived = engine.derive(&plan)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&derived)?);
        return Ok(());
    }

    println!("B2A Engine v0.1.0");
    println!("=================\n");

    println!("Plan:");
    println!("  Current Wealth: {:.2}", plan.current_wealth);
    println!("  Target Wealth:  {:.2}", plan.target_wealth);
    println!("  Current Age:    {}", plan.current_age);
    println!("  Risk Profile:   {}", plan.risk_profile.as_str());
    for entry in &plan.allocations {
        println!(
            "  Allocation:     {:>5.1}% {} @ {:.1}%",
            entry.allocation_pct, entry.asset_class, entry.return_rate
        );
    }
    for flow in &plan.cash_flows {
        match flow.end_year {
            Some(end) => println!(
                "  Cash Flow:      {} {:.2}/month, years {}-{}",
                flow.kind.as_str(),
                flow.amount,
                flow.start_year,
                end
            ),
            None => println!(
                "  Cash Flow:      {} {:.2}, year {}",
                flow.kind.as_str(),
                flow.amount,
                flow.start_year
            ),
        }
    }
    println!();

    println!("Derived:");
    match derived.natural_timeline.years {
        Some(years) => println!(
            "  Natural Timeline:     {:.1} years @ {:.1}%",
            years, derived.natural_timeline.annual_return
        ),
        None => println!(
            "  Natural Timeline:     unreachable @ {:.1}%",
            derived.natural_timeline.annual_return
        ),
    }
    println!(
        "  Weighted Return:      {:.2}%{}",
        derived.weighted_return,
        if derived.allocation_valid {
            ""
        } else {
            "  (allocation does not sum to 100%)"
        }
    );
    match derived.accelerated_timeline {
        Some(years) => println!("  Accelerated Timeline: {:.1} years", years),
        None => println!("  Accelerated Timeline: unreachable"),
    }
    println!("  Desired Timeline:     {:.1} years", derived.desired_timeline);
    match &derived.requirements {
        Some(req) if req.achievable_with_existing => println!(
            "  Requirements:         achievable from existing flows (FV {:.2})",
            req.projected_fv
        ),
        Some(req) => println!(
            "  Requirements:         {:.2}/month additional SIP (FV without it {:.2})",
            req.required_monthly_sip, req.projected_fv
        ),
        None => println!("  Requirements:         not computed"),
    }
    println!();

    if let Some(series) = &derived.projections {
        println!("Projection ({} years):", series.len().saturating_sub(1));
        println!("{:>5} {:>18}", "Year", "Value");
        println!("{}", "-".repeat(24));
        for point in &series.points {
            println!("{:>5} {:>18.2}", point.year, point.value);
        }

        if let Some(path) = &args.csv_out {
            let mut file = File::create(path)
                .with_context(|| format!("unable to create {}", path.display()))?;
            writeln!(file, "Year,Value")?;
            for point in &series.points {
                writeln!(file, "{},{:.8}", point.year, point.value)?;
            }
            println!("\nProjection written to: {}", path.display());
        }
    } else {
        println!("Projection: not computed (no valid compounding basis)");
    }

    Ok(())
}
