//! What-if grid over a plan
//!
//! Sweeps hypothetical extra monthly contributions and earlier retirement
//! ages through the reverse calculator in parallel. Supports JSON output for
//! host integration via --json flag; reads the plan path from the first
//! non-flag argument, otherwise uses a built-in demo plan.

use b2a_engine::plan::load_plan;
use b2a_engine::solvers::{
    earliest_attainable_age, required_annual_return, required_monthly_for_age,
};
use b2a_engine::{
    AllocationEntry, CashFlow, CashFlowKind, PlanEngine, PlanMode, PlanState, RiskProfile,
};
use rayon::prelude::*;
use serde::Serialize;
use std::env;
use std::time::Instant;

/// One row of the extra-contribution sweep
#[derive(Debug, Clone, Serialize)]
struct ContributionScenario {
    extra_monthly: f64,
    attainable_age: Option<u32>,
}

/// One row of the earlier-retirement sweep
#[derive(Debug, Clone, Serialize)]
struct RetireAgeScenario {
    retire_age: u32,
    required_monthly_sip: Option<f64>,
    achievable_with_existing: bool,
}

#[derive(Serialize)]
struct WhatIfResponse {
    weighted_return_pct: f64,
    natural_age: Option<u32>,
    required_return_for_desired_pct: Option<f64>,
    contribution_scenarios: Vec<ContributionScenario>,
    retire_age_scenarios: Vec<RetireAgeScenario>,
    execution_time_ms: u64,
}

fn demo_plan() -> PlanState {
    PlanState {
        current_wealth: 2_000_000.0,
        target_wealth: 30_000_000.0,
        current_age: 32,
        risk_profile: RiskProfile::Aggressive,
        allocations: vec![
            AllocationEntry::new("Equity", 70.0, 14.0),
            AllocationEntry::new("Debt", 20.0, 7.5),
            AllocationEntry::new("Gold", 10.0, 6.0),
        ],
        cash_flows: vec![CashFlow::recurring(1, CashFlowKind::Sip, 40_000.0, 1, 15)],
        desired_timeline: Some(15.0),
        mode: PlanMode::Play,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let json_output = env::args().any(|arg| arg == "--json");
    let plan_path = env::args().skip(1).find(|arg| !arg.starts_with("--"));

    let plan = match plan_path {
        Some(path) => load_plan(&path)
            .map_err(|e| anyhow::anyhow!("failed to load plan {}: {}", path, e))?,
        None => demo_plan(),
    };

    let start = Instant::now();

    let engine = PlanEngine::new();
    let derived = engine.derive(&plan)?;
    let blended = derived.weighted_return;

    // Natural retirement age: current age plus the accelerated timeline
    let natural_age = derived
        .accelerated_timeline
        .map(|years| plan.current_age + years.ceil() as u32);

    let required_return_for_desired = plan.desired_timeline.and_then(|years| {
        required_annual_return(plan.current_wealth, plan.target_wealth, years)
    });

    // Sweep extra monthly contributions: how much sooner does each get there
    let extra_candidates: Vec<f64> = (0..=10).map(|i| i as f64 * 10_000.0).collect();
    let contribution_scenarios: Vec<ContributionScenario> = extra_candidates
        .par_iter()
        .map(|&extra_monthly| ContributionScenario {
            extra_monthly,
            attainable_age: earliest_attainable_age(
                plan.current_wealth,
                plan.target_wealth,
                plan.current_age,
                blended,
                &plan.cash_flows,
                extra_monthly,
            ),
        })
        .collect();

    // Sweep earlier retirement ages up to the natural age: the monthly
    // investment each would take
    let age_candidates: Vec<u32> = match natural_age {
        Some(natural) => (plan.current_age + 1..=natural).collect(),
        None => Vec::new(),
    };
    let retire_age_scenarios: Vec<RetireAgeScenario> = age_candidates
        .par_iter()
        .map(|&retire_age| {
            let solved = required_monthly_for_age(
                plan.current_wealth,
                plan.target_wealth,
                plan.current_age,
                retire_age,
                blended,
                &plan.cash_flows,
            );
            RetireAgeScenario {
                retire_age,
                required_monthly_sip: solved.as_ref().map(|r| r.required_monthly_sip),
                achievable_with_existing: solved
                    .as_ref()
                    .map(|r| r.achievable_with_existing)
                    .unwrap_or(false),
            }
        })
        .collect();

    let elapsed = start.elapsed();

    if json_output {
        let response = WhatIfResponse {
            weighted_return_pct: blended,
            natural_age,
            required_return_for_desired_pct: required_return_for_desired,
            contribution_scenarios,
            retire_age_scenarios,
            execution_time_ms: elapsed.as_millis() as u64,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("What-if grid");
    println!("============\n");
    println!("Weighted return: {:.2}%", blended);
    match natural_age {
        Some(age) => println!("Natural retirement age: {}", age),
        None => println!("Natural retirement age: unreachable"),
    }
    if let Some(rate) = required_return_for_desired {
        println!(
            "Required return for desired timeline: {:.2}%",
            rate
        );
    }

    println!("\nExtra monthly contribution -> earliest attainable age:");
    println!("{:>14} {:>10}", "Extra/Month", "Age");
    println!("{}", "-".repeat(25));
    for scenario in &contribution_scenarios {
        match scenario.attainable_age {
            Some(age) => println!("{:>14.2} {:>10}", scenario.extra_monthly, age),
            None => println!("{:>14.2} {:>10}", scenario.extra_monthly, "never"),
        }
    }

    if !retire_age_scenarios.is_empty() {
        println!("\nRetire at age -> required monthly SIP:");
        println!("{:>5} {:>16}", "Age", "SIP/Month");
        println!("{}", "-".repeat(22));
        for scenario in &retire_age_scenarios {
            match scenario.required_monthly_sip {
                Some(_) if scenario.achievable_with_existing => {
                    println!("{:>5} {:>16}", scenario.retire_age, "achievable")
                }
                Some(sip) => println!("{:>5} {:>16.2}", scenario.retire_age, sip),
                None => println!("{:>5} {:>16}", scenario.retire_age, "-"),
            }
        }
    }

    println!("\nCompleted in {:?}", elapsed);

    Ok(())
}
