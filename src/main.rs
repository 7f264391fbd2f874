//! Lifesim CLI
//!
//! Runs two demo scenarios side by side and prints the yearly trajectories

use lifesim::{
    Career, Investment, Lifestyle, Location, Scenario, ScenarioResult, SimulationRunner,
};

fn main() {
    env_logger::init();

    println!("Lifesim v0.1.0");
    println!("==============\n");

    let founder = Scenario::new(
        "Startup founder abroad",
        Career::Startup,
        Location::Overseas,
        Lifestyle::Minimal,
        Investment::Aggressive,
    );
    let steady = Scenario::new(
        "Corporate in the capital",
        Career::LargeCorp,
        Location::Capital,
        Lifestyle::Balanced,
        Investment::Moderate,
    );

    let runner = SimulationRunner::new();
    let comparison = runner.run_pair(&founder, &steady, &mut rand::thread_rng());

    print_result(&comparison.first);
    print_result(&comparison.second);

    println!("Comparison:");
    println!("  Final asset gap: {:>15}", comparison.asset_gap());
    println!("  Final health gap: {:>14}", comparison.health_gap());
    println!("  Final happiness gap: {:>11}", comparison.happiness_gap());
    match comparison.richer_scenario() {
        Some(name) => println!("  Higher final assets: {}", name),
        None => println!("  Higher final assets: exact tie"),
    }
}

fn print_result(result: &ScenarioResult) {
    println!("Scenario: {}", result.scenario.name);
    println!(
        "  Choices: {:?} / {:?} / {:?} / {:?}",
        result.scenario.career,
        result.scenario.location,
        result.scenario.lifestyle,
        result.scenario.investment,
    );

    println!("{:>6} {:>16} {:>8} {:>10}", "Year", "Assets", "Health", "Happiness");
    println!("{}", "-".repeat(44));
    for i in 0..result.years() {
        println!(
            "{:>6} {:>16} {:>8} {:>10}",
            result.assets[i].year,
            result.assets[i].value,
            result.health[i].value,
            result.happiness[i].value,
        );
    }

    println!(
        "  Finals: assets={} health={} happiness={}",
        result.final_assets, result.final_health, result.final_happiness
    );

    if result.risks.is_empty() {
        println!("  Risks: none flagged");
    } else {
        println!("  Risks:");
        for risk in &result.risks {
            println!(
                "    [{:?}/{:?}] {}",
                risk.risk_type, risk.level, risk.description
            );
        }
    }
    println!();
}
