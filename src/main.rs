//! Policy Pulse CLI
//!
//! Thin presentation shell over the simulation engine: flags become a
//! `PolicyShock` and `BaselineContext`, the engine runs once, and the
//! returned value objects are rendered as tables and text. Supports JSON
//! output for downstream tooling via --json and CSV export via --csv.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use policy_pulse::scenario::ScenarioPreset;
use policy_pulse::{
    export, BaselineContext, HistoryConfig, ModelParams, PolicyShock, ScenarioRunner,
};

/// Monetary-policy shock scenario simulator
#[derive(Debug, Parser)]
#[command(name = "pulse", version, about = "Monetary-policy shock scenario simulator")]
struct Cli {
    /// Policy rate change in percentage points
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    rate_change: f64,

    /// Systemic liquidity change in percent
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    liquidity_change: f64,

    /// Inflation change in percentage points
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    inflation_change: f64,

    /// Canned scenario; overrides the individual shock flags
    #[arg(long, value_enum)]
    preset: Option<ScenarioPreset>,

    /// Baseline policy rate (%)
    #[arg(long, default_value_t = 6.0)]
    baseline_rate: f64,

    /// Baseline inflation (%)
    #[arg(long, default_value_t = 5.0)]
    baseline_inflation: f64,

    /// Base population in millions
    #[arg(long, default_value_t = 1400.0)]
    population: f64,

    /// Annual population growth (%)
    #[arg(long, default_value_t = 0.9)]
    population_growth: f64,

    /// Inflation target (%)
    #[arg(long, default_value_t = 4.0)]
    target_inflation: f64,

    /// Seed for the synthetic history (omit for the default deterministic baseline)
    #[arg(long)]
    seed: Option<u64>,

    /// Write the projected series to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the full outcome as JSON instead of tables
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let shock = match cli.preset {
        Some(preset) => preset.shock(),
        None => PolicyShock::new(cli.rate_change, cli.liquidity_change, cli.inflation_change),
    };

    let context = BaselineContext {
        baseline_policy_rate: cli.baseline_rate,
        baseline_inflation: cli.baseline_inflation,
        base_population_millions: cli.population,
        population_growth_pct: cli.population_growth,
        target_inflation: cli.target_inflation,
    };

    let history_config = HistoryConfig {
        seed: cli.seed.or(HistoryConfig::default().seed),
        ..Default::default()
    };

    let runner =
        ScenarioRunner::with_config(context, ModelParams::default_calibration(), history_config)
            .context("failed to build baseline scenario")?;
    let outcome = runner.run(&shock).context("simulation failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!("Policy Pulse v0.1.0");
    println!("===================\n");

    println!("Scenario inputs:");
    if let Some(preset) = cli.preset {
        println!("  Preset: {}", preset.label());
    }
    println!("  Rate change:      {:+.2} pp", shock.rate_change);
    println!("  Liquidity change: {:+.2} %", shock.liquidity_change);
    println!("  Inflation change: {:+.2} pp", shock.inflation_change);
    println!(
        "  Baseline: rate {:.2}%, inflation {:.2}%, target {:.2}%",
        context.baseline_policy_rate, context.baseline_inflation, context.target_inflation
    );
    println!(
        "  Population: {:.1}M, growth {:.2}%/yr\n",
        context.base_population_millions, context.population_growth_pct
    );

    let metrics = &outcome.metrics;
    println!(
        "Risk score: {:.2} / 10  (level: {})",
        outcome.risk.normalized_score, outcome.risk.level
    );
    println!(
        "Real policy rate: {:.2}%  (nominal {:.2}%, inflation {:.2}%)",
        metrics.real_interest_rate, metrics.nominal_rate, metrics.inflation_rate
    );
    println!(
        "Latest-year GDP growth: {:+.2}%   Inflation target gap: {:+.2} pp",
        metrics.gdp_growth_rate_pct, metrics.inflation_target_gap
    );
    println!("Guidance: {}\n", metrics.guidance);

    println!("Projection ({} years):", outcome.rows.len());
    println!(
        "{:>6} {:>10} {:>10} {:>10} {:>10} {:>8} {:>8} {:>10} {:>9}",
        "Year", "GDP", "Proj GDP", "Worst", "Best", "Infl", "ProjInfl", "Pop (M)", "PC (k)"
    );
    println!("{}", "-".repeat(90));
    for row in &outcome.rows {
        println!(
            "{:>6} {:>10.1} {:>10.1} {:>10.1} {:>10.1} {:>8.2} {:>8.2} {:>10.1} {:>9.3}",
            row.year,
            row.gdp,
            row.projected_gdp,
            row.gdp_worst,
            row.gdp_best,
            row.inflation,
            row.projected_inflation,
            row.population_millions,
            row.projected_gdp_per_capita_k,
        );
    }

    println!("\nYield curve shift:");
    println!("{:>6} {:>10} {:>10}", "Tenor", "Base", "Projected");
    for point in &metrics.yield_curve {
        println!(
            "{:>6} {:>10.2} {:>10.2}",
            point.tenor, point.base_yield, point.projected_yield
        );
    }

    let comparison = outcome.comparison();
    println!("\nLatest year ({}) baseline vs projected:", comparison.year);
    println!(
        "  GDP (billions):     {:>10.2} -> {:>10.2}  ({:+.2}%)",
        comparison.gdp.baseline, comparison.gdp.projected, comparison.gdp.change_pct
    );
    println!(
        "  Inflation (%):      {:>10.2} -> {:>10.2}  ({:+.2}%)",
        comparison.inflation.baseline,
        comparison.inflation.projected,
        comparison.inflation.change_pct
    );
    println!(
        "  GDP per capita (k): {:>10.2} -> {:>10.2}  ({:+.2}%)",
        comparison.gdp_per_capita_k.baseline,
        comparison.gdp_per_capita_k.projected,
        comparison.gdp_per_capita_k.change_pct
    );

    println!("\nInsights:");
    for line in &outcome.insights {
        println!("  - {}", line);
    }

    if let Some(path) = &cli.csv {
        export::write_rows_to_path(path, &outcome.rows)
            .with_context(|| format!("failed to write CSV to {}", path.display()))?;
        println!("\nFull results written to: {}", path.display());
    }

    Ok(())
}
