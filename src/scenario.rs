//! Scenario runner for repeated shock adjustments against a stable baseline
//!
//! Generates the historical series once at construction and reuses it for
//! every run, so sliding a shock back and forth in one session never
//! regenerates the baseline. Batch runs fan out across shocks in parallel;
//! each run is independent, so no coordination is needed.

use clap::ValueEnum;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::{SimulationEngine, SimulationOutcome};
use crate::error::EngineError;
use crate::history::{HistoricalSeries, HistoryConfig};
use crate::model::ModelParams;
use crate::policy::{BaselineContext, PolicyShock};

/// Canned shock combinations from the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioPreset {
    TighteningCycle,
    EasingCycle,
    LiquidityShock,
    InflationShock,
    Stagflation,
}

impl ScenarioPreset {
    /// The shock values this preset stands for
    pub fn shock(&self) -> PolicyShock {
        match self {
            ScenarioPreset::TighteningCycle => PolicyShock::new(1.0, -1.0, -0.25),
            ScenarioPreset::EasingCycle => PolicyShock::new(-1.0, 2.0, 0.25),
            ScenarioPreset::LiquidityShock => PolicyShock::new(0.0, -4.0, 0.2),
            ScenarioPreset::InflationShock => PolicyShock::new(0.5, 0.0, 1.5),
            ScenarioPreset::Stagflation => PolicyShock::new(0.5, -1.5, 1.2),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScenarioPreset::TighteningCycle => "Tightening cycle",
            ScenarioPreset::EasingCycle => "Easing cycle",
            ScenarioPreset::LiquidityShock => "Liquidity shock",
            ScenarioPreset::InflationShock => "Inflation shock",
            ScenarioPreset::Stagflation => "Stagflation",
        }
    }

    pub fn all() -> [ScenarioPreset; 5] {
        [
            ScenarioPreset::TighteningCycle,
            ScenarioPreset::EasingCycle,
            ScenarioPreset::LiquidityShock,
            ScenarioPreset::InflationShock,
            ScenarioPreset::Stagflation,
        ]
    }
}

/// Pre-built baseline plus calibration for running many shocks cheaply
#[derive(Debug)]
pub struct ScenarioRunner {
    context: BaselineContext,
    history: HistoricalSeries,
    params: ModelParams,
}

impl ScenarioRunner {
    /// Default baseline, default calibration, seeded default history
    pub fn new() -> Result<Self, EngineError> {
        Self::with_config(
            BaselineContext::default(),
            ModelParams::default_calibration(),
            HistoryConfig::default(),
        )
    }

    /// Generate the baseline series once from `config` and hold it
    pub fn with_config(
        context: BaselineContext,
        params: ModelParams,
        config: HistoryConfig,
    ) -> Result<Self, EngineError> {
        let history = config.generate()?;
        debug!(
            "baseline series generated: {} years (seed {:?})",
            history.len(),
            config.seed
        );
        Ok(Self::from_history(context, params, history))
    }

    /// Use an already-built series as the baseline
    pub fn from_history(
        context: BaselineContext,
        params: ModelParams,
        history: HistoricalSeries,
    ) -> Self {
        Self {
            context,
            history,
            params,
        }
    }

    pub fn context(&self) -> &BaselineContext {
        &self.context
    }

    pub fn history(&self) -> &HistoricalSeries {
        &self.history
    }

    /// Run a single shock against the held baseline
    pub fn run(&self, shock: &PolicyShock) -> Result<SimulationOutcome, EngineError> {
        let engine = SimulationEngine::new(self.params.clone());
        engine.run(&self.context, &self.history, shock)
    }

    /// Run a preset scenario
    pub fn run_preset(&self, preset: ScenarioPreset) -> Result<SimulationOutcome, EngineError> {
        self.run(&preset.shock())
    }

    /// Run many shocks in parallel; fails on the first invalid input
    pub fn run_batch(&self, shocks: &[PolicyShock]) -> Result<Vec<SimulationOutcome>, EngineError> {
        shocks.par_iter().map(|shock| self.run(shock)).collect()
    }
}
