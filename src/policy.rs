//! Policy scenario inputs
//!
//! A scenario is a [`PolicyShock`] (three deltas applied to the baseline
//! stance) plus a [`BaselineContext`] (the levels the deltas apply to).
//! Both are plain value objects; validation happens once at the engine
//! boundary, never mid-computation.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// User-specified deltas to the baseline policy stance
///
/// Any finite value is accepted for each field; slider ranges like
/// ±2pp / ±5% / ±2pp belong to the presentation shell, not the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolicyShock {
    /// Policy rate change in percentage points
    pub rate_change: f64,
    /// Systemic liquidity change in percent
    pub liquidity_change: f64,
    /// Inflation change in percentage points
    pub inflation_change: f64,
}

impl PolicyShock {
    /// The no-shock scenario
    pub const NONE: PolicyShock = PolicyShock {
        rate_change: 0.0,
        liquidity_change: 0.0,
        inflation_change: 0.0,
    };

    pub fn new(rate_change: f64, liquidity_change: f64, inflation_change: f64) -> Self {
        Self {
            rate_change,
            liquidity_change,
            inflation_change,
        }
    }

    /// Reject NaN/infinite shock values before any projection math runs
    pub fn validate(&self) -> Result<(), EngineError> {
        for (field, value) in [
            ("rate_change", self.rate_change),
            ("liquidity_change", self.liquidity_change),
            ("inflation_change", self.inflation_change),
        ] {
            if !value.is_finite() {
                return Err(EngineError::NonFiniteShock { field, value });
            }
        }
        Ok(())
    }
}

impl Default for PolicyShock {
    fn default() -> Self {
        Self::NONE
    }
}

/// Baseline levels the shocks are applied against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineContext {
    /// Nominal policy rate level (%)
    pub baseline_policy_rate: f64,
    /// Prevailing inflation level (%)
    pub baseline_inflation: f64,
    /// Population in the first projection year, in millions
    pub base_population_millions: f64,
    /// Annual population growth (%)
    pub population_growth_pct: f64,
    /// Central bank inflation target (%)
    pub target_inflation: f64,
}

impl BaselineContext {
    /// Reject non-finite levels and a non-positive population base
    ///
    /// Per-capita metrics divide by the population path, so a zero base is
    /// an input error, not a computable scenario.
    pub fn validate(&self) -> Result<(), EngineError> {
        for (field, value) in [
            ("baseline_policy_rate", self.baseline_policy_rate),
            ("baseline_inflation", self.baseline_inflation),
            ("base_population_millions", self.base_population_millions),
            ("population_growth_pct", self.population_growth_pct),
            ("target_inflation", self.target_inflation),
        ] {
            if !value.is_finite() {
                return Err(EngineError::NonFiniteBaseline { field, value });
            }
        }
        if self.base_population_millions <= 0.0 {
            return Err(EngineError::NonPositivePopulation(
                self.base_population_millions,
            ));
        }
        Ok(())
    }
}

impl Default for BaselineContext {
    fn default() -> Self {
        Self {
            baseline_policy_rate: 6.0,
            baseline_inflation: 5.0,
            base_population_millions: 1400.0,
            population_growth_pct: 0.9,
            target_inflation: 4.0,
        }
    }
}
