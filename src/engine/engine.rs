//! Core simulation engine
//!
//! Pure and synchronous: one call validates the inputs, applies the shock
//! model to every year of history, attaches confidence bands and per-capita
//! metrics, then derives risk, macro metrics, and commentary. Nothing is
//! cached or mutated between calls, so concurrent runs need no coordination.

use log::debug;

use crate::error::EngineError;
use crate::history::{population_path, HistoricalSeries};
use crate::model::ModelParams;
use crate::policy::{BaselineContext, PolicyShock};

use super::insight::generate_insights;
use super::metrics::derive_metrics;
use super::rows::{ProjectionRow, SimulationOutcome};

/// Main simulation engine
pub struct SimulationEngine {
    params: ModelParams,
}

impl SimulationEngine {
    /// Create an engine with the given calibration
    pub fn new(params: ModelParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    /// Run one scenario over the full historical series
    pub fn run(
        &self,
        context: &BaselineContext,
        history: &HistoricalSeries,
        shock: &PolicyShock,
    ) -> Result<SimulationOutcome, EngineError> {
        shock.validate()?;
        context.validate()?;
        if history.len() < 2 {
            return Err(EngineError::InsufficientHistory(history.len()));
        }

        debug!(
            "running scenario: rate {:+.2}pp, liquidity {:+.2}%, inflation {:+.2}pp over {} years",
            shock.rate_change,
            shock.liquidity_change,
            shock.inflation_change,
            history.len()
        );

        // Shock effects and band scaling are year-independent; compute once
        let effects = self.params.shocks.effects(shock);
        let volatility = self.params.bands.gdp_volatility(history);
        let multiplier = self.params.bands.band_multiplier(shock);

        let population = population_path(
            context.base_population_millions,
            context.population_growth_pct,
            history.len(),
        );
        debug_assert_eq!(population.len(), history.len());

        let rows: Vec<ProjectionRow> = history
            .rows()
            .iter()
            .zip(&population)
            .map(|(h, &pop)| {
                let projected_gdp = self.params.shocks.project_gdp(h.gdp, &effects);
                let band = self.params.bands.band_width(h.gdp, volatility, multiplier);
                ProjectionRow {
                    year: h.year,
                    gdp: h.gdp,
                    projected_gdp,
                    gdp_best: projected_gdp + band,
                    gdp_worst: (projected_gdp - band).max(0.0),
                    inflation: h.inflation,
                    projected_inflation: self
                        .params
                        .shocks
                        .project_inflation(h.inflation, shock.inflation_change),
                    population_millions: pop,
                    gdp_per_capita_k: h.gdp / pop * 1000.0,
                    projected_gdp_per_capita_k: projected_gdp / pop * 1000.0,
                }
            })
            .collect();

        let risk = self.params.risk.assess(shock);
        let metrics = derive_metrics(context, shock, &rows, &self.params.curve)?;
        let insights = generate_insights(shock, &risk);

        Ok(SimulationOutcome {
            rows,
            risk,
            metrics,
            insights,
        })
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(ModelParams::default_calibration())
    }
}
