//! Confidence band estimation around the projected GDP path
//!
//! Band width is historical volatility scaled up by shock magnitude: bigger
//! shocks mean wider bands, capped so the widening never exceeds 60%.

use serde::{Deserialize, Serialize};

use crate::history::HistoricalSeries;
use crate::policy::PolicyShock;

/// Parameters for the uncertainty band estimator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandParams {
    /// Substitute when historical volatility is degenerate
    pub volatility_floor: f64,
    /// Shock-strength weight on |rate_change|
    pub rate_weight: f64,
    /// Shock-strength weight on |liquidity_change|
    pub liquidity_weight: f64,
    /// Shock-strength weight on |inflation_change|
    pub inflation_weight: f64,
    /// Shock strength that maps to the full widening cap
    pub strength_scale: f64,
    /// Maximum fractional widening of the band
    pub max_widening: f64,
}

impl Default for BandParams {
    fn default() -> Self {
        Self {
            volatility_floor: 0.02,
            rate_weight: 0.6,
            liquidity_weight: 0.3,
            inflation_weight: 0.8,
            strength_scale: 5.0,
            max_widening: 0.6,
        }
    }
}

impl BandParams {
    /// Relative GDP volatility: population stddev of year-over-year
    /// differences divided by mean GDP
    ///
    /// A degenerate result (non-finite or non-positive, e.g. from a
    /// single-year or perfectly flat series) falls back to the floor rather
    /// than surfacing as an error.
    pub fn gdp_volatility(&self, series: &HistoricalSeries) -> f64 {
        let rows = series.rows();
        if rows.len() < 2 {
            return self.volatility_floor;
        }

        let diffs: Vec<f64> = rows.windows(2).map(|w| w[1].gdp - w[0].gdp).collect();
        let mean_diff = diffs.iter().sum::<f64>() / diffs.len() as f64;
        let variance =
            diffs.iter().map(|d| (d - mean_diff) * (d - mean_diff)).sum::<f64>() / diffs.len() as f64;

        let volatility = variance.sqrt() / series.mean_gdp();
        if volatility.is_finite() && volatility > 0.0 {
            volatility
        } else {
            self.volatility_floor
        }
    }

    /// Weighted absolute shock magnitude
    pub fn shock_strength(&self, shock: &PolicyShock) -> f64 {
        self.rate_weight * shock.rate_change.abs()
            + self.liquidity_weight * shock.liquidity_change.abs()
            + self.inflation_weight * shock.inflation_change.abs()
    }

    /// Band widening factor in `[1, 1 + max_widening]`
    pub fn band_multiplier(&self, shock: &PolicyShock) -> f64 {
        1.0 + (self.shock_strength(shock) / self.strength_scale).min(self.max_widening)
    }

    /// Absolute band half-width for one year's baseline GDP
    pub fn band_width(&self, gdp: f64, volatility: f64, multiplier: f64) -> f64 {
        gdp * volatility * multiplier
    }
}
