//! Projection output structures

use serde::{Deserialize, Serialize};

use crate::model::RiskAssessment;

use super::metrics::DerivedMetrics;

/// One projected year
///
/// Invariants (guaranteed by the engine): `gdp_worst <= projected_gdp <=
/// gdp_best`, and every GDP-like value is non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    pub year: i32,
    /// Baseline GDP in billions
    pub gdp: f64,
    pub projected_gdp: f64,
    /// Upper confidence band on projected GDP
    pub gdp_best: f64,
    /// Lower confidence band, floored at zero
    pub gdp_worst: f64,
    /// Baseline inflation (%)
    pub inflation: f64,
    pub projected_inflation: f64,
    pub population_millions: f64,
    /// Baseline GDP per capita in thousands
    pub gdp_per_capita_k: f64,
    pub projected_gdp_per_capita_k: f64,
}

/// Everything computed for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub rows: Vec<ProjectionRow>,
    pub risk: RiskAssessment,
    pub metrics: DerivedMetrics,
    pub insights: Vec<String>,
}

/// Baseline vs projected value for one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricDelta {
    pub baseline: f64,
    pub projected: f64,
    pub change_pct: f64,
}

impl MetricDelta {
    fn new(baseline: f64, projected: f64) -> Self {
        Self {
            baseline,
            projected,
            change_pct: (projected - baseline) / baseline * 100.0,
        }
    }
}

/// Latest-year comparison across the headline metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub year: i32,
    pub gdp: MetricDelta,
    pub inflation: MetricDelta,
    pub gdp_per_capita_k: MetricDelta,
}

impl SimulationOutcome {
    /// Most recent projected year (rows are never empty)
    pub fn latest(&self) -> &ProjectionRow {
        self.rows.last().expect("outcome has at least one row")
    }

    /// Baseline-vs-projected snapshot for the latest year
    pub fn comparison(&self) -> ScenarioComparison {
        let latest = self.latest();
        ScenarioComparison {
            year: latest.year,
            gdp: MetricDelta::new(latest.gdp, latest.projected_gdp),
            inflation: MetricDelta::new(latest.inflation, latest.projected_inflation),
            gdp_per_capita_k: MetricDelta::new(
                latest.gdp_per_capita_k,
                latest.projected_gdp_per_capita_k,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_metric_delta_change_pct() {
        let delta = MetricDelta::new(1000.0, 977.8);
        assert_relative_eq!(delta.change_pct, -2.22, epsilon = 1e-9);
    }
}
