//! Derived macro metrics and forward-guidance classification

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::model::{YieldCurveSpec, YieldPoint};
use crate::policy::{BaselineContext, PolicyShock};

use super::rows::ProjectionRow;

/// Forward-guidance stance derived from the real rate and the target gap
///
/// Rules are evaluated in declaration order; the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Guidance {
    /// Negative real rate while inflation overshoots the target
    TightenSignificantly,
    /// Comfortably positive real rate while inflation undershoots
    ScopeToEase,
    /// Real rate near neutral and inflation near target
    NeutralWaitAndWatch,
    /// Mixed signals
    DataDependent,
}

impl Guidance {
    /// Fixed decision table over `(real_interest_rate, inflation_target_gap)`
    pub fn classify(real_interest_rate: f64, inflation_target_gap: f64) -> Self {
        if real_interest_rate < 0.0 && inflation_target_gap > 0.5 {
            Guidance::TightenSignificantly
        } else if real_interest_rate > 1.0 && inflation_target_gap < -0.5 {
            Guidance::ScopeToEase
        } else if (real_interest_rate - 0.5).abs() < 0.5 && inflation_target_gap.abs() < 0.5 {
            Guidance::NeutralWaitAndWatch
        } else {
            Guidance::DataDependent
        }
    }
}

impl fmt::Display for Guidance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Guidance::TightenSignificantly => write!(f, "Tighten significantly"),
            Guidance::ScopeToEase => write!(f, "Scope to ease"),
            Guidance::NeutralWaitAndWatch => write!(f, "Neutral / wait-and-watch"),
            Guidance::DataDependent => write!(f, "Data-dependent / mixed"),
        }
    }
}

/// Scalar metrics and the shifted yield curve for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Post-shock nominal policy rate (%)
    pub nominal_rate: f64,
    /// Post-shock inflation level (%)
    pub inflation_rate: f64,
    /// Nominal rate minus prevailing inflation
    pub real_interest_rate: f64,
    /// Latest projected inflation minus the target
    pub inflation_target_gap: f64,
    /// Latest-year projected GDP over the prior baseline year, in percent
    pub gdp_growth_rate_pct: f64,
    pub yield_curve: Vec<YieldPoint>,
    pub guidance: Guidance,
}

/// Compute all derived metrics from the projected rows
///
/// Requires at least two rows so the growth rate has a prior year; shorter
/// series are rejected, not coerced.
pub fn derive_metrics(
    context: &BaselineContext,
    shock: &PolicyShock,
    rows: &[ProjectionRow],
    curve: &YieldCurveSpec,
) -> Result<DerivedMetrics, EngineError> {
    if rows.len() < 2 {
        return Err(EngineError::InsufficientHistory(rows.len()));
    }

    let nominal_rate = context.baseline_policy_rate + shock.rate_change;
    let inflation_rate = context.baseline_inflation + shock.inflation_change;
    let real_interest_rate = nominal_rate - inflation_rate;

    let latest = &rows[rows.len() - 1];
    let prior = &rows[rows.len() - 2];
    let inflation_target_gap = latest.projected_inflation - context.target_inflation;
    let gdp_growth_rate_pct = (latest.projected_gdp / prior.gdp - 1.0) * 100.0;

    Ok(DerivedMetrics {
        nominal_rate,
        inflation_rate,
        real_interest_rate,
        inflation_target_gap,
        gdp_growth_rate_pct,
        yield_curve: curve.shift(shock.rate_change),
        guidance: Guidance::classify(real_interest_rate, inflation_target_gap),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn row(year: i32, gdp: f64, projected_gdp: f64, projected_inflation: f64) -> ProjectionRow {
        ProjectionRow {
            year,
            gdp,
            projected_gdp,
            gdp_best: projected_gdp,
            gdp_worst: projected_gdp,
            inflation: 5.0,
            projected_inflation,
            population_millions: 1400.0,
            gdp_per_capita_k: gdp / 1400.0 * 1000.0,
            projected_gdp_per_capita_k: projected_gdp / 1400.0 * 1000.0,
        }
    }

    #[test]
    fn test_real_rate_and_gap() {
        let context = BaselineContext::default(); // rate 6.0, inflation 5.0, target 4.0
        let shock = PolicyShock::new(0.5, 0.0, 1.0);
        let rows = vec![row(2024, 1000.0, 995.0, 6.0), row(2025, 1050.0, 1044.0, 6.2)];
        let metrics =
            derive_metrics(&context, &shock, &rows, &YieldCurveSpec::default_sovereign()).unwrap();

        // (6.0 + 0.5) - (5.0 + 1.0) = 0.5
        assert_relative_eq!(metrics.real_interest_rate, 0.5);
        // 6.2 - 4.0 = 2.2
        assert_relative_eq!(metrics.inflation_target_gap, 2.2);
    }

    #[test]
    fn test_growth_rate_hand_computed() {
        let context = BaselineContext::default();
        let rows = vec![row(2024, 1000.0, 1000.0, 5.0), row(2025, 1050.0, 1029.0, 5.0)];
        let metrics = derive_metrics(
            &context,
            &PolicyShock::NONE,
            &rows,
            &YieldCurveSpec::default_sovereign(),
        )
        .unwrap();
        // 1029 / 1000 - 1 = 2.9%
        assert_relative_eq!(metrics.gdp_growth_rate_pct, 2.9, epsilon = 1e-9);
    }

    #[test]
    fn test_single_year_rejected_for_growth() {
        let context = BaselineContext::default();
        let rows = vec![row(2025, 1000.0, 1000.0, 5.0)];
        assert!(matches!(
            derive_metrics(
                &context,
                &PolicyShock::NONE,
                &rows,
                &YieldCurveSpec::default_sovereign()
            ),
            Err(EngineError::InsufficientHistory(1))
        ));
    }

    #[test]
    fn test_guidance_tighten_rule_fires_first() {
        // real -0.5, gap +1.0: rule 1 wins even though rule 4 would also match
        assert_eq!(
            Guidance::classify(-0.5, 1.0),
            Guidance::TightenSignificantly
        );
    }

    #[test]
    fn test_guidance_scope_to_ease() {
        assert_eq!(Guidance::classify(1.5, -1.0), Guidance::ScopeToEase);
    }

    #[test]
    fn test_guidance_neutral_band() {
        assert_eq!(Guidance::classify(0.5, 0.0), Guidance::NeutralWaitAndWatch);
        assert_eq!(Guidance::classify(0.9, 0.4), Guidance::NeutralWaitAndWatch);
        // Band edges are exclusive
        assert_ne!(Guidance::classify(1.0, 0.0), Guidance::NeutralWaitAndWatch);
        assert_ne!(Guidance::classify(0.5, 0.5), Guidance::NeutralWaitAndWatch);
    }

    #[test]
    fn test_guidance_mixed_fallback() {
        assert_eq!(Guidance::classify(2.0, 2.0), Guidance::DataDependent);
        assert_eq!(Guidance::classify(-1.0, -1.0), Guidance::DataDependent);
    }
}
