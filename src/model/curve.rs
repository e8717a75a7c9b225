//! Yield curve tenor specification and rate-shock pass-through
//!
//! Each tenor carries a fixed base yield and a sensitivity to the policy
//! rate change. Sensitivities decay monotonically with tenor length: the
//! short end moves almost one-for-one with the policy rate, the long end
//! barely at all.

use serde::{Deserialize, Serialize};

/// One maturity point on the curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenorSpec {
    pub label: String,
    /// Unshocked yield level (%)
    pub base_yield: f64,
    /// Pass-through of the policy rate change at this tenor
    pub sensitivity: f64,
}

/// Ordered short-to-long tenor list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldCurveSpec {
    tenors: Vec<TenorSpec>,
}

/// Base and shocked yield at one tenor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldPoint {
    pub tenor: String,
    pub base_yield: f64,
    pub projected_yield: f64,
}

impl YieldCurveSpec {
    /// Default sovereign curve: 3M through 30Y
    pub fn default_sovereign() -> Self {
        let tenor = |label: &str, base_yield: f64, sensitivity: f64| TenorSpec {
            label: label.to_string(),
            base_yield,
            sensitivity,
        };
        Self {
            tenors: vec![
                tenor("3M", 6.45, 1.20),
                tenor("1Y", 6.60, 1.00),
                tenor("2Y", 6.72, 0.80),
                tenor("5Y", 6.95, 0.55),
                tenor("10Y", 7.10, 0.40),
                tenor("30Y", 7.25, 0.30),
            ],
        }
    }

    pub fn tenors(&self) -> &[TenorSpec] {
        &self.tenors
    }

    /// Apply a rate change across the curve:
    /// `projected = base + rate_change * sensitivity`
    pub fn shift(&self, rate_change: f64) -> Vec<YieldPoint> {
        self.tenors
            .iter()
            .map(|t| YieldPoint {
                tenor: t.label.clone(),
                base_yield: t.base_yield,
                projected_yield: t.base_yield + rate_change * t.sensitivity,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sensitivity_decays_with_tenor() {
        let spec = YieldCurveSpec::default_sovereign();
        for pair in spec.tenors().windows(2) {
            assert!(
                pair[1].sensitivity < pair[0].sensitivity,
                "sensitivity must strictly decrease from {} to {}",
                pair[0].label,
                pair[1].label
            );
        }
        assert_relative_eq!(spec.tenors().first().unwrap().sensitivity, 1.2);
        assert_relative_eq!(spec.tenors().last().unwrap().sensitivity, 0.3);
    }

    #[test]
    fn test_zero_rate_change_leaves_curve_unchanged() {
        let spec = YieldCurveSpec::default_sovereign();
        for point in spec.shift(0.0) {
            assert_eq!(point.projected_yield, point.base_yield);
        }
    }

    #[test]
    fn test_shift_hand_computed() {
        let spec = YieldCurveSpec::default_sovereign();
        let curve = spec.shift(1.0);
        // 3M: 6.45 + 1.0*1.2 = 7.65; 30Y: 7.25 + 1.0*0.3 = 7.55
        assert_relative_eq!(curve[0].projected_yield, 7.65);
        assert_relative_eq!(curve[5].projected_yield, 7.55);
    }

    #[test]
    fn test_short_end_moves_more_than_long_end() {
        let spec = YieldCurveSpec::default_sovereign();
        let curve = spec.shift(-1.5);
        let short_move = (curve[0].projected_yield - curve[0].base_yield).abs();
        let long_move = (curve[5].projected_yield - curve[5].base_yield).abs();
        assert!(short_move > long_move);
    }
}
