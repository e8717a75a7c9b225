//! Composite risk scoring from shock magnitudes
//!
//! A weighted sum of absolute shock sizes, normalized to a 0-10 scale and
//! bucketed into three levels. Inflation shocks carry the heaviest weight.
//! Deterministic three-way classifier; no hysteresis, no history.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::policy::PolicyShock;

/// The three shock channels, in risk-priority order
///
/// Declaration order doubles as the tie-break when two channels contribute
/// equally to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskChannel {
    Inflation,
    Liquidity,
    Rate,
}

impl fmt::Display for RiskChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskChannel::Inflation => write!(f, "Inflation"),
            RiskChannel::Liquidity => write!(f, "Liquidity"),
            RiskChannel::Rate => write!(f, "Interest Rate"),
        }
    }
}

/// Discrete risk bucket; thresholds are closed on the lower bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Bucket a normalized 0-10 score: `< 3` Low, `[3, 6)` Medium, `>= 6` High
    pub fn from_score(score: f64) -> Self {
        if score < 3.0 {
            RiskLevel::Low
        } else if score < 6.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// Channel weights and the normalization constant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskWeights {
    pub rate: f64,
    pub liquidity: f64,
    pub inflation: f64,
    /// Raw score that maps to 10 before clamping
    pub norm_constant: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            rate: 3.0,
            liquidity: 2.0,
            inflation: 4.0,
            norm_constant: 9.0,
        }
    }
}

/// One channel's contribution to the raw score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskContribution {
    pub channel: RiskChannel,
    /// The signed shock value behind this contribution
    pub change: f64,
    /// `|change| * weight`, always non-negative
    pub contribution: f64,
}

/// Full risk scoring output for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub contributions: Vec<RiskContribution>,
    pub raw_score: f64,
    /// Raw score rescaled into `[0, 10]`
    pub normalized_score: f64,
    pub level: RiskLevel,
}

impl RiskWeights {
    /// Score one shock into contributions, scores, and a level
    pub fn assess(&self, shock: &PolicyShock) -> RiskAssessment {
        let contributions = vec![
            RiskContribution {
                channel: RiskChannel::Inflation,
                change: shock.inflation_change,
                contribution: shock.inflation_change.abs() * self.inflation,
            },
            RiskContribution {
                channel: RiskChannel::Liquidity,
                change: shock.liquidity_change,
                contribution: shock.liquidity_change.abs() * self.liquidity,
            },
            RiskContribution {
                channel: RiskChannel::Rate,
                change: shock.rate_change,
                contribution: shock.rate_change.abs() * self.rate,
            },
        ];

        let raw_score: f64 = contributions.iter().map(|c| c.contribution).sum();
        let normalized_score = (raw_score / self.norm_constant * 10.0).min(10.0);

        RiskAssessment {
            contributions,
            raw_score,
            normalized_score,
            level: RiskLevel::from_score(normalized_score),
        }
    }
}

impl RiskAssessment {
    /// Channel with the largest contribution
    ///
    /// Ties go to the earlier channel in priority order (inflation, then
    /// liquidity, then rate).
    pub fn dominant_channel(&self) -> &RiskContribution {
        let mut best = &self.contributions[0];
        for c in &self.contributions[1..] {
            if c.contribution > best.contribution {
                best = c;
            }
        }
        best
    }

    /// Min-max normalization of contributions into `[0, 1]` for heatmap-style
    /// rendering; all-equal contributions map to 0.5
    pub fn normalized_contributions(&self) -> Vec<(RiskChannel, f64)> {
        let min = self
            .contributions
            .iter()
            .map(|c| c.contribution)
            .fold(f64::INFINITY, f64::min);
        let max = self
            .contributions
            .iter()
            .map(|c| c.contribution)
            .fold(f64::NEG_INFINITY, f64::max);
        let span = max - min;

        self.contributions
            .iter()
            .map(|c| {
                let scaled = if span == 0.0 {
                    0.5
                } else {
                    (c.contribution - min) / span
                };
                (c.channel, scaled)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_shock_scores_zero_low() {
        let assessment = RiskWeights::default().assess(&PolicyShock::NONE);
        assert_eq!(assessment.raw_score, 0.0);
        assert_eq!(assessment.normalized_score, 0.0);
        assert_eq!(assessment.level, RiskLevel::Low);
    }

    #[test]
    fn test_weighted_contributions() {
        let shock = PolicyShock::new(-1.0, 2.0, 0.5);
        let assessment = RiskWeights::default().assess(&shock);
        // |−1|*3 + |2|*2 + |0.5|*4 = 9 -> normalized exactly 10
        assert_relative_eq!(assessment.raw_score, 9.0);
        assert_relative_eq!(assessment.normalized_score, 10.0);
        assert_eq!(assessment.level, RiskLevel::High);
    }

    #[test]
    fn test_normalized_score_clamped_at_ten() {
        // Slider extremes: 2*3 + 5*2 + 2*4 = 24, well past the constant
        let shock = PolicyShock::new(2.0, 5.0, 2.0);
        let assessment = RiskWeights::default().assess(&shock);
        assert_eq!(assessment.normalized_score, 10.0);
    }

    #[test]
    fn test_level_thresholds_closed_below() {
        // raw 2.7 -> normalized exactly 3.0 -> Medium, not Low
        assert_eq!(RiskLevel::from_score(3.0), RiskLevel::Medium);
        // raw 5.4 -> normalized exactly 6.0 -> High, not Medium
        assert_eq!(RiskLevel::from_score(6.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(2.999), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(5.999), RiskLevel::Medium);

        let shock = PolicyShock::new(0.9, 0.0, 0.0); // raw 2.7
        let assessment = RiskWeights::default().assess(&shock);
        assert_relative_eq!(assessment.normalized_score, 3.0);
        assert_eq!(assessment.level, RiskLevel::Medium);
    }

    #[test]
    fn test_score_monotonic_per_channel() {
        let weights = RiskWeights::default();
        for channel in 0..3 {
            let mut prev = -1.0;
            for step in 0..30 {
                let magnitude = step as f64 * 0.1;
                let shock = match channel {
                    0 => PolicyShock::new(magnitude, 0.4, -0.3),
                    1 => PolicyShock::new(0.4, magnitude, -0.3),
                    _ => PolicyShock::new(0.4, -0.3, magnitude),
                };
                let score = weights.assess(&shock).normalized_score;
                assert!(score >= prev, "score decreased on channel {}", channel);
                assert!((0.0..=10.0).contains(&score));
                prev = score;
            }
        }
    }

    #[test]
    fn test_dominant_channel_tie_break() {
        // rate 4*3 = 12 and inflation 3*4 = 12: inflation wins the tie
        let shock = PolicyShock::new(4.0, 0.0, 3.0);
        let assessment = RiskWeights::default().assess(&shock);
        assert_eq!(assessment.dominant_channel().channel, RiskChannel::Inflation);

        // liquidity 6*2 = 12 ties rate 4*3 = 12: liquidity outranks rate
        let shock = PolicyShock::new(4.0, 6.0, 0.0);
        let assessment = RiskWeights::default().assess(&shock);
        assert_eq!(assessment.dominant_channel().channel, RiskChannel::Liquidity);
    }

    #[test]
    fn test_normalized_contributions_range() {
        let shock = PolicyShock::new(1.0, -2.0, 0.5);
        let scaled = RiskWeights::default().assess(&shock).normalized_contributions();
        assert_eq!(scaled.len(), 3);
        assert!(scaled.iter().any(|&(_, v)| v == 0.0));
        assert!(scaled.iter().any(|&(_, v)| v == 1.0));
        for &(_, v) in &scaled {
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_equal_contributions_normalize_to_half() {
        let scaled = RiskWeights::default()
            .assess(&PolicyShock::NONE)
            .normalized_contributions();
        assert!(scaled.iter().all(|&(_, v)| v == 0.5));
    }
}
