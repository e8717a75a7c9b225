//! Rule-based commentary on the computed scenario
//!
//! Deterministic and order-fixed: dominant risk channel first, one
//! directional statement per channel, one overall statement keyed to the
//! risk level. Always exactly five strings.

use crate::model::{RiskAssessment, RiskLevel};
use crate::policy::PolicyShock;

/// Generate the insight list for one scenario
pub fn generate_insights(shock: &PolicyShock, risk: &RiskAssessment) -> Vec<String> {
    let mut insights = Vec::with_capacity(5);

    let dominant = risk.dominant_channel();
    insights.push(format!(
        "The largest contributor to risk is {} (contribution: {:.2}).",
        dominant.channel, dominant.contribution
    ));

    if shock.rate_change > 0.0 {
        insights.push(format!(
            "Rising interest rates ({:+.2} pp) are likely to slow GDP growth and tighten financial conditions.",
            shock.rate_change
        ));
    } else if shock.rate_change < 0.0 {
        insights.push(format!(
            "Cutting interest rates ({:+.2} pp) provides stimulus and may boost growth.",
            shock.rate_change
        ));
    } else {
        insights.push("Interest rate stance unchanged in this scenario.".to_string());
    }

    if shock.liquidity_change < 0.0 {
        insights.push(format!(
            "Liquidity contraction ({:+.2}%) could pressure markets and credit availability.",
            shock.liquidity_change
        ));
    } else if shock.liquidity_change > 0.0 {
        insights.push(format!(
            "Liquidity injection ({:+.2}%) supports activity and financial markets.",
            shock.liquidity_change
        ));
    } else {
        insights.push("No major change in liquidity.".to_string());
    }

    if shock.inflation_change > 0.5 {
        insights.push(format!(
            "Inflation is rising by {:+.2} pp; monetary tightening may be appropriate to anchor expectations.",
            shock.inflation_change
        ));
    } else if shock.inflation_change < -0.5 {
        insights.push(format!(
            "Inflation is falling by {:+.2} pp; policy could stay accommodative to support demand.",
            shock.inflation_change
        ));
    } else {
        insights.push("Inflation change is modest.".to_string());
    }

    insights.push(match risk.level {
        RiskLevel::High => {
            "Overall assessment: High risk. Consider combining measured liquidity support with targeted supply-side measures."
        }
        RiskLevel::Medium => {
            "Overall assessment: Medium risk. Monitor incoming data and be ready to adjust policy."
        }
        RiskLevel::Low => "Overall assessment: Low risk. Scenario appears manageable.",
    }
    .to_string());

    insights
}
