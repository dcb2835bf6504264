//! Composite bias score: aggregation and categorical mapping.

use crate::common::math::round2;
use crate::models::{
    BiasScoreData, FactorCategory, MarketState, RiskLevel, Statistics,
};

/// Bound of the composite score; the full range is [-35, 35].
const SCORE_BOUND: f64 = 35.0;

/// Market-state band for a total score.
fn market_state(total_score: f64) -> MarketState {
    if total_score > 20.0 {
        MarketState::StrongBullish
    } else if total_score > 10.0 {
        MarketState::Bullish
    } else if total_score > 3.0 {
        MarketState::SlightlyBullish
    } else if total_score >= -3.0 {
        MarketState::Neutral
    } else if total_score >= -10.0 {
        MarketState::SlightlyBearish
    } else if total_score >= -20.0 {
        MarketState::Bearish
    } else {
        MarketState::StrongBearish
    }
}

/// Risk tier from annualized volatility (percent).
fn risk_level(volatility: f64) -> RiskLevel {
    if volatility > 20.0 {
        RiskLevel::High
    } else if volatility > 12.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Aggregate the factor hierarchy into a single bounded bias snapshot.
///
/// `total_score` is the weight-scaled sum of category factor scores,
/// clamped to [-35, 35]. The probability split maps the score linearly onto
/// 5-95; confidence credits score extremity and penalizes volatility,
/// bounded to 30-95. Confidence here is a derived heuristic, not a
/// statistical confidence level.
pub fn compute_bias_score(categories: &[FactorCategory], statistics: &Statistics) -> BiasScoreData {
    let raw: f64 = categories
        .iter()
        .map(|c| c.factor_score * c.weight)
        .sum();
    let total_score = round2(raw.clamp(-SCORE_BOUND, SCORE_BOUND));

    let normalized = (total_score + SCORE_BOUND) / (2.0 * SCORE_BOUND);
    let up_probability = (normalized * 90.0 + 5.0).clamp(5.0, 95.0).round() as u32;
    let down_probability = 100 - up_probability;

    let score_factor = total_score.abs() / SCORE_BOUND * 50.0;
    let vol_penalty = (statistics.volatility / 30.0).min(0.3) * 30.0;
    let confidence = (40.0 + score_factor - vol_penalty).clamp(30.0, 95.0).round() as u32;

    let state = market_state(total_score);

    BiasScoreData {
        total_score,
        up_probability,
        down_probability,
        confidence,
        market_state: state,
        action_recommendation: state.action(),
        risk_level: risk_level(statistics.volatility),
    }
}
