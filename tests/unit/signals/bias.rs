//! Unit tests for composite bias scoring

use goldsight::models::{
    ActionRecommendation, BiasSignal, CategoryId, FactorCategory, MarketState, RiskLevel,
    Statistics,
};
use goldsight::signals::compute_bias_score;

fn category(weight: f64, factor_score: f64) -> FactorCategory {
    FactorCategory {
        id: CategoryId::GlobalMacro,
        name: "Global Macro".to_string(),
        icon: "Globe".to_string(),
        weight,
        signal: BiasSignal::Neutral,
        factor_score,
        sub_parameters: Vec::new(),
    }
}

fn stats_with_volatility(volatility: f64) -> Statistics {
    Statistics {
        volatility,
        ..Statistics::default()
    }
}

#[test]
fn test_empty_hierarchy_is_neutral() {
    let bias = compute_bias_score(&[], &stats_with_volatility(0.0));
    assert_eq!(bias.total_score, 0.0);
    assert_eq!(bias.up_probability, 50);
    assert_eq!(bias.down_probability, 50);
    assert_eq!(bias.market_state, MarketState::Neutral);
    assert_eq!(bias.action_recommendation, ActionRecommendation::Hold);
    assert_eq!(bias.confidence, 40);
}

#[test]
fn test_score_is_weighted_sum() {
    let categories = vec![category(0.5, 10.0), category(0.5, 20.0)];
    let bias = compute_bias_score(&categories, &stats_with_volatility(0.0));
    assert_eq!(bias.total_score, 15.0);
    assert_eq!(bias.market_state, MarketState::Bullish);
    assert_eq!(bias.action_recommendation, ActionRecommendation::Buy);
    // ((15 + 35) / 70) * 90 + 5 = 69.29
    assert_eq!(bias.up_probability, 69);
    assert_eq!(bias.down_probability, 31);
    // 40 + 15/35 * 50 = 61.43
    assert_eq!(bias.confidence, 61);
}

#[test]
fn test_score_clamps_to_bound() {
    let bias = compute_bias_score(&[category(1.0, 200.0)], &stats_with_volatility(0.0));
    assert_eq!(bias.total_score, 35.0);
    assert_eq!(bias.up_probability, 95);
    assert_eq!(bias.down_probability, 5);
    assert_eq!(bias.market_state, MarketState::StrongBullish);
    assert_eq!(bias.action_recommendation, ActionRecommendation::StrongBuy);
    assert_eq!(bias.confidence, 90);
}

#[test]
fn test_extreme_bearish() {
    let bias = compute_bias_score(&[category(1.0, -200.0)], &stats_with_volatility(0.0));
    assert_eq!(bias.total_score, -35.0);
    assert_eq!(bias.up_probability, 5);
    assert_eq!(bias.down_probability, 95);
    assert_eq!(bias.market_state, MarketState::StrongBearish);
    assert_eq!(bias.action_recommendation, ActionRecommendation::StrongSell);
}

#[test]
fn test_market_state_bands() {
    let cases = [
        (25.0, MarketState::StrongBullish),
        (20.0, MarketState::Bullish),
        (15.0, MarketState::Bullish),
        (10.0, MarketState::SlightlyBullish),
        (5.0, MarketState::SlightlyBullish),
        (3.0, MarketState::Neutral),
        (0.0, MarketState::Neutral),
        (-3.0, MarketState::Neutral),
        (-5.0, MarketState::SlightlyBearish),
        (-10.0, MarketState::SlightlyBearish),
        (-15.0, MarketState::Bearish),
        (-20.0, MarketState::Bearish),
        (-25.0, MarketState::StrongBearish),
    ];
    for (score, expected) in cases {
        let bias = compute_bias_score(&[category(1.0, score)], &stats_with_volatility(0.0));
        assert_eq!(bias.market_state, expected, "score {}", score);
    }
}

#[test]
fn test_probabilities_always_sum_to_100() {
    for score in [-35.0, -17.3, -1.0, 0.0, 4.5, 22.2, 35.0] {
        let bias = compute_bias_score(&[category(1.0, score)], &stats_with_volatility(10.0));
        assert_eq!(bias.up_probability + bias.down_probability, 100);
    }
}

#[test]
fn test_volatility_penalizes_confidence() {
    let calm = compute_bias_score(&[category(1.0, 10.0)], &stats_with_volatility(0.0));
    let stormy = compute_bias_score(&[category(1.0, 10.0)], &stats_with_volatility(30.0));
    assert!(stormy.confidence < calm.confidence);
    // penalty is capped: doubling volatility past the cap changes nothing
    let extreme = compute_bias_score(&[category(1.0, 10.0)], &stats_with_volatility(60.0));
    assert_eq!(stormy.confidence, extreme.confidence);
}

#[test]
fn test_confidence_floor() {
    // zero score and maximal penalty: 40 - 9 = 31, still above the floor;
    // the clamp keeps the band at [30, 95]
    let bias = compute_bias_score(&[category(1.0, 0.0)], &stats_with_volatility(100.0));
    assert_eq!(bias.confidence, 31);
    assert!(bias.confidence >= 30);
}

#[test]
fn test_risk_levels() {
    let low = compute_bias_score(&[], &stats_with_volatility(5.0));
    let medium = compute_bias_score(&[], &stats_with_volatility(15.0));
    let high = compute_bias_score(&[], &stats_with_volatility(25.0));
    assert_eq!(low.risk_level, RiskLevel::Low);
    assert_eq!(medium.risk_level, RiskLevel::Medium);
    assert_eq!(high.risk_level, RiskLevel::High);

    // boundary values stay in the lower tier
    let at_12 = compute_bias_score(&[], &stats_with_volatility(12.0));
    let at_20 = compute_bias_score(&[], &stats_with_volatility(20.0));
    assert_eq!(at_12.risk_level, RiskLevel::Low);
    assert_eq!(at_20.risk_level, RiskLevel::Medium);
}
