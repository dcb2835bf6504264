//! Bias score output models.

use serde::{Deserialize, Serialize};

/// Discrete market-state band derived from the total bias score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketState {
    #[serde(rename = "Strong Bullish")]
    StrongBullish,
    Bullish,
    #[serde(rename = "Slightly Bullish")]
    SlightlyBullish,
    Neutral,
    #[serde(rename = "Slightly Bearish")]
    SlightlyBearish,
    Bearish,
    #[serde(rename = "Strong Bearish")]
    StrongBearish,
}

impl MarketState {
    pub fn label(&self) -> &'static str {
        match self {
            MarketState::StrongBullish => "Strong Bullish",
            MarketState::Bullish => "Bullish",
            MarketState::SlightlyBullish => "Slightly Bullish",
            MarketState::Neutral => "Neutral",
            MarketState::SlightlyBearish => "Slightly Bearish",
            MarketState::Bearish => "Bearish",
            MarketState::StrongBearish => "Strong Bearish",
        }
    }

    /// Action band matching this state one-to-one.
    pub fn action(&self) -> ActionRecommendation {
        match self {
            MarketState::StrongBullish => ActionRecommendation::StrongBuy,
            MarketState::Bullish => ActionRecommendation::Buy,
            MarketState::SlightlyBullish => ActionRecommendation::LeanBuy,
            MarketState::Neutral => ActionRecommendation::Hold,
            MarketState::SlightlyBearish => ActionRecommendation::LeanSell,
            MarketState::Bearish => ActionRecommendation::Sell,
            MarketState::StrongBearish => ActionRecommendation::StrongSell,
        }
    }
}

/// Recommended action, driven by the same thresholds as [`MarketState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionRecommendation {
    #[serde(rename = "Strong Buy")]
    StrongBuy,
    Buy,
    #[serde(rename = "Lean Buy")]
    LeanBuy,
    Hold,
    #[serde(rename = "Lean Sell")]
    LeanSell,
    Sell,
    #[serde(rename = "Strong Sell")]
    StrongSell,
}

/// Risk tier derived from annualized volatility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Aggregated directional bias snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiasScoreData {
    /// Bounded composite score in [-35, 35].
    pub total_score: f64,
    /// 0-100; `up_probability + down_probability == 100`.
    pub up_probability: u32,
    pub down_probability: u32,
    /// 30-95; score extremity credited, volatility penalized.
    pub confidence: u32,
    pub market_state: MarketState,
    pub action_recommendation: ActionRecommendation,
    pub risk_level: RiskLevel,
}
