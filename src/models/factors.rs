//! Factor hierarchy models: categories, sub-factors, and their signals.

use serde::{Deserialize, Serialize};

/// Directional signal carried by a sub-factor or category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiasSignal {
    Bullish,
    Neutral,
    Bearish,
}

impl BiasSignal {
    /// Numeric contribution: +1 bullish, 0 neutral, -1 bearish.
    pub fn score(&self) -> f64 {
        match self {
            BiasSignal::Bullish => 1.0,
            BiasSignal::Neutral => 0.0,
            BiasSignal::Bearish => -1.0,
        }
    }
}

/// Trading horizon a sub-factor is relevant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeHorizon {
    Intraday,
    Swing,
    Longterm,
}

/// The six fixed factor categories, in catalog order.
///
/// Catalog order is load-bearing: it drives the signal-draw sequence and
/// breaks ties when residual weight corrections pick a largest sibling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryId {
    GlobalMacro,
    IndiaMarket,
    MarketMicrostructure,
    Technical,
    VolatilityRisk,
    BehavioralSupply,
}

impl CategoryId {
    /// All categories in catalog order.
    pub const ALL: [CategoryId; 6] = [
        CategoryId::GlobalMacro,
        CategoryId::IndiaMarket,
        CategoryId::MarketMicrostructure,
        CategoryId::Technical,
        CategoryId::VolatilityRisk,
        CategoryId::BehavioralSupply,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::GlobalMacro => "global_macro",
            CategoryId::IndiaMarket => "india_market",
            CategoryId::MarketMicrostructure => "market_microstructure",
            CategoryId::Technical => "technical",
            CategoryId::VolatilityRisk => "volatility_risk",
            CategoryId::BehavioralSupply => "behavioral_supply",
        }
    }
}

/// A named leaf indicator within a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubParameter {
    pub name: String,
    pub signal: BiasSignal,
    /// Percentage-point weight within the category, 0-20.
    pub weight: f64,
    pub detail: String,
    pub relevant_horizons: Vec<TimeHorizon>,
}

/// A scored factor category with its sub-parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorCategory {
    pub id: CategoryId,
    pub name: String,
    pub icon: String,
    /// Fraction of the total, 0-1. All six sum to 1.0 modulo rounding.
    pub weight: f64,
    pub signal: BiasSignal,
    /// Sum of `signal * weight` over sub-parameters, rounded to 2 decimals.
    pub factor_score: f64,
    pub sub_parameters: Vec<SubParameter>,
}
