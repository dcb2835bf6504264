//! Shared data models spanning the engine layers.

pub mod bias;
pub mod events;
pub mod factors;
pub mod indicators;
pub mod price;
pub mod weights;

pub use bias::{ActionRecommendation, BiasScoreData, MarketState, RiskLevel};
pub use events::{EventImpact, RiskEvent, VolatilityPoint};
pub use factors::{BiasSignal, CategoryId, FactorCategory, SubParameter, TimeHorizon};
pub use indicators::TechnicalIndicators;
pub use price::{PredictionHorizon, PredictionPoint, PricePoint, Statistics, TimeRange};
pub use weights::{CategoryWeights, SubFactorWeights};
