//! Weight configuration models.
//!
//! `CategoryWeights` and `SubFactorWeights` are the only mutable state in
//! the system. Both are plain values: every mutation path goes through the
//! `weights` module and returns a complete replacement, never an in-place
//! partial update. The two structures are linked only by the explicit
//! conversion functions in `weights::{redistribute, scale}` (no back
//! pointers), so each stays a tree-shaped value.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::factors::CategoryId;

/// Percentage-point weight per category, conventionally summing to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeights {
    pub global_macro: f64,
    pub india_market: f64,
    pub market_microstructure: f64,
    pub technical: f64,
    pub volatility_risk: f64,
    pub behavioral_supply: f64,
}

impl CategoryWeights {
    pub fn get(&self, id: CategoryId) -> f64 {
        match id {
            CategoryId::GlobalMacro => self.global_macro,
            CategoryId::IndiaMarket => self.india_market,
            CategoryId::MarketMicrostructure => self.market_microstructure,
            CategoryId::Technical => self.technical,
            CategoryId::VolatilityRisk => self.volatility_risk,
            CategoryId::BehavioralSupply => self.behavioral_supply,
        }
    }

    pub fn set(&mut self, id: CategoryId, value: f64) {
        match id {
            CategoryId::GlobalMacro => self.global_macro = value,
            CategoryId::IndiaMarket => self.india_market = value,
            CategoryId::MarketMicrostructure => self.market_microstructure = value,
            CategoryId::Technical => self.technical = value,
            CategoryId::VolatilityRisk => self.volatility_risk = value,
            CategoryId::BehavioralSupply => self.behavioral_supply = value,
        }
    }

    /// Sum of all six weights.
    pub fn total(&self) -> f64 {
        CategoryId::ALL.iter().map(|id| self.get(*id)).sum()
    }

    /// (id, weight) pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (CategoryId, f64)> + '_ {
        CategoryId::ALL.iter().map(move |id| (*id, self.get(*id)))
    }
}

impl Default for CategoryWeights {
    /// Catalog default split: 35 / 15 / 20 / 15 / 10 / 5.
    fn default() -> Self {
        Self {
            global_macro: 35.0,
            india_market: 15.0,
            market_microstructure: 20.0,
            technical: 15.0,
            volatility_risk: 10.0,
            behavioral_supply: 5.0,
        }
    }
}

/// Per-category overrides for sub-factor weights (percentage points, 0-20).
///
/// Absent entries fall back to the catalog defaults; resolution always goes
/// through [`SubFactorWeights::resolve`] so callers never read the map raw.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SubFactorWeights {
    overrides: HashMap<CategoryId, HashMap<String, f64>>,
}

impl SubFactorWeights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective weight of a sub-factor, falling back to `default`.
    pub fn resolve(&self, category: CategoryId, name: &str, default: f64) -> f64 {
        self.overrides
            .get(&category)
            .and_then(|m| m.get(name))
            .copied()
            .unwrap_or(default)
    }

    /// Set one sub-factor weight.
    pub fn set(&mut self, category: CategoryId, name: &str, value: f64) {
        self.overrides
            .entry(category)
            .or_default()
            .insert(name.to_string(), value);
    }

    /// Replace all weights of one category.
    pub fn set_category(&mut self, category: CategoryId, weights: HashMap<String, f64>) {
        self.overrides.insert(category, weights);
    }

    /// Drop all overrides of one category, reverting it to catalog defaults.
    pub fn clear_category(&mut self, category: CategoryId) {
        self.overrides.remove(&category);
    }

    /// True if the category carries any override.
    pub fn has_overrides(&self, category: CategoryId) -> bool {
        self.overrides
            .get(&category)
            .is_some_and(|m| !m.is_empty())
    }
}
