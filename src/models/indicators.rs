//! Technical indicator output models.

use serde::{Deserialize, Serialize};

/// Full indicator snapshot for a price series.
///
/// Moving-average series are aligned to the price series; entries before a
/// window is full are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalIndicators {
    pub ma5: Vec<Option<f64>>,
    pub ma20: Vec<Option<f64>>,
    pub ma50: Vec<Option<f64>>,
    pub rsi: f64,
    pub atr: f64,
    pub support: f64,
    pub resistance: f64,
    /// Scaled 10-day rate of change, clamped to [-100, 100].
    pub momentum: i32,
}
