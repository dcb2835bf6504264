//! Risk calendar and volatility history models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Impact tier of a scheduled macro event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventImpact {
    High,
    Medium,
    Low,
}

/// One upcoming market-moving event on the risk calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskEvent {
    pub date: NaiveDate,
    pub title: String,
    pub category: String,
    pub impact: EventImpact,
    pub description: String,
}

/// One day of the historical-vs-implied volatility series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolatilityPoint {
    pub date: NaiveDate,
    pub historical: f64,
    pub implied: f64,
}
