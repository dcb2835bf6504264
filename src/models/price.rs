//! Price series, statistics, and forecast models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily close of the synthetic price series. Immutable once generated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

/// One day of the linear-regression forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionPoint {
    pub date: NaiveDate,
    pub predicted: f64,
    pub upper_bound: f64,
    pub lower_bound: f64,
}

/// Derived summary statistics for a price series.
///
/// Monetary fields carry an INR mirror computed from the already-rounded
/// USD value (spot per troy ounce converted to per-10-gram INR).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Statistics {
    pub current_price: f64,
    pub current_price_inr: f64,
    pub daily_change: f64,
    pub daily_change_percent: f64,
    pub high_52w: f64,
    pub low_52w: f64,
    pub high_52w_inr: f64,
    pub low_52w_inr: f64,
    pub average: f64,
    pub average_inr: f64,
    /// Annualized volatility of daily simple returns, in percent.
    pub volatility: f64,
}

/// Trailing window used to filter the chartable price series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "1W")]
    Week,
    #[serde(rename = "1M")]
    Month,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    Year,
}

impl TimeRange {
    /// Trailing number of daily points covered by this range.
    pub fn days(&self) -> usize {
        match self {
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::ThreeMonths => 90,
            TimeRange::SixMonths => 180,
            TimeRange::Year => 365,
        }
    }

    /// Trailing slice of `data` covered by this range.
    pub fn filter<'a>(&self, data: &'a [PricePoint]) -> &'a [PricePoint] {
        let start = data.len().saturating_sub(self.days());
        &data[start..]
    }
}

/// Supported forecast horizons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredictionHorizon {
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
}

impl PredictionHorizon {
    pub fn days(&self) -> usize {
        match self {
            PredictionHorizon::Week => 7,
            PredictionHorizon::Month => 30,
            PredictionHorizon::Quarter => 90,
        }
    }
}
