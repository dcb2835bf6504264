//! Summary statistics for a price series.

use crate::common::math::{mean, round2, sample_variance};
use crate::models::{PricePoint, Statistics};

/// Troy ounce expressed in 10-gram units (Indian spot convention).
pub const TROY_OUNCE_TO_TEN_GRAMS: f64 = 3.11035;
/// Fixed USD/INR conversion rate used for the secondary-currency mirror.
pub const USD_TO_INR: f64 = 84.50;

/// Trading days per year used to annualize daily volatility.
const TRADING_DAYS: f64 = 252.0;

/// INR per 10 grams from an already-rounded USD-per-ounce value.
///
/// The conversion is applied to the rounded source value so the two
/// currencies never compound rounding differently.
fn to_inr(usd: f64) -> f64 {
    round2(usd / TROY_OUNCE_TO_TEN_GRAMS * USD_TO_INR)
}

/// Derive summary statistics from a price series.
///
/// With fewer than 2 points the daily change degrades to 0; an empty series
/// yields an all-zero snapshot.
pub fn compute_statistics(data: &[PricePoint]) -> Statistics {
    if data.is_empty() {
        return Statistics::default();
    }

    let prices: Vec<f64> = data.iter().map(|p| p.price).collect();
    let current_price = prices[prices.len() - 1];

    let (daily_change, daily_change_percent) = if prices.len() >= 2 {
        let previous = prices[prices.len() - 2];
        let change = round2(current_price - previous);
        (change, round2(change / previous * 100.0))
    } else {
        (0.0, 0.0)
    };

    let high = round2(prices.iter().copied().fold(f64::MIN, f64::max));
    let low = round2(prices.iter().copied().fold(f64::MAX, f64::min));
    let average = round2(mean(&prices));

    let returns: Vec<f64> = prices
        .windows(2)
        .map(|w| (w[1] - w[0]) / w[0])
        .collect();
    let volatility = round2(sample_variance(&returns).sqrt() * TRADING_DAYS.sqrt() * 100.0);

    Statistics {
        current_price,
        current_price_inr: to_inr(current_price),
        daily_change,
        daily_change_percent,
        high_52w: high,
        low_52w: low,
        high_52w_inr: to_inr(high),
        low_52w_inr: to_inr(low),
        average,
        average_inr: to_inr(average),
        volatility,
    }
}
