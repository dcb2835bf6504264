//! RSI (Relative Strength Index)

use crate::common::math::round2;
use crate::models::PricePoint;

pub const DEFAULT_PERIOD: usize = 14;

/// RSI over the trailing `period` daily changes.
///
/// RSI = 100 - 100 / (1 + avgGain / avgLoss). Returns the neutral sentinel
/// 50 with insufficient history and 100 when there are no losing days in
/// the window.
pub fn compute_rsi(data: &[PricePoint], period: usize) -> f64 {
    if data.len() < period + 1 {
        return 50.0;
    }

    let mut gains = 0.0;
    let mut losses = 0.0;
    let start = data.len() - period - 1;

    for i in start + 1..data.len() {
        let change = data[i].price - data[i - 1].price;
        if change > 0.0 {
            gains += change;
        } else {
            losses -= change;
        }
    }

    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;

    if avg_loss == 0.0 {
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    round2(100.0 - 100.0 / (1.0 + rs))
}
