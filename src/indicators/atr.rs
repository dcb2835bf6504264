//! ATR (Average True Range), simplified

use crate::common::math::round2;
use crate::models::PricePoint;

pub const DEFAULT_PERIOD: usize = 14;

/// Mean absolute day-over-day change over the trailing `period` days.
///
/// The series carries closes only, so this is the close-to-close variant of
/// ATR: no high/low true-range or gap handling. Returns 0 with insufficient
/// history.
pub fn compute_atr(data: &[PricePoint], period: usize) -> f64 {
    if data.len() < period + 1 {
        return 0.0;
    }

    let sum: f64 = (data.len() - period..data.len())
        .map(|i| (data[i].price - data[i - 1].price).abs())
        .sum();

    round2(sum / period as f64)
}
