//! Momentum (scaled rate of change)

use crate::models::PricePoint;

pub const DEFAULT_LOOKBACK: usize = 10;

/// Percent change over the trailing `lookback` days, scaled by 20 and
/// clamped to [-100, 100], rounded to an integer. Returns 0 with
/// insufficient history.
pub fn compute_momentum(data: &[PricePoint], lookback: usize) -> i32 {
    if data.len() < lookback + 1 {
        return 0;
    }

    let current = data[data.len() - 1].price;
    let past = data[data.len() - 1 - lookback].price;
    let pct_change = (current - past) / past * 100.0;

    (pct_change * 20.0).clamp(-100.0, 100.0).round() as i32
}
