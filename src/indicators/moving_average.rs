//! Simple moving average

use crate::common::math::round2;
use crate::models::PricePoint;

/// Trailing simple moving average aligned to the input series.
///
/// Entries before the window is full are `None`; the rest are the mean of
/// the trailing `period` closes, rounded to 2 decimals.
pub fn compute_moving_average(data: &[PricePoint], period: usize) -> Vec<Option<f64>> {
    let mut result = Vec::with_capacity(data.len());

    for i in 0..data.len() {
        if i + 1 < period {
            result.push(None);
        } else {
            let sum: f64 = data[i + 1 - period..=i].iter().map(|p| p.price).sum();
            result.push(Some(round2(sum / period as f64)));
        }
    }

    result
}
