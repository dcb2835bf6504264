//! Support and resistance levels from recent price extremes

use crate::common::math::round2;
use crate::models::PricePoint;

/// Trailing window the levels are computed over.
const LOOKBACK: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupportResistance {
    pub support: f64,
    pub resistance: f64,
}

/// Support = mean of the bottom decile of the trailing 60 closes,
/// resistance = mean of the top decile, with a floor of 3 samples each.
pub fn compute_support_resistance(data: &[PricePoint]) -> SupportResistance {
    let start = data.len().saturating_sub(LOOKBACK);
    let mut sorted: Vec<f64> = data[start..].iter().map(|p| p.price).collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

    if sorted.is_empty() {
        return SupportResistance {
            support: 0.0,
            resistance: 0.0,
        };
    }

    let n = ((sorted.len() as f64 * 0.1) as usize).max(3).min(sorted.len());
    let support = sorted[..n].iter().sum::<f64>() / n as f64;
    let resistance = sorted[sorted.len() - n..].iter().sum::<f64>() / n as f64;

    SupportResistance {
        support: round2(support),
        resistance: round2(resistance),
    }
}
