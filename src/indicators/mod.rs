//! Technical indicators derived from the price series.
//!
//! Every function here is a pure, stateless derivation: same series in,
//! same value out, with documented sentinel values when the series is
//! shorter than the indicator's window.

pub mod atr;
pub mod momentum;
pub mod moving_average;
pub mod rsi;
pub mod support_resistance;

use crate::models::{PricePoint, TechnicalIndicators};

pub use atr::compute_atr;
pub use momentum::compute_momentum;
pub use moving_average::compute_moving_average;
pub use rsi::compute_rsi;
pub use support_resistance::{compute_support_resistance, SupportResistance};

/// Compute the full indicator snapshot for a series.
pub fn compute_technical_indicators(data: &[PricePoint]) -> TechnicalIndicators {
    let SupportResistance { support, resistance } = compute_support_resistance(data);

    TechnicalIndicators {
        ma5: compute_moving_average(data, 5),
        ma20: compute_moving_average(data, 20),
        ma50: compute_moving_average(data, 50),
        rsi: compute_rsi(data, rsi::DEFAULT_PERIOD),
        atr: compute_atr(data, atr::DEFAULT_PERIOD),
        support,
        resistance,
        momentum: compute_momentum(data, momentum::DEFAULT_LOOKBACK),
    }
}
