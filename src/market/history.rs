//! Synthetic price history builder.
//!
//! The series this module produces is the system's only data source; every
//! downstream derivation treats it as opaque ground truth.

use chrono::{Duration, NaiveDate};

use crate::common::math::round2;
use crate::common::rng::SeededRng;
use crate::models::PricePoint;

/// Parameters for the synthetic series.
#[derive(Debug, Clone, Copy)]
pub struct HistoryParams {
    pub seed: i64,
    pub days: usize,
    pub base_price: f64,
    pub start_date: NaiveDate,
    /// Constant per-day upward drift.
    pub drift: f64,
}

impl Default for HistoryParams {
    fn default() -> Self {
        Self {
            seed: 42,
            days: 365,
            base_price: 1950.0,
            // 2024-01-01 is always a valid date.
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            drift: 0.15,
        }
    }
}

/// Build the full synthetic series with default parameters.
pub fn build_price_history(seed: i64) -> Vec<PricePoint> {
    build_with(HistoryParams {
        seed,
        ..HistoryParams::default()
    })
}

/// Build one point per calendar day: a drifting random walk plus a
/// 180-day-period seasonal oscillation, rounded to 2 decimals.
pub fn build_with(params: HistoryParams) -> Vec<PricePoint> {
    let mut rng = SeededRng::new(params.seed);
    let mut price = params.base_price;
    let mut data = Vec::with_capacity(params.days);

    for i in 0..params.days {
        let seasonal = 30.0 * (2.0 * std::f64::consts::PI * i as f64 / 180.0).sin();
        let noise = (rng.next_f64() - 0.5) * 20.0;

        price += params.drift + noise * 0.3;
        let display_price = round2(price + seasonal);

        data.push(PricePoint {
            date: params.start_date + Duration::days(i as i64),
            price: display_price,
        });
    }

    data
}
