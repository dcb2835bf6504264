//! Unit tests for support / resistance levels

use chrono::NaiveDate;
use goldsight::indicators::{compute_support_resistance, SupportResistance};
use goldsight::models::PricePoint;

fn series(prices: &[f64]) -> Vec<PricePoint> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    prices
        .iter()
        .enumerate()
        .map(|(i, &price)| PricePoint {
            date: start + chrono::Duration::days(i as i64),
            price,
        })
        .collect()
}

#[test]
fn test_empty_series_is_zeroed() {
    let levels = compute_support_resistance(&[]);
    assert_eq!(levels, SupportResistance { support: 0.0, resistance: 0.0 });
}

#[test]
fn test_decile_means_with_sample_floor() {
    // 10 points: decile would be 1 sample, floor lifts it to 3
    let prices: Vec<f64> = (1..=10).map(|v| v as f64).collect();
    let levels = compute_support_resistance(&series(&prices));
    assert_eq!(levels.support, 2.0);
    assert_eq!(levels.resistance, 9.0);
}

#[test]
fn test_only_trailing_window_counts() {
    // 70 points; the first 10 fall outside the 60-day window
    let mut prices = vec![10_000.0; 10];
    prices.extend((1..=60).map(|v| v as f64));
    let levels = compute_support_resistance(&series(&prices));
    // 6 samples each end of the trailing 60
    assert_eq!(levels.support, 3.5);
    assert_eq!(levels.resistance, 57.5);
}

#[test]
fn test_support_never_exceeds_resistance() {
    let prices: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0).collect();
    let levels = compute_support_resistance(&series(&prices));
    assert!(levels.support <= levels.resistance);
}
