//! Unit tests for ATR

use chrono::NaiveDate;
use goldsight::indicators::compute_atr;
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
fn test_short_series_is_zero() {
    let prices: Vec<f64> = (1..=10).map(|v| v as f64).collect();
    assert_eq!(compute_atr(&series(&prices), 14), 0.0);
}

#[test]
fn test_mean_absolute_change() {
    // |+1| and |-0.5| over a 2-day window
    assert_eq!(compute_atr(&series(&[10.0, 11.0, 10.5]), 2), 0.75);
}

#[test]
fn test_flat_series_is_zero() {
    assert_eq!(compute_atr(&series(&[100.0; 20]), 14), 0.0);
}

#[test]
fn test_direction_insensitive() {
    let up = compute_atr(&series(&[10.0, 11.0, 12.0]), 2);
    let down = compute_atr(&series(&[12.0, 11.0, 10.0]), 2);
    assert_eq!(up, down);
}
