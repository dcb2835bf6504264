//! Unit tests for the statistics calculator

use chrono::NaiveDate;
use goldsight::market::history::build_price_history;
use goldsight::market::statistics::compute_statistics;
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
fn test_empty_series() {
    let stats = compute_statistics(&[]);
    assert_eq!(stats.current_price, 0.0);
    assert_eq!(stats.daily_change, 0.0);
    assert_eq!(stats.volatility, 0.0);
}

#[test]
fn test_single_point_degrades_daily_change_to_zero() {
    let stats = compute_statistics(&series(&[100.0]));
    assert_eq!(stats.current_price, 100.0);
    assert_eq!(stats.daily_change, 0.0);
    assert_eq!(stats.daily_change_percent, 0.0);
}

#[test]
fn test_two_point_series() {
    let stats = compute_statistics(&series(&[100.0, 110.0]));
    assert_eq!(stats.current_price, 110.0);
    assert_eq!(stats.daily_change, 10.0);
    assert_eq!(stats.daily_change_percent, 10.0);
    assert_eq!(stats.high_52w, 110.0);
    assert_eq!(stats.low_52w, 100.0);
    assert_eq!(stats.average, 105.0);
    // single return, sample variance degenerates to 0
    assert_eq!(stats.volatility, 0.0);
}

#[test]
fn test_inr_mirror_from_rounded_usd() {
    let stats = compute_statistics(&series(&[100.0, 110.0]));
    // 110 / 3.11035 * 84.50, rounded to 2 decimals
    assert!((stats.current_price_inr - 2988.41).abs() < 0.011);
}

#[test]
fn test_seed_42_regression() {
    let stats = compute_statistics(&build_price_history(42));
    assert!((stats.current_price - 1983.62).abs() < 0.011);
    assert!((stats.daily_change - 3.82).abs() < 0.011);
    assert!((stats.daily_change_percent - 0.19).abs() < 0.011);
    assert!((stats.high_52w - 1988.79).abs() < 0.011);
    assert!((stats.low_52w - 1911.94).abs() < 0.011);
    assert!((stats.average - 1956.34).abs() < 0.011);
    assert!((stats.volatility - 1.47).abs() < 0.011);
    assert!((stats.current_price_inr - 53_889.72).abs() < 0.5);
}

#[test]
fn test_constant_series_has_zero_volatility() {
    let stats = compute_statistics(&series(&[100.0; 20]));
    assert_eq!(stats.volatility, 0.0);
    assert_eq!(stats.high_52w, stats.low_52w);
}
