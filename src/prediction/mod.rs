//! Linear-regression price forecast with a widening confidence interval.

use chrono::Duration;

use crate::common::math::round2;
use crate::models::{PredictionPoint, PricePoint};

/// Number of trailing points the regression is fitted over.
const FIT_WINDOW: usize = 30;

/// 95% two-sided z-score used to scale the interval.
const Z_95: f64 = 1.96;

struct Fit {
    slope: f64,
    intercept: f64,
}

/// Ordinary least squares of price against index 0..n.
fn linear_regression(points: &[PricePoint]) -> Fit {
    let n = points.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;

    for (i, point) in points.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += point.price;
        sum_xy += x * point.price;
        sum_x2 += x * x;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_x2 - sum_x * sum_x);
    let intercept = (sum_y - slope * sum_x) / n;

    Fit { slope, intercept }
}

/// Project `horizon_days` of daily forecasts from the trailing 30-point fit.
///
/// The interval margin is `1.96 * sigma * sqrt(days ahead)`, a random-walk
/// style growth heuristic rather than a rigorous prediction interval. With
/// fewer than 3 points the residual variance denominator (n-2) degenerates
/// and the forecast is empty; callers keep the history at 30+ points.
pub fn compute_predictions(data: &[PricePoint], horizon_days: usize) -> Vec<PredictionPoint> {
    if data.len() < 3 {
        return Vec::new();
    }

    let window_start = data.len().saturating_sub(FIT_WINDOW);
    let window = &data[window_start..];
    let fit = linear_regression(window);
    let last_index = (window.len() - 1) as f64;

    let sum_squared_residuals: f64 = window
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let fitted = fit.intercept + fit.slope * i as f64;
            (point.price - fitted).powi(2)
        })
        .sum();
    let std_dev = (sum_squared_residuals / (window.len() - 2) as f64).sqrt();

    let last_date = data[data.len() - 1].date;
    let mut predictions = Vec::with_capacity(horizon_days);

    for i in 1..=horizon_days {
        let predicted = fit.intercept + fit.slope * (last_index + i as f64);
        let margin = Z_95 * std_dev * (i as f64).sqrt();

        predictions.push(PredictionPoint {
            date: last_date + Duration::days(i as i64),
            predicted: round2(predicted),
            upper_bound: round2(predicted + margin),
            lower_bound: round2(predicted - margin),
        });
    }

    predictions
}
