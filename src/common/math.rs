//! Rounding and aggregation helpers
//!
//! All externally observable monetary values carry 2-decimal precision,
//! category weights carry 1-decimal precision, and sub-factor weights snap
//! to the nearest 0.5. Rounding always happens at these fixed grids so that
//! residual-correction steps can reason about exact representable values.

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 1 decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to the nearest 0.5.
pub fn round_half(value: f64) -> f64 {
    (value * 2.0).round() / 2.0
}

/// Arithmetic mean. Returns 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance (divides by n-1). Returns 0.0 with fewer than 2 values.
pub fn sample_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64
}
