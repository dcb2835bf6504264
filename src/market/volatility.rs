//! Historical-vs-implied volatility series generator.

use chrono::{Duration, NaiveDate};

use crate::common::math::round2;
use crate::common::rng::SeededRng;
use crate::models::VolatilityPoint;

/// Number of daily points in the generated window.
const WINDOW_DAYS: usize = 30;

/// Generate a 30-day volatility history ending at `last_date`.
///
/// Historical vol is drawn in the 12-20% band; implied vol tracks it with a
/// slight upward skew and a 5% floor. The generator instance is owned by the
/// caller so this draw never perturbs other consumers.
pub fn generate_volatility_history(rng: &mut SeededRng, last_date: NaiveDate) -> Vec<VolatilityPoint> {
    let base = last_date - Duration::days(WINDOW_DAYS as i64 - 1);
    let mut points = Vec::with_capacity(WINDOW_DAYS);

    for i in 0..WINDOW_DAYS {
        let historical = 12.0 + rng.next_f64() * 8.0;
        let implied = historical + (rng.next_f64() - 0.4) * 5.0;

        points.push(VolatilityPoint {
            date: base + Duration::days(i as i64),
            historical: round2(historical),
            implied: round2(implied.max(5.0)),
        });
    }

    points
}
