//! Proportional redistribution of category weights.

use crate::common::math::round1;
use crate::models::{CategoryId, CategoryWeights};

/// Conventional sum of all category weights, in percentage points.
pub const TOTAL_WEIGHT: f64 = 100.0;

/// Rounding residuals below this are left alone rather than corrected.
const RESIDUAL_EPSILON: f64 = 0.01;

/// Set one category to `new_weight` and shrink or grow the others in
/// proportion to their current share, keeping the total at 100.
///
/// Each adjusted weight is rounded to 1 decimal and floored at 0. The
/// residual rounding error is then credited in full to whichever *other*
/// category holds the largest weight; catalog order breaks ties. Never
/// produces a negative weight.
///
/// If every other category is already at zero there is nothing to absorb
/// the difference and the 100-point invariant is knowingly violated; that
/// state is only reachable by forcing one category to the whole budget
/// first.
pub fn redistribute_category_weight(
    changed: CategoryId,
    new_weight: f64,
    current: &CategoryWeights,
) -> CategoryWeights {
    let diff = new_weight - current.get(changed);
    let mut updated = *current;
    updated.set(changed, new_weight);
    if diff == 0.0 {
        return updated;
    }

    let others: Vec<CategoryId> = CategoryId::ALL
        .iter()
        .copied()
        .filter(|id| *id != changed)
        .collect();
    let other_total: f64 = others.iter().map(|id| current.get(*id)).sum();
    if other_total <= 0.0 {
        return updated;
    }

    let remaining = -diff;
    for id in &others {
        let proportion = current.get(*id) / other_total;
        let adjustment = round1(remaining * proportion);
        updated.set(*id, round1(current.get(*id) + adjustment).max(0.0));
    }

    let rounding_error = round1(TOTAL_WEIGHT - updated.total());
    if rounding_error.abs() > RESIDUAL_EPSILON {
        // First-encountered wins on ties, so catalog order decides.
        let largest = others
            .iter()
            .copied()
            .reduce(|a, b| if updated.get(a) >= updated.get(b) { a } else { b })
            .unwrap();
        updated.set(largest, round1(updated.get(largest) + rounding_error));
    }

    updated
}
