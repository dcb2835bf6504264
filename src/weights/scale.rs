//! Sub-factor weight scaling and the category-total feedback path.

use std::collections::HashMap;

use crate::common::math::{round1, round_half};
use crate::factors::catalog::category_template;
use crate::models::{CategoryId, CategoryWeights, SubFactorWeights};

use super::redistribute::redistribute_category_weight;

/// Hard ceiling for any single sub-factor weight, in percentage points.
const SUB_FACTOR_MAX: f64 = 20.0;

/// Threshold at which a category-total drift feeds back into category
/// weight redistribution.
const FEEDBACK_EPSILON: f64 = 0.1;

/// Sum of a category's effective sub-factor weights (overrides falling back
/// to catalog defaults).
pub fn sub_factor_sum(category: CategoryId, weights: &SubFactorWeights) -> f64 {
    category_template(category)
        .sub_factors
        .iter()
        .map(|sf| weights.resolve(category, sf.name, sf.weight))
        .sum()
}

/// Rescale one category's sub-factor weights so they sum to the category's
/// new weight while preserving their relative proportions.
///
/// Each weight snaps to the nearest 0.5 and is clamped to [0, 20]; a
/// residual of at least 0.5 is credited in full to the currently largest
/// sub-factor (catalog order breaks ties). A new weight of 0 zeroes the
/// whole category. With a zero current sum there are no proportions to
/// preserve and the configuration is returned unchanged.
pub fn scale_sub_factor_weights(
    category: CategoryId,
    new_category_weight: f64,
    current: &SubFactorWeights,
) -> SubFactorWeights {
    let template = category_template(category);
    let mut updated = current.clone();

    let current_sum = sub_factor_sum(category, current);

    if current_sum > 0.0 && new_category_weight > 0.0 {
        let scale = new_category_weight / current_sum;
        let mut scaled: HashMap<String, f64> = HashMap::new();

        for sf in template.sub_factors {
            let value = current.resolve(category, sf.name, sf.weight);
            let next = round_half(value * scale).clamp(0.0, SUB_FACTOR_MAX);
            scaled.insert(sf.name.to_string(), next);
        }

        let scaled_sum: f64 = scaled.values().sum();
        let residual = round_half(new_category_weight - scaled_sum);
        if residual.abs() >= 0.5 {
            let largest = template
                .sub_factors
                .iter()
                .map(|sf| sf.name)
                .reduce(|a, b| if scaled[a] >= scaled[b] { a } else { b })
                .unwrap();
            let corrected = (scaled[largest] + residual).clamp(0.0, SUB_FACTOR_MAX);
            scaled.insert(largest.to_string(), corrected);
        }

        updated.set_category(category, scaled);
    } else if new_category_weight == 0.0 {
        let zeroed = template
            .sub_factors
            .iter()
            .map(|sf| (sf.name.to_string(), 0.0))
            .collect();
        updated.set_category(category, zeroed);
    }

    updated
}

/// Apply one sub-factor edit and propagate its effect upward.
///
/// The edited value is authoritative: the category's weight becomes the new
/// sub-factor total (rounded to 1 decimal), and if that moved by at least
/// 0.1 points the other categories are redistributed to keep the 100-point
/// total. Propagation never runs back down in the same edit.
pub fn apply_sub_factor_edit(
    category: CategoryId,
    name: &str,
    new_value: f64,
    current_sub: &SubFactorWeights,
    current_categories: &CategoryWeights,
) -> (SubFactorWeights, CategoryWeights) {
    let mut updated_sub = current_sub.clone();
    updated_sub.set(category, name, new_value);

    let new_category_weight = round1(sub_factor_sum(category, &updated_sub));
    let updated_categories =
        if (new_category_weight - current_categories.get(category)).abs() >= FEEDBACK_EPSILON {
            redistribute_category_weight(category, new_category_weight, current_categories)
        } else {
            *current_categories
        };

    (updated_sub, updated_categories)
}
