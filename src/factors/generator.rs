//! Factor hierarchy generation: signal draw and weighted scoring.
//!
//! Drawing signals and scoring them are deliberately separate steps. A
//! refresh redraws signals from a fresh generator; a weight edit only
//! re-scores the existing draw. Conflating the two would make weight edits
//! perturb the random stream.

use crate::common::rng::SeededRng;
use crate::common::math::round2;
use crate::models::{BiasSignal, CategoryWeights, FactorCategory, SubFactorWeights, SubParameter};

use super::catalog::TEMPLATES;

/// One signal per sub-factor, outer vector in catalog category order.
pub type SignalDraw = Vec<Vec<BiasSignal>>;

/// Normalized factor score above which a category reads bullish (and below
/// whose negation it reads bearish).
const CATEGORY_SIGNAL_THRESHOLD: f64 = 0.15;

/// Asymmetric partition of the unit interval: 35% bullish, 30% neutral,
/// 35% bearish. The asymmetry is intentional; keep it exact.
fn draw_signal(rng: &mut SeededRng) -> BiasSignal {
    let r = rng.next_f64();
    if r < 0.35 {
        BiasSignal::Bullish
    } else if r < 0.65 {
        BiasSignal::Neutral
    } else {
        BiasSignal::Bearish
    }
}

/// Draw one signal per catalog sub-factor, in catalog order.
pub fn draw_signals(rng: &mut SeededRng) -> SignalDraw {
    TEMPLATES
        .iter()
        .map(|tmpl| tmpl.sub_factors.iter().map(|_| draw_signal(rng)).collect())
        .collect()
}

/// Score an existing signal draw against the current weight configuration.
///
/// `signals` must be shaped like the catalog (one inner vector per category,
/// one entry per sub-factor). Missing weight configurations fall back to
/// catalog defaults.
pub fn build_categories(
    signals: &SignalDraw,
    category_weights: Option<&CategoryWeights>,
    sub_weights: Option<&SubFactorWeights>,
) -> Vec<FactorCategory> {
    TEMPLATES
        .iter()
        .zip(signals)
        .map(|(tmpl, category_signals)| {
            let weight = match category_weights {
                Some(cw) => cw.get(tmpl.id) / 100.0,
                None => tmpl.default_weight,
            };

            let sub_parameters: Vec<SubParameter> = tmpl
                .sub_factors
                .iter()
                .zip(category_signals)
                .map(|(sf, signal)| SubParameter {
                    name: sf.name.to_string(),
                    signal: *signal,
                    weight: sub_weights
                        .map(|w| w.resolve(tmpl.id, sf.name, sf.weight))
                        .unwrap_or(sf.weight),
                    detail: sf.detail.to_string(),
                    relevant_horizons: sf.horizons.to_vec(),
                })
                .collect();

            let factor_score: f64 = sub_parameters
                .iter()
                .map(|sp| sp.signal.score() * sp.weight)
                .sum();
            let total_weight: f64 = sub_parameters.iter().map(|sp| sp.weight).sum();

            let signal = if total_weight > 0.0 {
                let normalized = factor_score / total_weight;
                if normalized > CATEGORY_SIGNAL_THRESHOLD {
                    BiasSignal::Bullish
                } else if normalized < -CATEGORY_SIGNAL_THRESHOLD {
                    BiasSignal::Bearish
                } else {
                    BiasSignal::Neutral
                }
            } else {
                BiasSignal::Neutral
            };

            FactorCategory {
                id: tmpl.id,
                name: tmpl.name.to_string(),
                icon: tmpl.icon.to_string(),
                weight,
                signal,
                factor_score: round2(factor_score),
                sub_parameters,
            }
        })
        .collect()
}

/// Draw and score in one step from an explicit seed.
pub fn generate_factor_hierarchy(
    seed: i64,
    category_weights: Option<&CategoryWeights>,
    sub_weights: Option<&SubFactorWeights>,
) -> Vec<FactorCategory> {
    let mut rng = SeededRng::new(seed);
    let signals = draw_signals(&mut rng);
    build_categories(&signals, category_weights, sub_weights)
}
