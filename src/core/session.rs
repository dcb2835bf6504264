//! Dashboard session: the single owner of mutable state.
//!
//! The session owns the two weight configurations, the current signal
//! draw, and the view settings. Every derivation lives in a snapshot that
//! is replaced wholesale after each mutation, so consumers never observe a
//! partially recomputed state.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::common::rng::SeededRng;
use crate::config::Config;
use crate::factors::catalog::category_template;
use crate::factors::generator::{build_categories, draw_signals, SignalDraw};
use crate::indicators::compute_technical_indicators;
use crate::market::history::{build_with, HistoryParams};
use crate::market::{compute_statistics, generate_risk_events, generate_volatility_history};
use crate::models::{
    BiasScoreData, CategoryId, CategoryWeights, FactorCategory, PredictionHorizon,
    PredictionPoint, PricePoint, RiskEvent, Statistics, SubFactorWeights, TechnicalIndicators,
    TimeRange, VolatilityPoint,
};
use crate::prediction::compute_predictions;
use crate::signals::compute_bias_score;
use crate::weights::{
    apply_sub_factor_edit, redistribute_category_weight, scale_sub_factor_weights,
};

/// Fully derived dashboard state. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub filtered_data: Vec<PricePoint>,
    pub statistics: Statistics,
    pub bias: BiasScoreData,
    pub factor_categories: Vec<FactorCategory>,
    pub technical_indicators: TechnicalIndicators,
    pub predictions: Vec<PredictionPoint>,
    pub risk_events: Vec<RiskEvent>,
    pub volatility_history: Vec<VolatilityPoint>,
    pub last_updated: DateTime<Utc>,
}

/// Owning session over the synthetic market and the weight configuration.
pub struct DashboardSession {
    config: Config,
    history: Vec<PricePoint>,
    signals: SignalDraw,
    category_weights: CategoryWeights,
    sub_factor_weights: SubFactorWeights,
    refresh_counter: u64,
    time_range: TimeRange,
    prediction_horizon: PredictionHorizon,
    snapshot: DashboardSnapshot,
}

impl DashboardSession {
    /// Build a session: generate the price history once, draw the initial
    /// signals, and compute the first snapshot.
    pub fn new(config: Config) -> Self {
        let history = build_with(HistoryParams {
            seed: config.base_seed,
            days: config.history_days,
            base_price: config.base_price,
            start_date: config.start_date,
            drift: config.drift,
        });

        let mut rng = SeededRng::new(config.signal_seed_base);
        let signals = draw_signals(&mut rng);
        let category_weights = CategoryWeights::default();
        let sub_factor_weights = SubFactorWeights::new();
        let time_range = TimeRange::SixMonths;
        let prediction_horizon = PredictionHorizon::Month;

        let snapshot = compute_snapshot(
            &config,
            &history,
            &signals,
            &category_weights,
            &sub_factor_weights,
            0,
            time_range,
            prediction_horizon,
        );

        info!(history_points = history.len(), "DashboardSession: initialized");

        Self {
            config,
            history,
            signals,
            category_weights,
            sub_factor_weights,
            refresh_counter: 0,
            time_range,
            prediction_horizon,
            snapshot,
        }
    }

    /// Current derived snapshot.
    pub fn snapshot(&self) -> &DashboardSnapshot {
        &self.snapshot
    }

    pub fn category_weights(&self) -> &CategoryWeights {
        &self.category_weights
    }

    pub fn sub_factor_weights(&self) -> &SubFactorWeights {
        &self.sub_factor_weights
    }

    pub fn refresh_counter(&self) -> u64 {
        self.refresh_counter
    }

    pub fn time_range(&self) -> TimeRange {
        self.time_range
    }

    pub fn prediction_horizon(&self) -> PredictionHorizon {
        self.prediction_horizon
    }

    /// Change the chart window and recompute.
    pub fn set_time_range(&mut self, range: TimeRange) {
        self.time_range = range;
        self.recompute();
    }

    /// Change the forecast horizon and recompute.
    pub fn set_prediction_horizon(&mut self, horizon: PredictionHorizon) {
        self.prediction_horizon = horizon;
        self.recompute();
    }

    /// Move one category's weight, redistribute the others, rescale the
    /// category's sub-factors, and recompute. Weight edits re-score the
    /// existing signal draw; they never redraw it.
    pub fn set_category_weight(&mut self, category: CategoryId, new_weight: f64) {
        if new_weight == self.category_weights.get(category) {
            return;
        }

        self.category_weights =
            redistribute_category_weight(category, new_weight, &self.category_weights);
        self.sub_factor_weights =
            scale_sub_factor_weights(category, new_weight, &self.sub_factor_weights);

        debug!(
            category = category.as_str(),
            new_weight,
            total = self.category_weights.total(),
            "DashboardSession: category weight updated"
        );
        self.recompute();
    }

    /// Edit one sub-factor weight; the category total follows the edit and
    /// feeds back into category redistribution when it drifts.
    pub fn set_sub_factor_weight(&mut self, category: CategoryId, name: &str, new_value: f64) {
        let (sub, categories) = apply_sub_factor_edit(
            category,
            name,
            new_value,
            &self.sub_factor_weights,
            &self.category_weights,
        );
        self.sub_factor_weights = sub;
        self.category_weights = categories;

        debug!(
            category = category.as_str(),
            sub_factor = name,
            new_value,
            "DashboardSession: sub-factor weight updated"
        );
        self.recompute();
    }

    /// Reset one category (and its sub-factors) to catalog defaults,
    /// redistributing the others around the restored weight.
    pub fn reset_category(&mut self, category: CategoryId) {
        let default_weight = category_template(category).default_weight * 100.0;
        self.category_weights =
            redistribute_category_weight(category, default_weight, &self.category_weights);
        self.sub_factor_weights.clear_category(category);
        self.recompute();
    }

    /// Reset both weight configurations to catalog defaults.
    pub fn reset_all(&mut self) {
        self.category_weights = CategoryWeights::default();
        self.sub_factor_weights = SubFactorWeights::new();
        self.recompute();
    }

    /// Redraw all signals from a fresh seed (`base + counter`) and
    /// recompute. Invoked manually or by the refresh scheduler.
    pub fn refresh(&mut self) {
        self.refresh_counter += 1;
        let seed = self.config.signal_seed_base + self.refresh_counter as i64;
        let mut rng = SeededRng::new(seed);
        self.signals = draw_signals(&mut rng);

        info!(
            counter = self.refresh_counter,
            "DashboardSession: refreshed signal draw"
        );
        self.recompute();
    }

    fn recompute(&mut self) {
        self.snapshot = compute_snapshot(
            &self.config,
            &self.history,
            &self.signals,
            &self.category_weights,
            &self.sub_factor_weights,
            self.refresh_counter,
            self.time_range,
            self.prediction_horizon,
        );
    }
}

/// Rebuild the full derived snapshot from its inputs.
#[allow(clippy::too_many_arguments)]
fn compute_snapshot(
    config: &Config,
    history: &[PricePoint],
    signals: &SignalDraw,
    category_weights: &CategoryWeights,
    sub_factor_weights: &SubFactorWeights,
    refresh_counter: u64,
    time_range: TimeRange,
    prediction_horizon: PredictionHorizon,
) -> DashboardSnapshot {
    let statistics = compute_statistics(history);
    let factor_categories: Vec<FactorCategory> =
        build_categories(signals, Some(category_weights), Some(sub_factor_weights));
    let bias = compute_bias_score(&factor_categories, &statistics);

    let last_date = history.last().map(|p| p.date).unwrap_or(config.start_date);
    let mut vol_rng = SeededRng::new(config.volatility_seed_base + refresh_counter as i64);

    let technical_indicators: TechnicalIndicators = compute_technical_indicators(history);
    let predictions: Vec<PredictionPoint> =
        compute_predictions(history, prediction_horizon.days());
    let risk_events: Vec<RiskEvent> = generate_risk_events(last_date);
    let volatility_history: Vec<VolatilityPoint> =
        generate_volatility_history(&mut vol_rng, last_date);

    DashboardSnapshot {
        filtered_data: time_range.filter(history).to_vec(),
        statistics,
        bias,
        factor_categories,
        technical_indicators,
        predictions,
        risk_events,
        volatility_history,
        last_updated: Utc::now(),
    }
}
