//! Weight redistribution and sub-factor scaling.
//!
//! All operations here are pure functions from an old configuration to a
//! complete new one. The category and sub-factor structures are kept
//! mutually consistent by treating whichever side was edited as the
//! authoritative trigger and propagating in one direction only.

pub mod redistribute;
pub mod scale;

pub use redistribute::{redistribute_category_weight, TOTAL_WEIGHT};
pub use scale::{apply_sub_factor_edit, scale_sub_factor_weights, sub_factor_sum};
