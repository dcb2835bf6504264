//! Factor hierarchy: static catalog and signal-driven generation.

pub mod catalog;
pub mod generator;

pub use catalog::{category_template, CategoryTemplate, SubFactorTemplate, TEMPLATES};
pub use generator::{build_categories, draw_signals, generate_factor_hierarchy, SignalDraw};
