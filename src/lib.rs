//! GoldSight core: a deterministic bias-scoring engine for a synthetic
//! gold price series.
//!
//! The engine derives technical and statistical summaries from a seeded
//! price history, scores a fixed hierarchy of weighted factor categories,
//! and keeps the two-level weight configuration consistent under
//! interactive edits. Everything externally observable is a pure
//! derivation; the only mutable state is owned by [`core::DashboardSession`].

pub mod common;
pub mod config;
pub mod core;
pub mod factors;
pub mod indicators;
pub mod logging;
pub mod market;
pub mod models;
pub mod prediction;
pub mod signals;
pub mod weights;

pub use crate::config::Config;
pub use crate::core::{DashboardSession, DashboardSnapshot, RefreshScheduler};
