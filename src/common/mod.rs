//! Shared numeric helpers used across the engine layers.

pub mod math;
pub mod rng;

pub use rng::SeededRng;
