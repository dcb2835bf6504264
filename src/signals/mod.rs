//! Signal aggregation: composite bias scoring.

pub mod bias;

pub use bias::compute_bias_score;
