//! Synthetic market data: price history, statistics, volatility, events.

pub mod events;
pub mod history;
pub mod statistics;
pub mod volatility;

pub use events::generate_risk_events;
pub use history::{build_price_history, HistoryParams};
pub use statistics::compute_statistics;
pub use volatility::generate_volatility_history;
