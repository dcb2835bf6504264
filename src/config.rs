//! Environment-driven configuration.
//!
//! All knobs have compiled-in defaults and can be overridden through
//! `GOLDSIGHT_*` environment variables (a `.env` file is honored via
//! dotenvy). The engine itself never reads the environment; only this
//! module does.

use chrono::NaiveDate;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Runtime configuration for a dashboard session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Seed for the price history stream.
    pub base_seed: i64,
    /// Seed base for the signal draw; refresh `n` draws from `base + n`.
    pub signal_seed_base: i64,
    /// Seed base for the volatility-history stream.
    pub volatility_seed_base: i64,
    /// Periodic refresh interval; 0 disables the scheduler.
    pub refresh_interval_seconds: u64,
    pub history_days: usize,
    pub base_price: f64,
    pub start_date: NaiveDate,
    pub drift: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_seed: 42,
            signal_seed_base: 7,
            volatility_seed_base: 99,
            refresh_interval_seconds: 300,
            history_days: 365,
            base_price: 1950.0,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            drift: 0.15,
        }
    }
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    /// for unset variables. Set variables that fail to parse are an error.
    pub fn from_env() -> Result<Self, BoxError> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        Ok(Self {
            base_seed: parse_var("GOLDSIGHT_BASE_SEED", defaults.base_seed)?,
            signal_seed_base: parse_var("GOLDSIGHT_SIGNAL_SEED", defaults.signal_seed_base)?,
            volatility_seed_base: parse_var(
                "GOLDSIGHT_VOLATILITY_SEED",
                defaults.volatility_seed_base,
            )?,
            refresh_interval_seconds: parse_var(
                "GOLDSIGHT_REFRESH_INTERVAL_SECONDS",
                defaults.refresh_interval_seconds,
            )?,
            history_days: parse_var("GOLDSIGHT_HISTORY_DAYS", defaults.history_days)?,
            base_price: parse_var("GOLDSIGHT_BASE_PRICE", defaults.base_price)?,
            start_date: parse_var("GOLDSIGHT_START_DATE", defaults.start_date)?,
            drift: parse_var("GOLDSIGHT_DRIFT", defaults.drift)?,
        })
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T, BoxError>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e: T::Err| format!("invalid {name}: {e}").into()),
        Err(_) => Ok(default),
    }
}

/// Deployment environment, used to pick the log formatter.
pub fn get_environment() -> String {
    std::env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}
