use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use goldsight::config::Config;
use goldsight::core::{DashboardSession, RefreshScheduler};
use goldsight::logging::init_logging;
use goldsight::models::CategoryId;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging();

    let config = Config::from_env()?;
    let refresh_interval = config.refresh_interval_seconds;
    let session = Arc::new(RwLock::new(DashboardSession::new(config)));

    let scheduler = RefreshScheduler::new(session.clone(), refresh_interval)?;
    scheduler.start().await;

    {
        let session = session.read().await;
        let snapshot = session.snapshot();
        info!(
            current_price = snapshot.statistics.current_price,
            daily_change = snapshot.statistics.daily_change,
            volatility = snapshot.statistics.volatility,
            "market statistics"
        );
        info!(
            total_score = snapshot.bias.total_score,
            up_probability = snapshot.bias.up_probability,
            state = snapshot.bias.market_state.label(),
            confidence = snapshot.bias.confidence,
            "bias score"
        );
        println!("{}", serde_json::to_string_pretty(&snapshot.bias)?);
    }

    // Re-weight Global Macro and show how the composite score follows.
    {
        let mut session = session.write().await;
        session.set_category_weight(CategoryId::GlobalMacro, 50.0);
        let snapshot = session.snapshot();
        info!(
            total_score = snapshot.bias.total_score,
            total_weight = session.category_weights().total(),
            "bias score after re-weighting global_macro to 50"
        );
    }

    scheduler.stop().await;
    Ok(())
}
