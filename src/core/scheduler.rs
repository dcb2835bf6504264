//! Periodic refresh scheduler for a dashboard session.

use std::str::FromStr;
use std::sync::Arc;

use cron::Schedule;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::session::DashboardSession;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Scheduler that periodically triggers a session refresh.
///
/// Owned timer with an explicit start/stop lifecycle: dropping or stopping
/// the scheduler cancels the task, and no refresh outlives its session
/// handle.
pub struct RefreshScheduler {
    session: Arc<RwLock<DashboardSession>>,
    schedule: Schedule,
    interval_seconds: u64,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl RefreshScheduler {
    /// Create a scheduler firing every `interval_seconds`.
    ///
    /// An interval of 0 disables scheduling and is rejected here rather
    /// than spinning a hot loop.
    pub fn new(
        session: Arc<RwLock<DashboardSession>>,
        interval_seconds: u64,
    ) -> Result<Self, BoxError> {
        if interval_seconds == 0 {
            return Err("Scheduler disabled: interval_seconds is 0".into());
        }

        // Cron format: second minute hour day month weekday
        let cron_expr = if interval_seconds >= 60 {
            format!("0 */{} * * * *", interval_seconds / 60)
        } else {
            format!("*/{} * * * * *", interval_seconds)
        };

        let schedule = Schedule::from_str(&cron_expr)
            .map_err(|e| format!("invalid cron expression '{cron_expr}': {e}"))?;

        info!(
            interval = interval_seconds,
            cron = %cron_expr,
            "RefreshScheduler: created"
        );

        Ok(Self {
            session,
            schedule,
            interval_seconds,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    pub fn interval_seconds(&self) -> u64 {
        self.interval_seconds
    }

    /// Start the refresh loop.
    pub async fn start(&self) {
        let session = self.session.clone();
        let schedule = self.schedule.clone();
        let handle_arc = self.handle.clone();

        let handle = tokio::spawn(async move {
            info!("RefreshScheduler: started, waiting for next tick");

            loop {
                let mut upcoming = schedule.upcoming(chrono::Utc);
                if let Some(next_tick) = upcoming.next() {
                    let now = chrono::Utc::now();
                    if next_tick > now {
                        let duration = (next_tick - now).to_std().unwrap_or_default();
                        tokio::time::sleep(duration).await;
                    }
                } else {
                    tokio::time::sleep(tokio::time::Duration::from_secs(60)).await;
                    continue;
                }

                let mut session = session.write().await;
                session.refresh();
                debug!(
                    counter = session.refresh_counter(),
                    "RefreshScheduler: tick complete"
                );
            }
        });

        {
            let mut h = handle_arc.write().await;
            *h = Some(handle);
        }

        info!("RefreshScheduler: started successfully");
    }

    /// Stop the refresh loop.
    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("RefreshScheduler: stopped");
        }
    }

    /// Check if the scheduler is running.
    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.is_some()
    }
}
