//! Unit tests for the refresh scheduler

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use goldsight::{Config, DashboardSession, RefreshScheduler};

fn shared_session() -> Arc<RwLock<DashboardSession>> {
    Arc::new(RwLock::new(DashboardSession::new(Config::default())))
}

#[test]
fn test_zero_interval_is_rejected() {
    assert!(RefreshScheduler::new(shared_session(), 0).is_err());
}

#[tokio::test]
async fn test_lifecycle_flags() {
    let scheduler = RefreshScheduler::new(shared_session(), 300).unwrap();
    assert_eq!(scheduler.interval_seconds(), 300);
    assert!(!scheduler.is_running().await);

    scheduler.start().await;
    assert!(scheduler.is_running().await);

    scheduler.stop().await;
    assert!(!scheduler.is_running().await);
}

#[test]
fn test_stop_without_start_is_harmless() {
    tokio_test::block_on(async {
        let scheduler = RefreshScheduler::new(shared_session(), 60).unwrap();
        scheduler.stop().await;
        assert!(!scheduler.is_running().await);
    });
}

#[tokio::test]
async fn test_ticks_drive_session_refresh() {
    let session = shared_session();
    let scheduler = RefreshScheduler::new(session.clone(), 1).unwrap();

    scheduler.start().await;
    // a 1-second cadence must fire at least once in 2.5 seconds
    tokio::time::sleep(Duration::from_millis(2500)).await;
    scheduler.stop().await;

    let counter = session.read().await.refresh_counter();
    assert!(counter >= 1, "no refresh after 2.5s at 1s cadence");
}
