//! Session ownership and refresh scheduling.

pub mod scheduler;
pub mod session;

pub use scheduler::RefreshScheduler;
pub use session::{DashboardSession, DashboardSnapshot};
