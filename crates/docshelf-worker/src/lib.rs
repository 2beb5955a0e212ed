//! Scheduled maintenance for the document store.
//!
//! The only recurring task is the trash sweep, which purges documents
//! whose retention window has lapsed. Jobs are registered with a cron
//! scheduler and can also be invoked directly, which is what the
//! sweep-on-start path does.

pub mod jobs;
pub mod scheduler;

pub use jobs::{JobExecutionError, MaintenanceJob, SweepJob};
pub use scheduler::{MaintenanceScheduler, run_now};
