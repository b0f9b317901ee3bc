//! Scheduled retention maintenance for Amoria.
//!
//! This crate provides:
//! - Retention sweeps that prune aged dismissal and profile view records
//! - A cron scheduler that runs the sweeps on a nightly cadence

pub mod scheduler;
pub mod sweeper;

pub use scheduler::SweepScheduler;
pub use sweeper::RetentionSweeper;
