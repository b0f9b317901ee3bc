//! Notification assembly, counts, and read/dismiss state.

pub mod assemble;
pub mod service;

pub use service::NotificationService;
