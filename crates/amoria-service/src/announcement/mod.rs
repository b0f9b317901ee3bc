//! Site announcement delivery.

pub mod eligibility;
pub mod service;

pub use service::AnnouncementService;
