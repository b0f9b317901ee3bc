//! Business logic services for Amoria.
//!
//! Services sit between the HTTP layer and the repositories. They own
//! authorization decisions (admin gates), merge rows from multiple
//! repositories into feed items, and decide how failures degrade.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod activity;
pub mod announcement;
pub mod context;
pub mod notification;

pub use activity::ActivityService;
pub use announcement::AnnouncementService;
pub use context::RequestContext;
pub use notification::NotificationService;
