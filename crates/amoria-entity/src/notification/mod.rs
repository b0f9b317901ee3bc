//! Notification domain entities.
//!
//! Notifications are never stored as rows of their own; they are assembled
//! at read time from the underlying domain tables (favorites, matches,
//! messages, ...). Only dismissals are durable.

pub mod counts;
pub mod dismissal;
pub mod key;
pub mod kind;
pub mod model;

pub use counts::NotificationCounts;
pub use dismissal::Dismissal;
pub use key::NotificationKey;
pub use kind::{NavigationTarget, NotificationKind};
pub use model::Notification;
