//! Admin dashboard activity entities.

pub mod item;
pub mod kind;
pub mod stats;

pub use item::ActivityItem;
pub use kind::ActivityKind;
pub use stats::SystemStats;
