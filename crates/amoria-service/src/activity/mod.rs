//! Admin dashboard activity aggregation.

pub mod rank;
pub mod service;

pub use service::ActivityService;
