//! Abuse report domain entities.

pub mod model;
pub mod status;

pub use model::Report;
pub use status::ReportStatus;
