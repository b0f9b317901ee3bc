//! Profile view domain entities.

pub mod model;

pub use model::ProfileView;
