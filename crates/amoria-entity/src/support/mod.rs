//! Member-to-support message domain entities.

pub mod model;

pub use model::AdminMessage;
