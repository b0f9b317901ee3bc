//! Photo domain entities.

pub mod model;

pub use model::Photo;
