//! Core type definitions used across the Amoria workspace.

pub mod id;
pub mod limit;

pub use id::*;
pub use limit::FetchLimit;
