//! # amoria-core
//!
//! Core crate for the Amoria backend. Contains configuration schemas,
//! typed identifiers, fetch-limit handling, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Amoria crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
