//! Custom Axum extractors.

pub mod auth;
pub mod limit;

pub use auth::AuthUser;
pub use limit::LimitQuery;
