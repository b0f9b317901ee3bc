//! # amoria-api
//!
//! HTTP API layer for Amoria built on Axum.
//!
//! Provides the REST endpoints, middleware (auth, RBAC, CORS), extractors,
//! DTOs, and error mapping, plus the `run_server` composition root that
//! wires repositories, services, and the retention worker together.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
