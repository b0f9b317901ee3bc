//! Router-level integration tests.
//!
//! These run against the real router with a lazy database pool, so auth
//! and validation behavior is exercised without a running PostgreSQL.
//! Flows that need real data are marked `#[ignore]` and expect the
//! `DATABASE_URL` environment to point at a migratable database.

mod helpers;

mod auth_test;
mod health_test;
mod notification_test;
