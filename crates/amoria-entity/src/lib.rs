//! # amoria-entity
//!
//! Domain entity models for the Amoria backend. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod activity;
pub mod announcement;
pub mod favorite;
pub mod matching;
pub mod member;
pub mod message;
pub mod notification;
pub mod photo;
pub mod profile_view;
pub mod report;
pub mod support;
