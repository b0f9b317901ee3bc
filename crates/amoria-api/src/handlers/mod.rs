//! HTTP request handlers.

pub mod announcement;
pub mod dashboard;
pub mod health;
pub mod notification;
