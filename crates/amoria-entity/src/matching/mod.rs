//! Match and match-request domain entities.

pub mod model;
pub mod request;

pub use model::Match;
pub use request::{MatchRequest, MatchRequestStatus};
