//! Limit query parameter for feed-shaped endpoints.

use serde::{Deserialize, Serialize};

/// Query parameters for endpoints returning a bounded list.
///
/// The raw value is passed through to the service layer, which clamps it
/// against the configured maximum.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LimitQuery {
    /// Requested number of items.
    pub limit: Option<u32>,
}
