//! Fetch-limit handling for feed-style endpoints.

use serde::{Deserialize, Serialize};

/// A bounded fetch limit with a default.
///
/// Feed endpoints accept an optional `limit` query parameter; the service
/// layer resolves it against a `FetchLimit` so that absent values fall back
/// to the configured default and oversized values are clamped rather than
/// rejected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FetchLimit {
    /// Value used when the caller does not supply a limit.
    pub default: u32,
    /// Upper bound; requested limits above this are clamped down.
    pub max: u32,
}

impl FetchLimit {
    /// Create a new fetch limit.
    pub fn new(default: u32, max: u32) -> Self {
        Self {
            default: default.min(max).max(1),
            max: max.max(1),
        }
    }

    /// Resolve an optional requested limit into an SQL-ready value.
    ///
    /// `None` resolves to the default; any explicit value is clamped to
    /// `0..=max`. An explicit zero is honored and yields an empty page.
    pub fn resolve(&self, requested: Option<u32>) -> i64 {
        i64::from(requested.unwrap_or(self.default).min(self.max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults_when_absent() {
        let limit = FetchLimit::new(10, 50);
        assert_eq!(limit.resolve(None), 10);
    }

    #[test]
    fn test_resolve_clamps_oversized() {
        let limit = FetchLimit::new(10, 50);
        assert_eq!(limit.resolve(Some(500)), 50);
    }

    #[test]
    fn test_resolve_honors_explicit_zero() {
        let limit = FetchLimit::new(10, 50);
        assert_eq!(limit.resolve(Some(0)), 0);
    }

    #[test]
    fn test_new_keeps_default_within_max() {
        let limit = FetchLimit::new(80, 50);
        assert_eq!(limit.resolve(None), 50);
    }
}
