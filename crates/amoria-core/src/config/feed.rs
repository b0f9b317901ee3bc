//! Notification feed and activity aggregation configuration.

use serde::{Deserialize, Serialize};

/// Polling and assembly settings for the notification feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Interval between badge-count polls, in seconds.
    #[serde(default = "default_counts_poll_interval")]
    pub counts_poll_interval_seconds: u64,
    /// Interval between full feed polls, in seconds.
    #[serde(default = "default_feed_poll_interval")]
    pub feed_poll_interval_seconds: u64,
    /// How long an unread item stays visible before auto-dismissal, in seconds.
    #[serde(default = "default_auto_dismiss")]
    pub auto_dismiss_seconds: u64,
    /// Default number of notifications returned by the feed endpoint.
    #[serde(default = "default_feed_limit")]
    pub feed_limit: u32,
    /// Maximum number of notifications a caller may request.
    #[serde(default = "default_feed_max_limit")]
    pub feed_max_limit: u32,
    /// Per-source row cap when assembling the feed.
    #[serde(default = "default_per_source_limit")]
    pub per_source_limit: u32,
    /// Per-source row cap when aggregating recent activity.
    #[serde(default = "default_activity_per_source")]
    pub activity_per_source: u32,
    /// Default number of activity items returned by the dashboard endpoint.
    #[serde(default = "default_activity_limit")]
    pub activity_default_limit: u32,
    /// Maximum number of activity items a caller may request.
    #[serde(default = "default_activity_max_limit")]
    pub activity_max_limit: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            counts_poll_interval_seconds: default_counts_poll_interval(),
            feed_poll_interval_seconds: default_feed_poll_interval(),
            auto_dismiss_seconds: default_auto_dismiss(),
            feed_limit: default_feed_limit(),
            feed_max_limit: default_feed_max_limit(),
            per_source_limit: default_per_source_limit(),
            activity_per_source: default_activity_per_source(),
            activity_default_limit: default_activity_limit(),
            activity_max_limit: default_activity_max_limit(),
        }
    }
}

fn default_counts_poll_interval() -> u64 {
    30
}

fn default_feed_poll_interval() -> u64 {
    30
}

fn default_auto_dismiss() -> u64 {
    5
}

fn default_feed_limit() -> u32 {
    30
}

fn default_feed_max_limit() -> u32 {
    100
}

fn default_per_source_limit() -> u32 {
    20
}

fn default_activity_per_source() -> u32 {
    5
}

fn default_activity_limit() -> u32 {
    10
}

fn default_activity_max_limit() -> u32 {
    50
}
