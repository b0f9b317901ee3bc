//! # amoria-feed
//!
//! Client-side notification feed engine for Amoria. Each signed-in
//! session gets a controller task that polls the API for badge counts
//! and feed items, auto-dismisses unread items after a short display
//! window, and applies read/dismiss actions write-through.
//!
//! - [`FeedEngine`] owns one controller per session
//! - [`FeedHandle`] is the cheap-to-clone client surface
//! - [`FeedSource`] abstracts the backend; [`ApiFeedSource`] is the
//!   HTTP implementation used by the `watch` command, [`LocalFeedSource`]
//!   calls the notification service in-process

pub mod api_source;
pub mod engine;
pub mod handle;
pub mod local_source;
pub mod snapshot;
pub mod source;

mod controller;
mod timers;

pub use api_source::ApiFeedSource;
pub use local_source::LocalFeedSource;
pub use engine::FeedEngine;
pub use handle::FeedHandle;
pub use snapshot::FeedSnapshot;
pub use source::FeedSource;
