//! Live notification feed streaming.
//!
//! Mounts a feed controller against a running server and prints every
//! snapshot and badge change until interrupted. This is the reference
//! consumer of `amoria-feed` outside the test suite.

use std::sync::Arc;

use clap::Args;

use amoria_core::AppError;
use amoria_core::types::SessionId;
use amoria_entity::notification::NotificationCounts;
use amoria_feed::{ApiFeedSource, FeedEngine, FeedSnapshot};

/// Arguments for the watch command
#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Base URL of the Amoria server
    #[arg(short, long, default_value = "http://localhost:8080")]
    pub url: String,

    /// Bearer token for the member to watch as
    #[arg(short, long, env = "AMORIA_TOKEN")]
    pub token: String,
}

/// Execute the watch command
pub async fn execute(args: &WatchArgs, env: &str) -> Result<(), AppError> {
    let config = super::load_config(env)?;

    let source = ApiFeedSource::new(&args.url, args.token.clone())?;
    let engine = FeedEngine::new(config.feed.clone());
    let session = SessionId::new();
    let handle = engine.mount(session, Arc::new(source));

    println!("Watching {} (Ctrl+C to stop)...", args.url);

    let mut snapshot_rx = handle.watch_snapshot();
    let mut counts_rx = handle.watch_counts();

    loop {
        tokio::select! {
            changed = snapshot_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshot_rx.borrow_and_update().clone();
                print_snapshot(&snapshot);
            }
            changed = counts_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let counts = *counts_rx.borrow_and_update();
                print_counts(&counts);
            }
            _ = tokio::signal::ctrl_c() => {
                break;
            }
        }
    }

    engine.unmount(session);
    println!("Stopped.");
    Ok(())
}

fn print_snapshot(snapshot: &FeedSnapshot) {
    println!("── feed ({} unread) ──", snapshot.unread);
    if snapshot.is_empty() {
        println!("  (empty)");
        return;
    }
    for n in &snapshot.notifications {
        let marker = if n.read { " " } else { "*" };
        println!(
            "  {marker} [{}] {:<14} {} — {}",
            n.timestamp.format("%H:%M:%S"),
            n.kind.as_str(),
            n.title,
            n.message
        );
    }
}

fn print_counts(counts: &NotificationCounts) {
    println!(
        "── badges: matches={} messages={} favorites={} requests={}",
        counts.matches, counts.messages, counts.favorites, counts.match_requests
    );
}
