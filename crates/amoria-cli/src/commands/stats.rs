//! Platform statistics command.

use std::sync::Arc;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use amoria_core::AppError;
use amoria_core::types::{MemberId, SessionId};
use amoria_database::repositories::{
    MatchRepository, MemberRepository, MessageRepository, PhotoRepository, ReportRepository,
};
use amoria_entity::member::MemberRole;
use amoria_service::{ActivityService, RequestContext};

/// Arguments for the stats command
#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Also print the recent-activity feed
    #[arg(long)]
    pub activity: bool,

    /// Number of activity items to print
    #[arg(short, long, default_value = "10")]
    pub limit: u32,
}

/// One statistic row for table output
#[derive(Debug, Serialize, Tabled)]
struct StatRow {
    /// Metric name
    metric: &'static str,
    /// Metric value
    value: i64,
}

/// Activity display row
#[derive(Debug, Serialize, Tabled)]
struct ActivityRow {
    /// Time
    time: String,
    /// Kind
    kind: String,
    /// Description
    description: String,
}

/// Execute the stats command
pub async fn execute(args: &StatsArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::create_db_pool(&config).await?;

    let service = ActivityService::new(
        Arc::new(MemberRepository::new(pool.clone())),
        Arc::new(MatchRepository::new(pool.clone())),
        Arc::new(MessageRepository::new(pool.clone())),
        Arc::new(PhotoRepository::new(pool.clone())),
        Arc::new(ReportRepository::new(pool.clone())),
        config.feed.clone(),
    );

    // Direct database access: the CLI operator acts as an administrator.
    let ctx = RequestContext::new(
        MemberId::new(),
        SessionId::new(),
        MemberRole::Admin,
        "operator",
    );

    let stats = service.system_stats(&ctx).await?;
    let rows = vec![
        StatRow { metric: "total_members", value: stats.total_members },
        StatRow { metric: "new_members_today", value: stats.new_members_today },
        StatRow { metric: "total_matches", value: stats.total_matches },
        StatRow { metric: "matches_today", value: stats.matches_today },
        StatRow { metric: "total_messages", value: stats.total_messages },
        StatRow { metric: "messages_today", value: stats.messages_today },
        StatRow { metric: "pending_photos", value: stats.pending_photos },
        StatRow { metric: "open_reports", value: stats.open_reports },
        StatRow { metric: "active_members_today", value: stats.active_members_today },
    ];
    output::print_list(&rows, format);

    if args.activity {
        let items = service.recent_activity(&ctx, Some(args.limit)).await?;
        let rows: Vec<ActivityRow> = items
            .iter()
            .map(|item| ActivityRow {
                time: item.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                kind: item.kind.as_str().to_string(),
                description: item.description.clone(),
            })
            .collect();
        output::print_list(&rows, format);
    }

    Ok(())
}
