//! Access token minting command.

use clap::Args;
use uuid::Uuid;

use crate::output;
use amoria_auth::JwtEncoder;
use amoria_core::AppError;
use amoria_core::types::{MemberId, SessionId};
use amoria_entity::member::MemberRole;

/// Arguments for the token command
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Member ID the token is minted for (random if omitted)
    #[arg(short, long)]
    pub member_id: Option<Uuid>,

    /// Session ID embedded in the token (random if omitted)
    #[arg(short, long)]
    pub session_id: Option<Uuid>,

    /// Role claim (admin or member)
    #[arg(short, long, default_value = "member")]
    pub role: String,

    /// Display name claim
    #[arg(short, long, default_value = "Operator")]
    pub name: String,
}

/// Execute the token command
pub async fn execute(args: &TokenArgs, env: &str) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let role: MemberRole = args.role.parse()?;

    let member_id = args.member_id.map(MemberId::from_uuid).unwrap_or_default();
    let session_id = args.session_id.map(SessionId::from_uuid).unwrap_or_default();

    let encoder = JwtEncoder::new(&config.auth);
    let (token, expires_at) =
        encoder.generate_access_token(member_id, session_id, role, &args.name)?;

    output::print_kv("Member", &member_id.to_string());
    output::print_kv("Session", &session_id.to_string());
    output::print_kv("Role", role.as_str());
    output::print_kv("Expires", &expires_at.to_rfc3339());
    println!("{token}");

    Ok(())
}
