//! Mint a bearer token for calling the items API by hand.
//!
//! Run with: JWT_SECRET=... cargo run -p items_api --bin generate_token -- --ttl-secs 3600

use axum_helpers::{JwtAuth, JwtConfig};
use clap::Parser;
use core_config::FromEnv;
use eyre::Result;

/// Sign an HS256 token with `JWT_SECRET`.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Value of the `userId` claim (also used as `sub`)
    #[arg(long, default_value_t = 123)]
    user_id: i64,

    /// Value of the `role` claim
    #[arg(long, default_value = "user")]
    role: String,

    /// Lifetime in seconds; the token never expires when omitted
    #[arg(long)]
    ttl_secs: Option<i64>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let auth = JwtAuth::new(&JwtConfig::from_env()?);
    let token = auth.issue_token(
        args.user_id,
        Some(&args.role),
        args.ttl_secs.map(chrono::Duration::seconds),
    )?;

    println!("{token}");
    Ok(())
}
