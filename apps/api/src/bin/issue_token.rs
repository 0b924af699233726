//! Prints a bearer token signed with `SECRET_KEY`.
//!
//! Usage: `issue_token <username> [--admin] [--hours N]`

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use jobly_api::auth::create_token;

const DEFAULT_TTL_HOURS: i64 = 24;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let mut username = None;
    let mut is_admin = false;
    let mut hours = DEFAULT_TTL_HOURS;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--admin" => is_admin = true,
            "--hours" => {
                hours = args
                    .next()
                    .context("--hours needs a value")?
                    .parse()
                    .context("--hours must be an integer")?;
            }
            flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
            name => username = Some(name.to_string()),
        }
    }

    let username = username.context("usage: issue_token <username> [--admin] [--hours N]")?;
    let secret = std::env::var("SECRET_KEY").context("SECRET_KEY is not set")?;

    let token = create_token(&username, is_admin, &secret, chrono::Duration::hours(hours))?;
    tracing::info!(username = %username, is_admin, hours, "issued token");
    println!("{token}");
    Ok(())
}
