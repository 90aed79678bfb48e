//! contestd - contest game generator daemon

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use contestd::advisor::AdvisoryPolicy;
use contestd::{Config, Server};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Contest game generator daemon
#[derive(Parser, Debug)]
#[command(name = "contestd", version, about = "Serve the contest game generator")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on (overrides the config file)
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// Advisory policy: required, best-effort or disabled
    #[arg(long, value_parser = parse_policy)]
    advisory_policy: Option<AdvisoryPolicy>,
}

fn parse_policy(s: &str) -> Result<AdvisoryPolicy, String> {
    AdvisoryPolicy::from_str(s).ok_or_else(|| format!("unknown advisory policy: {}", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contestd=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(policy) = args.advisory_policy {
        config.advisor.policy = policy;
    }

    info!(
        "Brand service: {}, advisory service: {} ({:?})",
        if config.brand.api_key.is_some() { "configured" } else { "fallback only" },
        if config.advisor.api_key.is_some() { "configured" } else { "not configured" },
        config.advisor.policy
    );

    let server = Server::new(config)?;
    server.run().await?;

    Ok(())
}
