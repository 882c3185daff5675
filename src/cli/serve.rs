//! CLI entry-point for serving the dashboard over HTTP.

use std::time::Duration;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{api, config::Settings, data::loader::StatsRoot, page::FailurePolicy};

/// Args for the `serve` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Port to bind.
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
    /// Override the stats root; a directory is also served as static files.
    #[arg(long)]
    pub source: Option<String>,
    /// Override what a failed load does to its element.
    #[arg(long, value_enum)]
    pub on_failure: Option<FailurePolicy>,
    /// Override how long to wait for the loads, in milliseconds.
    #[arg(long)]
    pub deadline_ms: Option<u64>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, mut settings: Settings) -> Result<()> {
    if let Some(source) = args.source {
        settings.stats_root = StatsRoot::parse(&source)?;
    }
    if let Some(policy) = args.on_failure {
        settings.on_failure = policy;
    }
    if let Some(ms) = args.deadline_ms {
        settings.render_deadline = Duration::from_millis(ms);
    }
    api::serve(settings, args.host, args.port).await
}
