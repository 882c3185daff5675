//! CLI entry-point for rendering the dashboard to a file.

use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{
    config::Settings,
    data::loader::StatsRoot,
    page::{self, FailurePolicy, PageLoader},
};

/// Args for the `render` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Override the stats root (base URL or directory).
    #[arg(long)]
    pub source: Option<String>,
    /// Override the output file.
    #[arg(long)]
    pub out: Option<PathBuf>,
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
    if let Some(out) = args.out {
        settings.output_path = out;
    }
    if let Some(policy) = args.on_failure {
        settings.on_failure = policy;
    }
    if let Some(ms) = args.deadline_ms {
        settings.render_deadline = Duration::from_millis(ms);
    }
    settings.ensure_output_dir()?;

    let loader = PageLoader::from_settings(&settings)?;
    let html = page::render_dashboard(&loader, &settings.initial_text, settings.render_deadline)
        .await
        .context("rendering dashboard")?;
    std::fs::write(&settings.output_path, html)
        .with_context(|| format!("write {}", settings.output_path.display()))?;
    info!(path = %settings.output_path.display(), "wrote dashboard");
    Ok(())
}
