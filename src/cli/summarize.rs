//! CLI entry-point for rebuilding the performance summary document.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{config::Settings, data::summary};

/// Args for the `summarize` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Stats directory; defaults to the configured stats root.
    #[arg(long)]
    pub root: Option<PathBuf>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let root = match args.root {
        Some(root) => root,
        None => settings
            .stats_root
            .local_dir()
            .map(PathBuf::from)
            .ok_or_else(|| anyhow!("stats root {} is not a directory", settings.stats_root))?,
    };
    let path = summary::export_summary(&root)?;
    info!(path = %path.display(), "performance summary updated");
    println!("{}", path.display());
    Ok(())
}
