//! Command-line interface wiring for drawboard.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod render;
pub mod serve;
pub mod summarize;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Lottery grid testing dashboard", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Render(args) => render::run(args, settings).await,
            Commands::Serve(args) => serve::run(args, settings).await,
            Commands::Summarize(args) => summarize::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load the stats documents once and write the dashboard page.
    Render(render::Args),
    /// Serve the dashboard and the static stats files.
    Serve(serve::Args),
    /// Rebuild stats/performance.json from stats/ratio_jeux.json.
    Summarize(summarize::Args),
}
