//! Runtime configuration utilities for drawboard.

use std::{env, path::PathBuf, time::Duration};

use anyhow::{anyhow, Context};
use clap::ValueEnum;

use crate::{data::loader::StatsRoot, page::FailurePolicy};

/// Render deadline used when `RENDER_DEADLINE_MS` is unset.
pub const DEFAULT_RENDER_DEADLINE: Duration = Duration::from_secs(5);

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Where `stats/*.json` documents are loaded from (base URL or directory).
    pub stats_root: StatsRoot,
    /// File the `render` command writes the dashboard to.
    pub output_path: PathBuf,
    /// What a failed load does to its target element.
    pub on_failure: FailurePolicy,
    /// Text written by [`FailurePolicy::Placeholder`].
    pub placeholder_text: String,
    /// Content every element starts with before its load completes.
    pub initial_text: String,
    /// How long a render waits for the loads before snapshotting the page.
    pub render_deadline: Duration,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let stats_root = env::var("STATS_ROOT").unwrap_or_else(|_| "./web".to_string());
        let stats_root = StatsRoot::parse(&stats_root).context("parsing STATS_ROOT")?;
        let output_path = env::var("OUTPUT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./web/index.html"));
        let on_failure = match env::var("ON_LOAD_FAILURE") {
            Ok(raw) => FailurePolicy::from_str(&raw, true)
                .map_err(|e| anyhow!("parsing ON_LOAD_FAILURE: {e}"))?,
            Err(_) => FailurePolicy::default(),
        };
        let placeholder_text =
            env::var("PLACEHOLDER_TEXT").unwrap_or_else(|_| "Unavailable".to_string());
        let initial_text = env::var("INITIAL_TEXT").unwrap_or_else(|_| "Loading...".to_string());
        let render_deadline = match env::var("RENDER_DEADLINE_MS") {
            Ok(raw) => Duration::from_millis(raw.parse().context("parsing RENDER_DEADLINE_MS")?),
            Err(_) => DEFAULT_RENDER_DEADLINE,
        };

        Ok(Self {
            stats_root,
            output_path,
            on_failure,
            placeholder_text,
            initial_text,
            render_deadline,
        })
    }

    /// Make sure the directory holding the rendered page exists.
    pub fn ensure_output_dir(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        Ok(())
    }
}
