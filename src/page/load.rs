//! Page orchestrator: three independent fetch-and-render operations.

use clap::ValueEnum;
use tracing::{debug, info, instrument, warn};

use crate::{
    config::Settings,
    data::{
        loader::JsonLoader,
        records::{DrawRecord, GameRatioStat, PerformanceSummary},
        PERFORMANCE_PATH, RATIO_STATS_PATH, RECENT_DRAWS_PATH,
    },
    error::LoadError,
    render,
};

use super::{Document, ElementId};

/// What a failed load does to its target element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FailurePolicy {
    /// Leave the element unchanged and say nothing.
    Silent,
    /// Leave the element unchanged and log a warning.
    #[default]
    Warn,
    /// Replace the element with the placeholder text.
    Placeholder,
}

/// Fills a [`Document`] from the stats documents.
#[derive(Debug, Clone)]
pub struct PageLoader {
    loader: JsonLoader,
    on_failure: FailurePolicy,
    placeholder_text: String,
}

impl PageLoader {
    pub fn new(loader: JsonLoader, on_failure: FailurePolicy, placeholder_text: String) -> Self {
        Self {
            loader,
            on_failure,
            placeholder_text,
        }
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let loader = JsonLoader::new(settings.stats_root.clone())?;
        Ok(Self::new(
            loader,
            settings.on_failure,
            settings.placeholder_text.clone(),
        ))
    }

    /// Issue the three loads back to back and let each write its element on
    /// completion. Failures are handled per [`FailurePolicy`] and never
    /// returned; there is no ordering between the writes.
    #[instrument(skip_all, fields(root = %self.loader.root()))]
    pub async fn load(&self, document: &Document) {
        let performance = async {
            match self
                .loader
                .load_as::<PerformanceSummary>(PERFORMANCE_PATH)
                .await
            {
                Ok(perf) => {
                    document.set_text(ElementId::Performance, perf.summary.unwrap_or_default())
                }
                Err(err) => self.on_load_failure(document, ElementId::Performance, &err),
            }
        };

        let draws = async {
            match self
                .loader
                .load_as::<Vec<DrawRecord>>(RECENT_DRAWS_PATH)
                .await
            {
                Ok(draws) => {
                    document.set_html(ElementId::DrawsTable, render::draws_table(&draws));
                    debug!(rows = draws.len(), "rendered recent draws");
                }
                Err(err) => self.on_load_failure(document, ElementId::DrawsTable, &err),
            }
        };

        let ratios = async {
            match self
                .loader
                .load_as::<Vec<GameRatioStat>>(RATIO_STATS_PATH)
                .await
            {
                Ok(stats) => {
                    document.set_html(ElementId::RatioStats, render::ratio_table(&stats));
                    debug!(rows = stats.len(), "rendered ratio stats");
                }
                Err(err) => self.on_load_failure(document, ElementId::RatioStats, &err),
            }
        };

        tokio::join!(performance, draws, ratios);
        info!("dashboard load pass finished");
    }

    fn on_load_failure(&self, document: &Document, id: ElementId, err: &LoadError) {
        match self.on_failure {
            FailurePolicy::Silent => {}
            FailurePolicy::Warn => {
                warn!(element = %id, path = err.path(), error = %err, "load failed, element left unchanged")
            }
            FailurePolicy::Placeholder => {
                debug!(element = %id, error = %err, "load failed, writing placeholder");
                document.set_text(id, self.placeholder_text.clone());
            }
        }
    }
}
