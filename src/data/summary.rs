//! Builds the performance summary document from per-game ratio stats.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use super::{
    records::{Amount, GameRatioStat, PerformanceSummary},
    PERFORMANCE_PATH, RATIO_STATS_PATH,
};

/// Net result summed over every game, with the number of grids behind it.
pub fn summarize(stats: &[GameRatioStat]) -> PerformanceSummary {
    let net_total: f64 = stats.iter().map(|s| s.net.0).sum();
    let grids_total: u64 = stats.iter().map(|s| s.tested_grids).sum();
    let net_total = Amount((net_total * 100.0).round() / 100.0);
    PerformanceSummary {
        summary: Some(format!(
            "Average net gain: {net_total} € / {grids_total} grids tested."
        )),
    }
}

/// Read `stats/ratio_jeux.json` under `root` and write `stats/performance.json` next to it.
pub fn export_summary(root: &Path) -> Result<PathBuf> {
    let source = root.join(RATIO_STATS_PATH);
    let raw = std::fs::read(&source).with_context(|| format!("read {}", source.display()))?;
    let stats: Vec<GameRatioStat> =
        serde_json::from_slice(&raw).with_context(|| format!("decode {}", source.display()))?;

    let summary = summarize(&stats);
    let dest = root.join(PERFORMANCE_PATH);
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(&summary)?;
    std::fs::write(&dest, body).with_context(|| format!("write {}", dest.display()))?;
    info!(path = %dest.display(), games = stats.len(), "wrote performance summary");
    Ok(dest)
}
