//! Stats documents: record types, loading and summary export.

pub mod loader;
pub mod records;
pub mod summary;

/// Performance summary document, relative to the stats root.
pub const PERFORMANCE_PATH: &str = "stats/performance.json";
/// Recent draws document, relative to the stats root.
pub const RECENT_DRAWS_PATH: &str = "stats/tirages_recents.json";
/// Per-game ratio stats document, relative to the stats root.
pub const RATIO_STATS_PATH: &str = "stats/ratio_jeux.json";
