use drawboard::data::{
    records::{Amount, GameRatioStat, PerformanceSummary},
    summary::{export_summary, summarize},
    PERFORMANCE_PATH, RATIO_STATS_PATH,
};

fn stat(game: &str, tested_grids: u64, net: f64) -> GameRatioStat {
    GameRatioStat {
        game: game.to_string(),
        tested_grids,
        total_gains: Amount(0.0),
        total_costs: Amount(0.0),
        net: Amount(net),
    }
}

#[test]
fn sums_net_and_grids_across_games() {
    let summary = summarize(&[stat("loto", 10, -10.0), stat("eurodream", 4, 2.5)]);
    assert_eq!(
        summary.summary.as_deref(),
        Some("Average net gain: -7.5 € / 14 grids tested.")
    );
}

#[test]
fn empty_stats_summarize_to_zero() {
    let summary = summarize(&[]);
    assert_eq!(
        summary.summary.as_deref(),
        Some("Average net gain: 0 € / 0 grids tested.")
    );
}

#[test]
fn export_writes_performance_document() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join(RATIO_STATS_PATH);
    std::fs::create_dir_all(source.parent().unwrap()).unwrap();
    std::fs::write(
        &source,
        r#"[{"jeu":"loto","tests":3,"gains":0,"couts":7.5,"net":-7.5}]"#,
    )
    .unwrap();

    let written = export_summary(dir.path()).unwrap();
    assert_eq!(written, dir.path().join(PERFORMANCE_PATH));

    let raw = std::fs::read_to_string(&written).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value["resume"],
        "Average net gain: -7.5 € / 3 grids tested."
    );
    let parsed: PerformanceSummary = serde_json::from_str(&raw).unwrap();
    assert!(parsed.summary.is_some());
}

#[test]
fn export_fails_without_ratio_stats() {
    let dir = tempfile::tempdir().unwrap();
    assert!(export_summary(dir.path()).is_err());
}
