use std::{path::Path, time::Duration};

use drawboard::{
    data::{
        loader::{JsonLoader, StatsRoot},
        records::{DrawRecord, PerformanceSummary},
        PERFORMANCE_PATH, RATIO_STATS_PATH, RECENT_DRAWS_PATH,
    },
    error::LoadError,
    page::{self, Content, Document, ElementId, FailurePolicy, PageLoader},
};
use serde_json::json;
use tempfile::TempDir;

const INITIAL: &str = "Loading...";

fn write(root: &Path, path: &str, body: &str) {
    let dest = root.join(path);
    std::fs::create_dir_all(dest.parent().unwrap()).unwrap();
    std::fs::write(dest, body).unwrap();
}

fn seed_stats() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        PERFORMANCE_PATH,
        &json!({ "resume": "Net <b>-10</b> € over 10 grids", "extra": 1 }).to_string(),
    );
    write(
        dir.path(),
        RECENT_DRAWS_PATH,
        &json!([
            { "jeu": "loto", "date": "2024-01-01", "numeros": "1-2-3-4-5-6", "gain": 0 },
            { "jeu": "euromillion", "date": "2024-01-02", "numeros": "7-8-9-10-11", "gain": 12.5 }
        ])
        .to_string(),
    );
    write(
        dir.path(),
        RATIO_STATS_PATH,
        &json!([
            { "jeu": "loto", "tests": 10, "gains": 50, "couts": 60, "net": -10 }
        ])
        .to_string(),
    );
    dir
}

fn page_loader(root: &Path, policy: FailurePolicy) -> PageLoader {
    let loader = JsonLoader::new(StatsRoot::Dir(root.to_path_buf())).unwrap();
    PageLoader::new(loader, policy, "Unavailable".to_string())
}

fn markup(content: Content) -> String {
    match content {
        Content::Markup(html) => html,
        other => panic!("expected markup, got {other:?}"),
    }
}

#[tokio::test]
async fn fills_all_three_elements() {
    let dir = seed_stats();
    let document = Document::new(INITIAL);
    page_loader(dir.path(), FailurePolicy::Warn)
        .load(&document)
        .await;

    assert_eq!(
        document.get(ElementId::Performance),
        Content::Text("Net <b>-10</b> € over 10 grids".to_string())
    );
    let draws = markup(document.get(ElementId::DrawsTable));
    assert_eq!(draws.matches("<tr>").count(), 3);
    assert!(draws.contains("<td>12.5 €</td>"));
    let ratios = markup(document.get(ElementId::RatioStats));
    assert!(ratios.contains(r#"<td style="color:red">-10 €</td>"#));
}

#[tokio::test]
async fn failed_summary_leaves_element_unchanged() {
    let dir = seed_stats();
    std::fs::remove_file(dir.path().join(PERFORMANCE_PATH)).unwrap();

    for policy in [FailurePolicy::Silent, FailurePolicy::Warn] {
        let document = Document::new(INITIAL);
        page_loader(dir.path(), policy).load(&document).await;

        assert_eq!(
            document.get(ElementId::Performance),
            Content::Text(INITIAL.to_string())
        );
        assert!(matches!(document.get(ElementId::DrawsTable), Content::Markup(_)));
        assert!(matches!(document.get(ElementId::RatioStats), Content::Markup(_)));
    }
}

#[tokio::test]
async fn placeholder_policy_only_touches_failed_element() {
    let dir = seed_stats();
    write(dir.path(), RECENT_DRAWS_PATH, "not json");

    let document = Document::new(INITIAL);
    page_loader(dir.path(), FailurePolicy::Placeholder)
        .load(&document)
        .await;

    assert_eq!(
        document.get(ElementId::DrawsTable),
        Content::Text("Unavailable".to_string())
    );
    assert!(matches!(document.get(ElementId::Performance), Content::Text(t) if t.starts_with("Net")));
    assert!(matches!(document.get(ElementId::RatioStats), Content::Markup(_)));
}

#[tokio::test]
async fn null_payout_does_not_drop_the_table() {
    let dir = seed_stats();
    write(
        dir.path(),
        RECENT_DRAWS_PATH,
        &json!([
            { "jeu": "loto", "date": "2024-01-01", "numeros": "1-2-3-4-5-6", "gain": null },
            { "jeu": "loto", "date": "2024-01-02", "numeros": "7-8-9-10-11-12", "gain": 5 },
            { "jeu": "keno", "date": "2024-01-03", "numeros": "1-2" }
        ])
        .to_string(),
    );

    let document = Document::new(INITIAL);
    page_loader(dir.path(), FailurePolicy::Warn)
        .load(&document)
        .await;

    let draws = markup(document.get(ElementId::DrawsTable));
    assert_eq!(draws.matches("<tr>").count(), 4);
    assert!(draws.contains("<td>5 €</td>"));
}

#[tokio::test]
async fn absent_summary_field_renders_empty() {
    let dir = seed_stats();
    write(dir.path(), PERFORMANCE_PATH, r#"{"other": true}"#);

    let document = Document::new(INITIAL);
    page_loader(dir.path(), FailurePolicy::Warn)
        .load(&document)
        .await;
    assert_eq!(document.get(ElementId::Performance), Content::Text(String::new()));
}

#[tokio::test]
async fn loader_classifies_failures() {
    let dir = seed_stats();
    write(dir.path(), "stats/broken.json", "{ nope");
    write(dir.path(), "stats/object.json", r#"{"jeu": "loto"}"#);
    let loader = JsonLoader::new(StatsRoot::Dir(dir.path().to_path_buf())).unwrap();

    let err = loader.load("stats/missing.json").await.unwrap_err();
    assert!(matches!(err, LoadError::Network { .. }));
    assert_eq!(err.path(), "stats/missing.json");

    let err = loader.load("stats/broken.json").await.unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));

    let err = loader
        .load_as::<Vec<DrawRecord>>("stats/object.json")
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Shape { .. }));

    let summary: PerformanceSummary = loader.load_as(PERFORMANCE_PATH).await.unwrap();
    assert!(summary.summary.is_some());
}

#[tokio::test]
async fn dashboard_escapes_text_and_keeps_tables() {
    let dir = seed_stats();
    let html = page::render_dashboard(
        &page_loader(dir.path(), FailurePolicy::Warn),
        INITIAL,
        Duration::from_secs(5),
    )
    .await
    .unwrap();

    assert!(html.contains(r#"<div id="performance">Net &lt;b&gt;-10&lt;"#));
    assert!(html.contains(r#"<div id="tirages-table"><table>"#));
    assert!(html.contains(r#"<div id="ratio-stats"><table>"#));
}

#[test]
fn stats_root_parsing() {
    let root = StatsRoot::parse("http://localhost:8080/site").unwrap();
    match root {
        StatsRoot::Url(url) => assert_eq!(url.as_str(), "http://localhost:8080/site/"),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(
        StatsRoot::parse("./web").unwrap().local_dir(),
        Some(Path::new("./web"))
    );
}
