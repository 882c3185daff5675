//! Dashboard page: element model, load orchestration and the HTML shell.

pub mod document;
pub mod load;

use std::time::Duration;

use askama::Template;
use chrono::{SecondsFormat, Utc};
use tracing::warn;

pub use document::{Content, Document, ElementId};
pub use load::{FailurePolicy, PageLoader};

pub const PAGE_TITLE: &str = "Grid testing dashboard";

/// Full dashboard page around the three elements.
#[derive(Debug, Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub title: String,
    pub performance: Content,
    pub draws: Content,
    pub ratios: Content,
    pub generated_at: String,
}

impl DashboardPage {
    /// Snapshot the current element contents.
    pub fn from_document(document: &Document) -> Self {
        Self {
            title: PAGE_TITLE.to_string(),
            performance: document.get(ElementId::Performance),
            draws: document.get(ElementId::DrawsTable),
            ratios: document.get(ElementId::RatioStats),
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Run one load pass into a fresh document and render the page once every
/// load has settled or `deadline` has passed. Elements whose load is still
/// pending at the deadline keep their initial text.
pub async fn render_dashboard(
    loader: &PageLoader,
    initial_text: &str,
    deadline: Duration,
) -> askama::Result<String> {
    let document = Document::new(initial_text);
    if tokio::time::timeout(deadline, loader.load(&document))
        .await
        .is_err()
    {
        let unchanged: Vec<_> = ElementId::ALL
            .into_iter()
            .filter(|id| document.get(*id) == Content::Text(initial_text.to_string()))
            .map(ElementId::dom_id)
            .collect();
        warn!(?deadline, ?unchanged, "render deadline passed, snapshotting partial page");
    }
    DashboardPage::from_document(&document).render()
}
