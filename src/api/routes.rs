//! HTTP route handlers for Axum.

use axum::{extract::State, http::StatusCode, response::Html};

use crate::page;

use super::AppState;

type PageResult = Result<Html<String>, (StatusCode, String)>;

/// Fresh load pass per request.
pub async fn dashboard(State(state): State<AppState>) -> PageResult {
    page::render_dashboard(
        &state.pages,
        &state.settings.initial_text,
        state.settings.render_deadline,
    )
        .await
        .map(Html)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}
