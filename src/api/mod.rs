//! HTTP layer serving the rendered dashboard and the static stats files.

pub mod routes;

use std::net::SocketAddr;

use anyhow::Result;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};

use crate::{config::Settings, page::PageLoader};

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub pages: PageLoader,
}

/// Build the router: `/` renders the dashboard, everything else falls back to
/// the local stats root when there is one.
pub fn router(settings: Settings) -> Result<Router> {
    let pages = PageLoader::from_settings(&settings)?;
    let static_dir = settings.stats_root.local_dir().map(ServeDir::new);
    let state = AppState { settings, pages };

    let router = Router::new().route("/", get(routes::dashboard));
    let router = match static_dir {
        Some(dir) => router.fallback_service(dir),
        None => {
            warn!("stats root is remote; only the dashboard route is served");
            router
        }
    };
    Ok(router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

pub async fn serve(settings: Settings, host: String, port: u16) -> Result<()> {
    let root = settings.stats_root.to_string();
    let router = router(settings)?;

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, %root, "serving drawboard");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "unable to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
