use crate::api::NoteClient;
use crate::routes::{
    index::route_index,
    not_found::route_not_found,
    notes::{catch_all::route_catch_all, list::route_notes, view::route_note},
};
use crate::state::AppState;
use crate::static_files::build_static_routes;
use anyhow::Context;
use axum::{routing::get, Router};
use reqwest::Url;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tower_sessions::{MemoryStore, SessionManagerLayer};

#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub api_url: Url,
    pub api_timeout: Duration,
    pub host: String,
    pub port: u16,
}

/// Route surface:
///
/// - `/`                   index
/// - `/notes`              note list, fetched from the API
/// - `/notes/:id`          one note, fetched from the API
/// - `/notes/:id/*rest`    catch all below a note
/// - `/static/*path`       embedded assets
pub fn app(state: AppState) -> Router {
    // Sessions only carry flash messages
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store).with_secure(false);

    Router::new()
        .route("/", get(route_index))
        .route("/notes", get(route_notes))
        .route("/notes/:id", get(route_note))
        .route("/notes/:id/*rest", get(route_catch_all))
        .nest("/static", build_static_routes())
        .fallback(route_not_found)
        .layer(session_layer)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
pub async fn serve(config: ServeConfig) -> anyhow::Result<()> {
    let api = NoteClient::new(config.api_url, config.api_timeout)
        .context("Invalid notes API configuration")?;
    let addr = format!("{}:{}", config.host, config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind address {addr}"))?;

    tracing::info!("Serving Web App at {addr} using API {}", api.base_url());

    // Do it!
    axum::serve(listener, app(AppState::new(api)))
        .await
        .context("Unable to serve application")?;

    Ok(())
}
