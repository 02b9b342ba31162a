use anyhow::Result;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::handlers;
use crate::types::AgentRecord;

/// Records are loaded once before serving and never change afterwards, so
/// handlers share them without locking. Selection travels in the URL.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Vec<AgentRecord>>,
}

impl AppState {
    pub fn new(records: Vec<AgentRecord>) -> Self {
        Self {
            catalog: Arc::new(records),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::catalog_page))
        .route("/health", get(handlers::health_check))
        .route("/api/agents", get(handlers::list_agents))
        .route("/agents/:position", get(handlers::agent_detail))
        .route("/agents/:position/download", get(handlers::download_agent))
        .layer(CorsLayer::permissive())
        .with_state(state.catalog)
}

pub async fn serve(state: AppState, port: u16) -> Result<()> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    log::info!("AgentHub listening on port {}", port);

    axum::serve(listener, app).await?;
    Ok(())
}
