use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::export;
use crate::render::{self, card, page, CatalogView};
use crate::search;
use crate::types::AgentRecord;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Resolves a card position under the query the card was rendered with.
fn agent_at<'a>(
    catalog: &'a [AgentRecord],
    query: &str,
    position: usize,
) -> Result<&'a AgentRecord, ApiError> {
    search::filter_positions(catalog, query)
        .get(position)
        .map(|&i| &catalog[i])
        .ok_or(ApiError::AgentNotFound(position))
}

fn catalog_view(catalog: &[AgentRecord], query: &str) -> CatalogView {
    let shown = search::filter(catalog, query);
    render::render_for_query(&shown, query.trim())
}

pub async fn health_check(
    State(catalog): State<Arc<Vec<AgentRecord>>>,
) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "agents": catalog.len(),
    }))
}

pub async fn catalog_page(
    State(catalog): State<Arc<Vec<AgentRecord>>>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let view = catalog_view(&catalog, &params.q);
    Html(page::catalog_page(&view).into_string())
}

pub async fn list_agents(
    State(catalog): State<Arc<Vec<AgentRecord>>>,
    Query(params): Query<SearchParams>,
) -> Json<CatalogView> {
    Json(catalog_view(&catalog, &params.q))
}

pub async fn agent_detail(
    State(catalog): State<Arc<Vec<AgentRecord>>>,
    Path(position): Path<usize>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, ApiError> {
    let record = agent_at(&catalog, &params.q, position)?;
    let view = render::present(record);

    let detail_href = card::detail_href(position, params.q.trim());
    let download_href = match detail_href.split_once('?') {
        Some((path, query)) => format!("{}/download?{}", path, query),
        None => format!("{}/download", detail_href),
    };

    Ok(Html(page::detail_page(&view, &download_href).into_string()))
}

pub async fn download_agent(
    State(catalog): State<Arc<Vec<AgentRecord>>>,
    Path(position): Path<usize>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let record = agent_at(&catalog, &params.q, position)?;
    let artifact = export::export(Some(record)).ok_or(ApiError::AgentNotFound(position))?;

    Ok((
        [
            (header::CONTENT_TYPE, artifact.mime.to_string()),
            (header::CONTENT_DISPOSITION, artifact.content_disposition()),
        ],
        artifact.body,
    ))
}
