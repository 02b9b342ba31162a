use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::render::page;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no agent at position {0}")]
    AgentNotFound(usize),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::AgentNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = page::not_found_page(&self.to_string()).into_string();
        (self.status(), Html(body)).into_response()
    }
}
