use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use uuid::Uuid;

use crate::templates;

pub type Result<T> = std::result::Result<T, WebError>;

#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Never opened, or swept after sitting idle
    #[error("This page has expired. Reload to start a new booking.")]
    ViewNotFound(Uuid),

    #[error(transparent)]
    Form(#[from] techfix_core::Error),
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::ViewNotFound(_) => StatusCode::NOT_FOUND,
            WebError::Form(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match &self {
            WebError::ViewNotFound(id) => tracing::warn!(view = %id, "unknown view"),
            WebError::Form(e) => tracing::warn!("rejected form input: {}", e),
        }
        (self.status(), Html(templates::error_html(&self.to_string()))).into_response()
    }
}
