//! Route handlers for the booking page

use axum::{
    extract::{Form, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use std::collections::HashMap;
use std::sync::Arc;
use techfix_core::{FormField, FormState};
use uuid::Uuid;

use crate::error::Result;
use crate::state::AppState;
use crate::templates;

/// Check if the request comes from HTMX (has HX-Request header).
pub fn is_htmx(headers: &HeaderMap) -> bool {
    headers.get("HX-Request").is_some()
}

// ============== Page Handlers ==============

/// A page load: every visit starts a fresh view
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>> {
    let id = state.open_view().await;
    view_page(Path(id), State(state)).await
}

/// Re-render an existing view (target of the no-JavaScript submit redirect)
pub async fn view_page(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>> {
    let delay = state.booking().banner_ms;
    let html = state
        .with_view(id, |view| templates::page_html(id, view, delay))
        .await?;
    Ok(Html(html))
}

// ============== HTMX Handlers ==============

/// One input changed. htmx posts the enclosing form, so pick the named value.
pub async fn update_field(
    Path((id, field)): Path<(Uuid, String)>,
    State(state): State<Arc<AppState>>,
    Form(values): Form<HashMap<String, String>>,
) -> Result<StatusCode> {
    let field: FormField = field.parse()?;
    let value = values.get(field.as_str()).map(String::as_str).unwrap_or("");
    state.update_field(id, field, value).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Submit the booking form
pub async fn submit_booking(
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Form(form): Form<FormState>,
) -> Result<Response> {
    state.submit(id, form).await?;

    if !is_htmx(&headers) {
        return Ok(Redirect::to(&format!("/views/{}#repairs", id)).into_response());
    }

    let delay = state.booking().banner_ms;
    let html = state
        .with_view(id, |view| templates::submit_response_html(id, view, delay))
        .await?;
    Ok(Html(html).into_response())
}

/// Banner slot, polled while the banner is up
pub async fn banner(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>> {
    let html = state
        .with_view(id, |view| {
            templates::banner_html(id, view.banner.is_visible(), templates::BANNER_RECHECK_MS)
        })
        .await?;
    Ok(Html(html))
}

// ============== Static Assets ==============

/// CSS stylesheet
pub async fn style_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], templates::STYLE_CSS)
}
