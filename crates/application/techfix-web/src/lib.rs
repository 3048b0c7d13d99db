//! TechFix booking page
//!
//! Server-rendered HTML with HTMX for the interactive parts.
//!
//! - **One view per page load**: `GET /` seeds a fresh view; reload starts over
//! - **HTMX for reactivity**: field edits, submit and banner expiry are small
//!   requests against `/views/{id}/...`
//! - **Works without JavaScript**: the form posts normally and redirects back
//!   to the repairs list

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod templates;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use error::WebError;
pub use state::AppState;

/// Create the main router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/views/{id}", get(handlers::view_page))
        .route("/views/{id}/fields/{field}", post(handlers::update_field))
        .route("/views/{id}/bookings", post(handlers::submit_booking))
        .route("/views/{id}/banner", get(handlers::banner))
        .route("/static/style.css", get(handlers::style_css))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the idle-view sweeper and serve until the listener fails
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> std::io::Result<()> {
    let _sweeper = state.spawn_sweeper();
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("TechFix booking page listening on http://{}", addr);

    axum::serve(listener, app).await
}
