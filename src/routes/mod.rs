//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Server-rendered dashboard pages live at `/{page}` and post back to the
//! same path. A JSON API under `/api` exposes the registry and the same view
//! models the pages are rendered from.

pub mod api;
pub mod pages;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::views::inspection::REPORT_ACTION;

/// JSON routes.
fn api_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/workers", get(api::list_workers))
        .route("/api/workers/{name}", get(api::get_worker))
        .route("/api/views/{page}", get(api::view_model))
        .route("/api/checklist", post(api::submit_checklist))
        .layer(cors)
}

/// Full application router: pages, API, health check.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/{page}", get(pages::show_page).post(pages::submit_checklist))
        .route(REPORT_ACTION, post(pages::report_pressed))
        .route("/healthz", get(healthz))
        .merge(api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
