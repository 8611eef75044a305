//! JSON API routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use tracing::warn;

use super::pages::checklist_error_to_status;
use crate::checklist::{self, Acknowledgment, ChecklistSubmission};
use crate::registry::WorkerRecord;
use crate::state::AppState;
use crate::views::{self, Page, ViewModel};

/// `GET /api/workers` — the full registry in order.
pub async fn list_workers(State(state): State<AppState>) -> Json<Vec<WorkerRecord>> {
    Json(state.registry.list().to_vec())
}

/// `GET /api/workers/:name` — one worker by exact name.
pub async fn get_worker(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<WorkerRecord>, StatusCode> {
    state
        .registry
        .find_by_name(&name)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// `GET /api/views/:page` — the view model behind a page.
pub async fn view_model(State(state): State<AppState>, Path(slug): Path<String>) -> Result<Json<ViewModel>, StatusCode> {
    let page = Page::from_slug(&slug).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(views::render(page, &state)))
}

/// `POST /api/checklist` — acknowledge a submission without storing it.
pub async fn submit_checklist(
    State(state): State<AppState>,
    Json(submission): Json<ChecklistSubmission>,
) -> Result<Json<Acknowledgment>, StatusCode> {
    checklist::submit(state.registry.as_ref(), &state.checklist, &submission)
        .map(Json)
        .map_err(|e| {
            warn!(error = %e, "field checklist rejected");
            checklist_error_to_status(&e)
        })
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
