//! HTML page routes.

use std::collections::HashMap;

use axum::extract::{Form, FromRequest, Path, Request, State};
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use tracing::{info, warn};

use crate::checklist::{self, ChecklistError, ChecklistSubmission};
use crate::html::render_document;
use crate::state::AppState;
use crate::views::{self, Page, ViewModel, field};

pub(crate) fn checklist_error_to_status(err: &ChecklistError) -> StatusCode {
    match err {
        ChecklistError::UnknownWorker(_) | ChecklistError::EmptyRegistry => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

/// `GET /` — land on the control panel.
pub async fn index() -> Redirect {
    Redirect::temporary(&Page::ControlPanel.href())
}

/// `GET /:page` — render one of the three modules.
pub async fn show_page(State(state): State<AppState>, Path(slug): Path<String>) -> Result<Html<String>, StatusCode> {
    let page = Page::from_slug(&slug).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Html(render_document(views::render(page, &state))))
}

/// `POST /terreno` — acknowledge a field checklist and re-render the form.
/// Only the field checklist accepts posts; the slug is checked before the
/// body is read.
pub async fn submit_checklist(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    request: Request,
) -> Result<Html<String>, StatusCode> {
    match Page::from_slug(&slug) {
        Some(Page::FieldChecklist) => {}
        Some(_) => return Err(StatusCode::METHOD_NOT_ALLOWED),
        None => return Err(StatusCode::NOT_FOUND),
    }

    let Form(fields) = Form::<HashMap<String, String>>::from_request(request, &state)
        .await
        .map_err(|rejection| rejection.status())?;
    let submission = ChecklistSubmission::from_form(&fields, &state.checklist);
    let ack = checklist::submit(state.registry.as_ref(), &state.checklist, &submission).map_err(|e| {
        warn!(error = %e, "field checklist rejected");
        checklist_error_to_status(&e)
    })?;

    let model = field::build(state.registry.as_ref(), &state.checklist, Some(ack));
    Ok(Html(render_document(ViewModel::FieldChecklist(model))))
}

/// `POST /fiscalizacion/reporte` — report button. Report generation is not
/// implemented; 204 keeps the browser on the current page.
pub async fn report_pressed() -> StatusCode {
    info!("inspection report requested; generation not available");
    StatusCode::NO_CONTENT
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
