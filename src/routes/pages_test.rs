use super::*;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use crate::state::test_helpers;

fn form_body(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k.replace(' ', "+"), v.replace(' ', "+")))
        .collect::<Vec<_>>()
        .join("&")
}

fn form(pairs: &[(&str, &str)]) -> Request {
    Request::builder()
        .method("POST")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form_body(pairs)))
        .expect("request should build")
}

#[test]
fn checklist_error_to_status_maps_unknown_worker() {
    let err = ChecklistError::UnknownWorker("Nadie".into());
    assert_eq!(checklist_error_to_status(&err), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn show_page_renders_known_slugs() {
    let state = test_helpers::test_app_state();
    for page in Page::ALL {
        let Html(body) = show_page(State(state.clone()), Path(page.slug().to_owned())).await.unwrap();
        assert!(body.contains(page.label()));
    }
}

#[tokio::test]
async fn show_page_unknown_slug_is_not_found() {
    let state = test_helpers::test_app_state();
    let err = show_page(State(state), Path("admin".into())).await.unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn submit_minimal_checklist_confirms_worker() {
    let state = test_helpers::test_app_state();
    let Html(body) = submit_checklist(State(state), Path("terreno".into()), form(&[("worker", "Alberto Loaiza")]))
        .await
        .unwrap();
    assert!(body.contains("Checklist recibido para Alberto Loaiza"));
    assert!(body.contains("0 de 4"));
}

#[tokio::test]
async fn submit_checklist_with_checked_items_and_notes() {
    let state = test_helpers::test_app_state();
    let fields = form(&[
        ("worker", "Givens Aburto"),
        ("epp", "on"),
        ("guards", "on"),
        ("lockout", "on"),
        ("briefing", "on"),
        ("notes", "Astilla en línea 2, sin lesionados"),
    ]);
    let Html(body) = submit_checklist(State(state), Path("terreno".into()), fields).await.unwrap();
    assert!(body.contains("Givens Aburto: 4 de 4"));
}

#[tokio::test]
async fn submit_checklist_unknown_worker_is_unprocessable() {
    let state = test_helpers::test_app_state();
    let err = submit_checklist(State(state), Path("terreno".into()), form(&[("worker", "Nadie")]))
        .await
        .unwrap_err();
    assert_eq!(err, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn submit_to_other_pages_is_rejected() {
    let state = test_helpers::test_app_state();
    let err = submit_checklist(State(state.clone()), Path("panel".into()), form(&[])).await.unwrap_err();
    assert_eq!(err, StatusCode::METHOD_NOT_ALLOWED);
    let err = submit_checklist(State(state), Path("nada".into()), form(&[])).await.unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_to_other_page_without_form_body_is_method_not_allowed() {
    let state = test_helpers::test_app_state();
    let request = Request::builder()
        .method("POST")
        .body(Body::empty())
        .expect("request should build");
    let err = submit_checklist(State(state), Path("panel".into()), request).await.unwrap_err();
    assert_eq!(err, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn checklist_post_without_form_content_type_is_unsupported() {
    let state = test_helpers::test_app_state();
    let request = Request::builder()
        .method("POST")
        .body(Body::from("worker=Alberto+Loaiza"))
        .expect("request should build");
    let err = submit_checklist(State(state), Path("terreno".into()), request).await.unwrap_err();
    assert_eq!(err, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn submission_leaves_control_panel_unchanged() {
    let state = test_helpers::test_app_state();
    let Html(before) = show_page(State(state.clone()), Path("panel".into())).await.unwrap();

    submit_checklist(State(state.clone()), Path("terreno".into()), form(&[("worker", "Alberto Loaiza"), ("epp", "on")]))
        .await
        .unwrap();

    let Html(after) = show_page(State(state.clone()), Path("panel".into())).await.unwrap();
    assert_eq!(before, after);
    assert_eq!(state.registry.list().len(), 5);
}

#[tokio::test]
async fn report_button_is_a_noop() {
    assert_eq!(report_pressed().await, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn index_redirects_to_panel() {
    use axum::response::IntoResponse;

    let resp = index().await.into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()["location"], "/panel");
}
