use std::path::Path;
use std::sync::{Arc, Mutex};

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use tailwind_playground::server::{router, DevState, SharedState};
use tailwind_playground::snippets::CATALOG;
use tailwind_playground::tour::TOUR_STEPS;
use tailwind_playground::{HeightSync, PreviewTemplate, SettingsStore};

fn state_in(dir: &Path) -> SharedState {
    let store = SettingsStore::at(dir.join("settings.json"));
    Arc::new(Mutex::new(DevState::new(
        store,
        PreviewTemplate::default(),
        HeightSync::default(),
    )))
}

fn app(state: &SharedState) -> Router {
    router(state.clone())
}

async fn get(state: &SharedState, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let res = app(state)
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = res.status();
    let headers = res.headers().clone();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn post_json(state: &SharedState, uri: &str, body: Value) -> Value {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let res = app(state).oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn first_visit_shows_the_tour_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(dir.path());
    let (status, _, html) = get(&state, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"class="tour-prompt open""#));
    assert!(html.contains(r#"sandbox="allow-scripts""#));
    assert!(html.contains("previewSync"));
}

#[tokio::test]
async fn dismissing_the_tour_persists_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(dir.path());
    let res = post_json(&state, "/tour/dismiss", json!(null)).await;
    assert_eq!(res["ok"], json!(true));

    let reopened = state_in(dir.path());
    let (_, _, html) = get(&reopened, "/").await;
    assert!(!html.contains(r#"class="tour-prompt open""#));
    assert!(html.contains(r#"class="tour-prompt""#));
}

#[tokio::test]
async fn render_returns_increasing_revisions() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(dir.path());
    let a = post_json(&state, "/render", json!({ "source": "<p>a</p>" })).await;
    let b = post_json(&state, "/render", json!({ "source": "<p>ab</p>" })).await;
    assert!(b["revision"].as_u64().unwrap() > a["revision"].as_u64().unwrap());
    let payload = b["payload"].as_str().unwrap();
    assert!(payload.contains("<body>\n<p>ab</p>\n"));
    assert!(payload.contains("https://cdn.tailwindcss.com"));
}

#[tokio::test]
async fn standalone_preview_carries_sandbox_policy() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(dir.path());
    post_json(&state, "/render", json!({ "source": "<h1>standalone</h1>" })).await;
    let (status, headers, body) = get(&state, "/preview.html").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers[header::CONTENT_SECURITY_POLICY],
        "sandbox allow-scripts"
    );
    assert!(body.contains("<h1>standalone</h1>"));
}

#[tokio::test]
async fn snippet_catalog_serves_exact_code() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(dir.path());
    let (_, _, body) = get(&state, "/snippets.json").await;
    let list: Value = serde_json::from_str(&body).unwrap();
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), CATALOG.len());
    assert_eq!(list[0]["title"], json!(CATALOG[0].title));
    assert_eq!(list[0]["code"], json!(CATALOG[0].code));
}

#[tokio::test]
async fn palette_lists_every_utility() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(dir.path());
    let (_, _, body) = get(&state, "/palette.json").await;
    let palette: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        palette["bg"][0]["swatches"][0]["class_name"],
        json!("bg-slate-50")
    );
    assert_eq!(palette["text"].as_array().unwrap().len(), 6);
    assert_eq!(palette["border"][5]["swatches"][10]["class_name"], json!("border-purple-950"));
}

#[tokio::test]
async fn save_then_reload_restores_the_document() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(dir.path());
    let res = post_json(&state, "/save", json!({ "source": "<p>saved</p>" })).await;
    assert_eq!(res, json!({ "ok": true, "error": null }));

    let (_, _, body) = get(&state, "/settings").await;
    let settings: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(settings["saved_source"], json!("<p>saved</p>"));

    let reopened = state_in(dir.path());
    let (_, _, html) = get(&reopened, "/").await;
    assert!(html.contains("&lt;p&gt;saved&lt;/p&gt;</textarea>"));
}

#[tokio::test]
async fn save_failure_is_reported_not_raised() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the settings file should be makes the rename fail.
    std::fs::create_dir(dir.path().join("settings.json")).unwrap();
    let state = state_in(dir.path());
    let res = post_json(&state, "/save", json!({ "source": "<p>x</p>" })).await;
    assert_eq!(res["ok"], json!(false));
    assert!(res["error"].as_str().unwrap().contains("settings.json"));

    let (_, _, body) = get(&state, "/settings").await;
    let settings: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(settings["saved_source"], Value::Null);
}

#[tokio::test]
async fn failed_save_is_not_persisted_by_a_later_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::create_dir(&path).unwrap();
    let state = state_in(dir.path());
    post_json(&state, "/save", json!({ "source": "<p>unsaved</p>" })).await;

    std::fs::remove_dir(&path).unwrap();
    let res = post_json(&state, "/tour/dismiss", json!(null)).await;
    assert_eq!(res["ok"], json!(true));

    let on_disk: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk["tour_dismissed"], json!(true));
    assert_eq!(on_disk["saved_source"], Value::Null);
}

#[tokio::test]
async fn tour_is_walked_by_the_server() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(dir.path());

    let status = post_json(&state, "/tour/start", json!(null)).await;
    assert_eq!(status, json!({ "status": "active", "step": 0 }));
    let (_, _, body) = get(&state, "/settings").await;
    let settings: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(settings["tour_dismissed"], json!(true));

    assert_eq!(
        post_json(&state, "/tour/back", json!(null)).await,
        json!({ "status": "active", "step": 0 })
    );
    for step in 1..TOUR_STEPS.len() {
        assert_eq!(
            post_json(&state, "/tour/next", json!(null)).await,
            json!({ "status": "active", "step": step })
        );
    }
    assert_eq!(
        post_json(&state, "/tour/next", json!(null)).await,
        json!({ "status": "completed" })
    );
}

#[tokio::test]
async fn escape_cancels_a_running_tour() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(dir.path());
    assert_eq!(
        post_json(&state, "/tour/next", json!(null)).await,
        json!({ "status": "cancelled" })
    );
    post_json(&state, "/tour/start", json!(null)).await;
    post_json(&state, "/tour/next", json!(null)).await;
    assert_eq!(
        post_json(&state, "/tour/cancel", json!(null)).await,
        json!({ "status": "cancelled" })
    );
}

#[tokio::test]
async fn download_is_an_attachment_of_the_raw_source() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(dir.path());
    post_json(&state, "/render", json!({ "source": "<div class=\"p-4\">x</div>" })).await;
    let (status, headers, body) = get(&state, "/download").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"tailwind-playground.html\""
    );
    assert_eq!(headers[header::CONTENT_TYPE], "text/html; charset=utf-8");
    assert_eq!(body, "<div class=\"p-4\">x</div>");
}
