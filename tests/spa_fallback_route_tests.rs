use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use pantry::config::{ListingConfig, WebConfig};
use pantry::db::Store;
use pantry::server::{PantryState, pantry_router};
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

const INDEX_HTML: &str = "<!doctype html><div id=\"app\"></div>";
const APP_JS: &str = "console.log('pantry');";

async fn spa_app(tag: &str) -> Router {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut root = std::env::temp_dir();
    root.push(format!("pantry-spa-{tag}-{}-{}", std::process::id(), nanos));
    let public_dir: PathBuf = root.join("public");
    fs::create_dir_all(public_dir.join("assets")).expect("failed to create public dir");
    fs::write(public_dir.join("index.html"), INDEX_HTML).expect("failed to write index.html");
    fs::write(public_dir.join("assets").join("app.js"), APP_JS).expect("failed to write app.js");

    let database_url = format!("sqlite:{}", root.join("pantry.sqlite").display());
    let store = Store::connect(&database_url)
        .await
        .expect("failed to open test store");
    let state = PantryState::new(&store, &ListingConfig::default());

    let web = WebConfig {
        public_dir,
        ..WebConfig::default()
    };
    pantry_router(state, &web)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Option<String>, String) {
    request(app, "GET", uri).await
}

async fn request(app: &Router, method: &str, uri: &str) -> (StatusCode, Option<String>, String) {
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    let status = resp.status();
    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    (
        status,
        content_type,
        String::from_utf8(body.to_vec()).expect("response body was not utf-8"),
    )
}

#[tokio::test]
async fn existing_static_files_are_served_as_is() {
    let app = spa_app("static").await;

    let (status, content_type, body) = get(&app, "/assets/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, APP_JS);
    assert!(
        content_type.is_some_and(|ct| ct.contains("javascript")),
        "expected a javascript content type"
    );

    let (status, _, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX_HTML);
}

#[tokio::test]
async fn unknown_client_routes_get_the_index_document() {
    let app = spa_app("client-route").await;

    for uri in ["/some/client/route", "/recipes/12", "/assets/missing.js"] {
        let (status, content_type, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(content_type.as_deref(), Some("text/html"), "{uri}");
        assert_eq!(body, INDEX_HTML, "{uri}");
    }
}

#[tokio::test]
async fn static_tree_ignores_the_request_method() {
    let app = spa_app("any-method").await;

    let (status, content_type, body) = request(&app, "POST", "/some/client/route").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/html"));
    assert_eq!(body, INDEX_HTML);

    let (status, _, body) = request(&app, "DELETE", "/assets/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, APP_JS);
}

#[tokio::test]
async fn api_paths_bypass_the_static_tree() {
    let app = spa_app("api-bypass").await;

    let (status, _, body) = get(&app, "/api/recipes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");

    let (status, _, body) = get(&app, "/api/not-a-route").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_ne!(body, INDEX_HTML);
}

#[tokio::test]
async fn every_response_carries_a_request_id() {
    let app = spa_app("request-id").await;

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/anything")
                .header("x-request-id", "trace-me")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.headers()["x-request-id"], "trace-me");

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/recipes")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert!(resp.headers().contains_key("x-request-id"));
}
