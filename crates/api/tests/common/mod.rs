#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use scene_editor_api::config::ServerConfig;
use scene_editor_api::router::build_app_router;
use scene_editor_api::session::EditorSession;
use scene_editor_api::state::AppState;
use scene_editor_core::editor::Editor;
use scene_editor_core::types::{Character, Location};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        graphql_url: "http://127.0.0.1:9/graphql".to_string(),
        graphql_timeout_secs: 1,
    }
}

/// Characters `1 Rick`, `2 Morty` and locations `L1 Earth`, `L2 Citadel`.
pub fn rick_and_morty() -> Editor {
    Editor::loaded(
        vec![Character::new("1", "Rick"), Character::new("2", "Morty")],
        vec![Location::new("L1", "Earth"), Location::new("L2", "Citadel")],
    )
}

/// Build the full application router around a session holding `editor`.
///
/// Returns the session too so tests can inspect state directly.
pub fn build_test_app(editor: Editor) -> (Router, Arc<EditorSession>) {
    let config = test_config();
    let session = Arc::new(EditorSession::new(editor));
    let state = AppState {
        config: Arc::new(config.clone()),
        session: Arc::clone(&session),
    };
    (build_app_router(state, &config), session)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty(), None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty(), None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(
        app,
        Method::POST,
        uri,
        Body::from(json.to_string()),
        Some("application/json"),
    )
    .await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(
        app,
        Method::PUT,
        uri,
        Body::from(json.to_string()),
        Some("application/json"),
    )
    .await
}

pub async fn post_form(app: Router, uri: &str, form: &str) -> Response<Body> {
    send(
        app,
        Method::POST,
        uri,
        Body::from(form.to_string()),
        Some("application/x-www-form-urlencoded"),
    )
    .await
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Body,
    content_type: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
