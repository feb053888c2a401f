#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{self, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use blog_admin::{app, config::AppConfig, AppState};

pub const VALID_TOKEN: &str = "abc123";

/// Longest copyright text the fake backend accepts
pub const MAX_COPYRIGHT_LEN: usize = 64;

/// Token the fake backend issues to the `mallory` account
pub const HOSTILE_TOKEN: &str = "abc; Domain=evil.example; Max-Age=999999999";

/// In-process stand-in for the blog backend
#[derive(Clone)]
struct FakeBackend {
    copyright: Arc<Mutex<String>>,
}

pub struct BackendHandle {
    pub base_url: String,
}

pub async fn spawn_fake_backend() -> Result<BackendHandle> {
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .context("failed to bind fake backend")?;

    let state = FakeBackend {
        copyright: Arc::new(Mutex::new("© 2024 Example Blog".to_string())),
    };

    let router = Router::new()
        .route("/auth/login", post(fake_login))
        .route("/copyright", routing::get(fake_copyright_get).put(fake_copyright_put))
        .with_state(state);

    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    Ok(BackendHandle {
        base_url: format!("http://127.0.0.1:{}", port),
    })
}

async fn fake_login(Json(body): Json<Value>) -> Response {
    if body["username"] == "admin" && body["password"] == "secret" {
        Json(json!({ "token": VALID_TOKEN })).into_response()
    } else if body["username"] == "mallory" && body["password"] == "secret" {
        Json(json!({ "token": HOSTILE_TOKEN })).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid username or password" })),
        )
            .into_response()
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == format!("Bearer {}", VALID_TOKEN))
}

async fn fake_copyright_get(State(state): State<FakeBackend>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Token required" }))).into_response();
    }
    let text = state.copyright.lock().unwrap().clone();
    Json(json!({ "success": true, "data": { "text": text } })).into_response()
}

async fn fake_copyright_put(
    State(state): State<FakeBackend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Token required" }))).into_response();
    }
    let text = body["text"].as_str().unwrap_or_default().to_string();
    if text.chars().count() > MAX_COPYRIGHT_LEN {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "message": "text too long" })),
        )
            .into_response();
    }
    *state.copyright.lock().unwrap() = text.clone();
    Json(json!({ "text": text })).into_response()
}

/// Development config pointed at `backend_url`
pub fn test_config(backend_url: &str) -> AppConfig {
    let mut config = AppConfig::development();
    config.backend.base_url = backend_url.to_string();
    config.backend.timeout_secs = 5;
    config.server.enable_request_logging = false;
    config
}

pub fn app_with_config(config: AppConfig) -> Router {
    app(AppState::new(config).expect("valid test config"))
}

/// Admin app pointed at `backend_url`
pub fn test_app(backend_url: &str) -> Router {
    app_with_config(test_config(backend_url))
}

/// Admin app whose backend is never reached
pub fn offline_app() -> Router {
    test_app("http://127.0.0.1:9")
}

pub async fn send(router: Router, request: Request<Body>) -> Result<Response> {
    Ok(router.oneshot(request).await?)
}

pub fn get(path: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(token) = token {
        builder = builder.header("cookie", format!("token={}", token));
    }
    builder.body(Body::empty()).expect("valid request")
}

pub fn json_request(method: &str, path: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("cookie", format!("token={}", token));
    }
    builder.body(Body::from(body.to_string())).expect("valid request")
}

pub async fn body_json(response: Response) -> Result<Value> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

pub fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get("location")
        .and_then(|value| value.to_str().ok())
}
