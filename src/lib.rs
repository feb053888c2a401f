pub mod backend;
pub mod config;
pub mod error;
pub mod gate;
pub mod handlers;
pub mod middleware;
pub mod state;

use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub use gate::{decide, AccessGate, Decision};
pub use state::AppState;

/// Build the full router: pages and API routes behind the access gate
pub fn app(state: AppState) -> Router {
    let mut router = Router::new()
        .merge(page_routes())
        .merge(api_routes())
        .route("/health", get(handlers::health))
        .fallback(not_found)
        // Every request passes the gate; excluded paths continue untouched
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::access_gate_middleware,
        ));

    if state.config.security.enable_cors {
        router = router.layer(cors_layer(&state.config.security.cors_origins));
    }

    if state.config.server.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router.with_state(state)
}

fn page_routes() -> Router<AppState> {
    use handlers::pages;

    Router::new()
        .route("/", get(pages::dashboard_page))
        .route("/login", get(pages::login_page))
        .route("/copyright", get(pages::copyright_page))
        .route("/editor", get(pages::editor_page))
}

fn api_routes() -> Router<AppState> {
    use handlers::api;

    Router::new()
        .route("/api/login", post(api::session_login))
        .route("/api/logout", post(api::session_logout))
        .route("/api/copyright", get(api::copyright_get).put(api::copyright_put))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new().allow_origin(AllowOrigin::list(origins))
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": true,
            "message": "Not found",
            "code": "NOT_FOUND"
        })),
    )
}
