use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::middleware::{clear_token_cookie, is_cookie_value, set_token_cookie, ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResult {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct LogoutResult {
    pub logged_out: bool,
}

/// POST /api/login - exchange credentials with the backend and store the token cookie
pub async fn session_login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> ApiResult<LoginResult> {
    let username = body.username.trim();
    if username.is_empty() || body.password.is_empty() {
        return Err(ApiError::bad_request("Username and password are required"));
    }

    let token = state.backend.login(username, &body.password).await.map_err(|e| {
        tracing::info!("Login failed for '{}': {}", username, e);
        ApiError::from(e)
    })?;

    if !is_cookie_value(&token) {
        tracing::error!("Backend issued a token that cannot be stored in a cookie");
        return Err(ApiError::bad_gateway("Unexpected response from backend"));
    }

    tracing::info!("Login succeeded for '{}'", username);
    let cookie = set_token_cookie(state.token_cookie(), &token, state.secure_cookies());

    Ok(ApiResponse::success(LoginResult { token }).with_cookie(cookie))
}

/// POST /api/logout - expire the token cookie
pub async fn session_logout(State(state): State<AppState>) -> ApiResult<LogoutResult> {
    let cookie = clear_token_cookie(state.token_cookie(), state.secure_cookies());
    Ok(ApiResponse::success(LogoutResult { logged_out: true }).with_cookie(cookie))
}
