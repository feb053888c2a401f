use axum::{extract::State, http::HeaderMap, Json};
use serde::Deserialize;

use super::require_token;
use crate::backend::Copyright;
use crate::error::ApiError;
use crate::middleware::{ApiResult, IntoApiResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CopyrightBody {
    pub text: String,
}

/// GET /api/copyright - current copyright text from the backend
pub async fn copyright_get(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<Copyright> {
    let token = require_token(&state, &headers)?;
    let copyright = state.backend.get_copyright(&token).await?;
    Ok(copyright.into_api_response())
}

/// PUT /api/copyright - replace the copyright text
pub async fn copyright_put(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CopyrightBody>,
) -> ApiResult<Copyright> {
    let token = require_token(&state, &headers)?;

    if body.text.trim().is_empty() {
        return Err(ApiError::bad_request("Copyright text cannot be empty"));
    }

    let copyright = state.backend.update_copyright(&token, &body.text).await?;
    tracing::info!("Copyright text updated");
    Ok(copyright.into_api_response())
}
