// handlers/api/mod.rs - Form endpoints under /api
//
// These paths are excluded from the access gate. Handlers that need the
// backend read the credential cookie themselves and forward it as a bearer
// token.

pub mod copyright;
pub mod session;

pub use copyright::{copyright_get, copyright_put};
pub use session::{session_login, session_logout};

use axum::http::HeaderMap;

use crate::error::ApiError;
use crate::gate::token_present;
use crate::middleware::token_from_headers;
use crate::state::AppState;

/// Credential token from the request cookie, or 401
pub(crate) fn require_token(state: &AppState, headers: &HeaderMap) -> Result<String, ApiError> {
    token_from_headers(headers, state.token_cookie())
        .filter(|token| token_present(Some(token)))
        .ok_or_else(|| ApiError::unauthorized("Not logged in"))
}
