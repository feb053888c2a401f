use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::gate::Decision;
use crate::middleware::cookies::token_from_headers;
use crate::state::AppState;

/// Route access middleware.
///
/// Runs the access gate for every navigation request. `Continue` hands the
/// original request to the next service untouched; `Redirect` answers with a
/// 307 and the page handler never runs.
pub async fn access_gate_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    let token = token_from_headers(request.headers(), state.token_cookie());
    let decision = state.gate.evaluate(&path, token.as_deref());

    match decision {
        Decision::Continue => {
            tracing::trace!("Access gate: continue {}", path);
            next.run(request).await
        }
        Decision::Redirect(target) => {
            tracing::debug!("Access gate: redirect {} -> {}", path, target);
            Redirect::temporary(&target).into_response()
        }
    }
}
