use axum::extract::Query;
use serde::{Deserialize, Serialize};

use crate::middleware::{ApiResult, IntoApiResponse};

#[derive(Debug, Default, Deserialize)]
pub struct LoginPageQuery {
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginPage {
    pub page: &'static str,
    pub fields: &'static [&'static str],
    pub submit: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /login - login form descriptor
///
/// A failed submission may bounce back here with `?error=...`, which is shown
/// inline above the form. There is no retry beyond resubmitting.
pub async fn login_page(Query(query): Query<LoginPageQuery>) -> ApiResult<LoginPage> {
    let error = query.error.filter(|msg| !msg.trim().is_empty());

    Ok(LoginPage {
        page: "login",
        fields: &["username", "password"],
        submit: "/api/login",
        error,
    }
    .into_api_response())
}
