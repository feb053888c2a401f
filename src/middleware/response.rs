use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::json;

/// Wrapper for JSON responses that adds the success envelope
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub set_cookie: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful 200 response
    pub fn success(data: T) -> Self {
        Self {
            data,
            set_cookie: None,
        }
    }

    /// Attach a `Set-Cookie` header to the response
    pub fn with_cookie(mut self, cookie: String) -> Self {
        self.set_cookie = Some(cookie);
        self
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let data_value = match serde_json::to_value(&self.data) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to serialize response data: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "success": false,
                        "error": "Failed to serialize response data"
                    })),
                )
                    .into_response();
            }
        };

        let envelope = json!({
            "success": true,
            "data": data_value
        });

        let mut response = (StatusCode::OK, Json(envelope)).into_response();

        if let Some(cookie) = self.set_cookie {
            match HeaderValue::from_str(&cookie) {
                Ok(value) => {
                    response.headers_mut().append(header::SET_COOKIE, value);
                }
                Err(e) => {
                    tracing::error!("Refusing to send malformed cookie: {}", e);
                    return StatusCode::INTERNAL_SERVER_ERROR.into_response();
                }
            }
        }

        response
    }
}

/// Convenience trait for easy conversion to ApiResponse
pub trait IntoApiResponse<T: Serialize> {
    fn into_api_response(self) -> ApiResponse<T>;
}

impl<T: Serialize> IntoApiResponse<T> for T {
    fn into_api_response(self) -> ApiResponse<T> {
        ApiResponse::success(self)
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;
