// backend/mod.rs - HTTP client for the remote blog backend
//
// The admin front-end owns no data. Login and the copyright resource are
// fetched from the backend on every call; failures are reported to the form
// that made the call and are not retried.

use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::config::BackendConfig;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid backend response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Copyright text resource shown in the site footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Copyright {
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: Url,
    http: reqwest::Client,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        // Trailing slash keeps Url::join from dropping the last path segment
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&normalized)?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::Unavailable(e.to_string()))?;

        Ok(Self { base_url, http })
    }

    pub fn from_config(config: &BackendConfig) -> Result<Self, BackendError> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, BackendError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Exchange credentials for a token
    pub async fn login(&self, username: &str, password: &str) -> Result<String, BackendError> {
        let url = self.endpoint("auth/login")?;
        tracing::debug!("Backend login for user '{}'", username);

        let response = self
            .http
            .post(url)
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(|e| BackendError::Unavailable(e.to_string()))?;

        let body = read_body(response).await?;
        extract_token(&body)
    }

    pub async fn get_copyright(&self, token: &str) -> Result<Copyright, BackendError> {
        let url = self.endpoint("copyright")?;

        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| BackendError::Unavailable(e.to_string()))?;

        let body = read_body(response).await?;
        extract_copyright(body)
    }

    pub async fn update_copyright(&self, token: &str, text: &str) -> Result<Copyright, BackendError> {
        let url = self.endpoint("copyright")?;

        let response = self
            .http
            .put(url)
            .bearer_auth(token)
            .json(&Copyright { text: text.to_string() })
            .send()
            .await
            .map_err(|e| BackendError::Unavailable(e.to_string()))?;

        let body = read_body(response).await?;
        extract_copyright(body)
    }
}

/// Read a JSON body, mapping non-success statuses onto BackendError
async fn read_body(response: reqwest::Response) -> Result<Value, BackendError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| BackendError::Unavailable(e.to_string()))?;

    if status.is_server_error() {
        tracing::warn!("Backend returned {}: {}", status, text);
        return Err(BackendError::Unavailable(format!("backend returned {}", status)));
    }

    let body: Value = if text.trim().is_empty() {
        Value::Null
    } else {
        match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(e) if status.is_success() => return Err(BackendError::InvalidResponse(e.to_string())),
            Err(_) => Value::String(text),
        }
    };

    if !status.is_success() {
        return Err(BackendError::Rejected {
            status,
            message: error_message(&body, status),
        });
    }

    Ok(body)
}

fn error_message(body: &Value, status: StatusCode) -> String {
    body.get("message")
        .or_else(|| body.get("error"))
        .and_then(Value::as_str)
        .or_else(|| body.as_str())
        .filter(|msg| !msg.trim().is_empty())
        .map(|msg| msg.to_string())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request rejected")
                .to_string()
        })
}

/// Accepts either `{ "token": .. }` or the enveloped `{ "data": { "token": .. } }`
fn extract_token(body: &Value) -> Result<String, BackendError> {
    body.get("token")
        .or_else(|| body.get("data").and_then(|data| data.get("token")))
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
        .ok_or_else(|| BackendError::InvalidResponse("login response has no token".to_string()))
}

fn extract_copyright(body: Value) -> Result<Copyright, BackendError> {
    let data = body.get("data").filter(|data| data.is_object()).cloned();

    serde_json::from_value(data.unwrap_or(body)).map_err(|e| BackendError::InvalidResponse(e.to_string()))
}
