use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

use crate::gate::{AccessGate, DEFAULT_EXCLUDED_PREFIXES, LOGIN_PATH, ROOT_PATH};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub gate: GateConfig,
    pub backend: BackendConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub enable_request_logging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    pub token_cookie: String,
    pub root_path: String,
    pub login_path: String,
    pub excluded_prefixes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub enable_cors: bool,
    pub cors_origins: Vec<String>,
    pub secure_cookies: bool,
}

impl GateConfig {
    pub fn access_gate(&self) -> AccessGate {
        AccessGate::new(
            self.root_path.clone(),
            self.login_path.clone(),
            self.excluded_prefixes.clone(),
        )
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            token_cookie: "token".to_string(),
            root_path: ROOT_PATH.to_string(),
            login_path: LOGIN_PATH.to_string(),
            excluded_prefixes: DEFAULT_EXCLUDED_PREFIXES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Ok(v) = env::var("ADMIN_PORT").or_else(|_| env::var("PORT")) {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }
        if let Ok(v) = env::var("SERVER_ENABLE_REQUEST_LOGGING") {
            self.server.enable_request_logging = v.parse().unwrap_or(self.server.enable_request_logging);
        }

        // Gate overrides
        if let Ok(v) = env::var("GATE_TOKEN_COOKIE") {
            if !v.trim().is_empty() {
                self.gate.token_cookie = v.trim().to_string();
            }
        }
        if let Ok(v) = env::var("GATE_ROOT_PATH") {
            self.gate.root_path = v;
        }
        if let Ok(v) = env::var("GATE_LOGIN_PATH") {
            self.gate.login_path = v;
        }
        if let Ok(v) = env::var("GATE_EXCLUDED_PREFIXES") {
            self.gate.excluded_prefixes = split_list(&v);
        }

        // Backend overrides
        if let Ok(v) = env::var("BACKEND_URL") {
            self.backend.base_url = v;
        }
        if let Ok(v) = env::var("BACKEND_TIMEOUT_SECS") {
            self.backend.timeout_secs = v.parse().unwrap_or(self.backend.timeout_secs);
        }

        // Security overrides
        if let Ok(v) = env::var("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }
        if let Ok(v) = env::var("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = split_list(&v);
        }
        if let Ok(v) = env::var("SECURITY_SECURE_COOKIES") {
            self.security.secure_cookies = v.parse().unwrap_or(self.security.secure_cookies);
        }

        self
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                port: 3000,
                enable_request_logging: true,
            },
            gate: GateConfig::default(),
            backend: BackendConfig {
                base_url: "http://localhost:8080".to_string(),
                timeout_secs: 30,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["http://localhost:3000".to_string(), "http://localhost:5173".to_string()],
                secure_cookies: false,
            },
        }
    }

    pub fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig {
                port: 3000,
                enable_request_logging: true,
            },
            gate: GateConfig::default(),
            backend: BackendConfig {
                base_url: "https://api.staging.example.com".to_string(),
                timeout_secs: 10,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["https://admin.staging.example.com".to_string()],
                secure_cookies: true,
            },
        }
    }

    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                port: 3000,
                enable_request_logging: false,
            },
            gate: GateConfig::default(),
            backend: BackendConfig {
                base_url: "https://api.example.com".to_string(),
                timeout_secs: 5,
            },
            security: SecurityConfig {
                enable_cors: false,
                cors_origins: vec!["https://admin.example.com".to_string()],
                secure_cookies: true,
            },
        }
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
