use std::sync::Arc;

use crate::backend::{BackendClient, BackendError};
use crate::config::AppConfig;
use crate::gate::AccessGate;

/// Shared, read-only state handed to every handler and to the gate middleware
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub gate: Arc<AccessGate>,
    pub backend: BackendClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, BackendError> {
        let backend = BackendClient::from_config(&config.backend)?;
        let gate = config.gate.access_gate();

        Ok(Self {
            config: Arc::new(config),
            gate: Arc::new(gate),
            backend,
        })
    }

    pub fn token_cookie(&self) -> &str {
        &self.config.gate.token_cookie
    }

    pub fn secure_cookies(&self) -> bool {
        self.config.security.secure_cookies
    }
}
