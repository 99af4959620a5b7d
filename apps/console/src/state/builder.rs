use crate::config::ConsoleConfig;
use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;
use crate::upstream::ApiClient;

/// Builder for [`AppState`] (used in both tests and main).
pub struct StateBuilder {
    config: ConsoleConfig,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            config: ConsoleConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ConsoleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_api_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.api_base_url = base_url.into();
        self
    }

    /// Switch to signature-checked token decoding.
    pub fn with_security(mut self, security: SecurityConfig) -> Self {
        self.config.jwt_secret = Some(security.jwt_secret);
        self
    }

    pub fn build(self) -> Result<AppState, AppError> {
        let api = ApiClient::new(self.config.api_base_url.clone())?;
        Ok(AppState::new(self.config, api))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
