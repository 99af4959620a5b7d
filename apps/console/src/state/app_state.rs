use crate::config::ConsoleConfig;
use crate::notice::Notice;
use crate::session::{ClaimsDecoder, SessionGate};
use crate::upstream::ApiClient;

/// Shared gateway state, cloned into every worker.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: ConsoleConfig,
    pub gate: SessionGate,
    pub api: ApiClient,
}

impl AppState {
    pub fn new(config: ConsoleConfig, api: ApiClient) -> Self {
        let gate = SessionGate::new(config.claims_decoder());
        Self {
            config,
            gate,
            api,
        }
    }

    pub fn decoder(&self) -> &ClaimsDecoder {
        self.gate.decoder()
    }

    pub fn cookie_name(&self) -> &str {
        &self.config.cookie_name
    }

    pub fn success(&self, message: impl Into<String>) -> Notice {
        Notice::success(message).with_ttl(self.config.notice_ttl_ms)
    }

    pub fn error_notice(&self, message: impl Into<String>) -> Notice {
        Notice::error(message).with_ttl(self.config.notice_ttl_ms)
    }
}
