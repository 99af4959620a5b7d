//! Gateway configuration.
//!
//! Every setting comes from a `CONSOLE_*` environment variable (CORS origins
//! use `CORS_ALLOWED_ORIGINS`). Unset variables fall back to defaults suited
//! to local development; set-but-invalid values are errors.

use std::env;

use thiserror::Error;

use crate::session::ClaimsDecoder;
use crate::state::security_config::SecurityConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_COOKIE_NAME: &str = "token";
pub const DEFAULT_NOTICE_TTL_MS: u64 = 2000;
pub const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub host: String,
    pub port: u16,
    /// Base URL of the recruitment REST API, without a trailing slash.
    pub api_base_url: String,
    /// When set, session tokens are signature-checked with this secret.
    pub jwt_secret: Option<Vec<u8>>,
    pub cookie_name: String,
    pub notice_ttl_ms: u64,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            jwt_secret: None,
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            notice_ttl_ms: DEFAULT_NOTICE_TTL_MS,
            cors_allowed_origins: DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ConsoleConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = var("CONSOLE_HOST").unwrap_or(defaults.host);

        let port = match var("CONSOLE_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "CONSOLE_PORT",
                expected: "a valid port number",
                value: raw,
            })?,
            None => defaults.port,
        };

        let api_base_url = match var("CONSOLE_API_BASE_URL") {
            Some(raw) if raw.starts_with("http://") || raw.starts_with("https://") => {
                raw.trim_end_matches('/').to_string()
            }
            Some(raw) => {
                return Err(ConfigError::Invalid {
                    name: "CONSOLE_API_BASE_URL",
                    expected: "an http(s) URL",
                    value: raw,
                })
            }
            None => defaults.api_base_url,
        };

        let jwt_secret = var("CONSOLE_JWT_SECRET").map(String::into_bytes);

        let cookie_name = match var("CONSOLE_COOKIE_NAME") {
            Some(raw) if raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') => {
                raw
            }
            Some(raw) => {
                return Err(ConfigError::Invalid {
                    name: "CONSOLE_COOKIE_NAME",
                    expected: "an alphanumeric cookie name",
                    value: raw,
                })
            }
            None => defaults.cookie_name,
        };

        let notice_ttl_ms = match var("CONSOLE_NOTICE_TTL_MS") {
            Some(raw) => raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
                name: "CONSOLE_NOTICE_TTL_MS",
                expected: "a number of milliseconds",
                value: raw,
            })?,
            None => defaults.notice_ttl_ms,
        };

        let cors_allowed_origins = var("CORS_ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .filter(|origins| !origins.is_empty())
            .unwrap_or(defaults.cors_allowed_origins);

        Ok(Self {
            host,
            port,
            api_base_url,
            jwt_secret,
            cookie_name,
            notice_ttl_ms,
            cors_allowed_origins,
        })
    }

    pub fn security(&self) -> Option<SecurityConfig> {
        self.jwt_secret.clone().map(SecurityConfig::new)
    }

    /// Verified decoding when a secret is configured, payload-only otherwise.
    pub fn claims_decoder(&self) -> ClaimsDecoder {
        match self.security() {
            Some(security) => ClaimsDecoder::Verified(security),
            None => ClaimsDecoder::Unverified,
        }
    }
}

/// Non-empty, trimmed value of an environment variable.
fn var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Comma-separated origins; empty, `null` and non-http entries are dropped.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect()
}
