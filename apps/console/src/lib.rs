#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod config;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod notice;
pub mod routes;
pub mod session;
pub mod state;
pub mod telemetry;
pub mod trace_ctx;
pub mod upstream;
pub mod validation;

pub use auth::jwt::{mint_session_token, session_claims};
pub use config::ConsoleConfig;
pub use error::AppError;
pub use errors::ErrorCode;
pub use extractors::{CurrentSession, ValidatedForm, ValidatedJson};
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::session_gate::SessionGuard;
pub use middleware::structured_logger::StructuredLogger;
pub use middleware::trace_span::TraceSpan;
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    console_test_support::logging::init();
}
