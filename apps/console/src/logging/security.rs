use tracing::{info, warn};

use crate::logging::pii::Redacted;
use crate::session::DenyReason;
use crate::trace_ctx;

/// Log a rejected login or signup at the upstream auth service.
pub fn auth_failed(action: &str, email: &str, status: Option<u16>) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_AUTH_FAILED",
        %trace_id,
        action,
        email = %Redacted(email),
        upstream_status = status,
        "Authentication failure"
    );
}

/// Log a protected navigation the session gate refused.
pub fn session_denied(path: &str, reason: DenyReason) {
    let trace_id = trace_ctx::trace_id();

    info!(
        event = "SECURITY_SESSION_DENIED",
        %trace_id,
        path,
        reason = reason.code(),
        "Session gate redirected to login"
    );
}
