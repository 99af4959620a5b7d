//! Navigation guard for protected routes.

use tracing::debug;

use super::claims::{ClaimsDecoder, SessionClaims};
use super::store::TokenStore;
use super::token_state::{check_session, TokenState};

pub const LOGIN_ROUTE: &str = "/login";

/// Why a navigation attempt was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DenyReason {
    NoToken,
    InvalidToken,
    Expired,
}

impl DenyReason {
    /// Message shown on the login page.
    pub const fn message(self) -> &'static str {
        match self {
            DenyReason::NoToken => "Access denied Please log in !",
            DenyReason::InvalidToken => "An error occurred. Please log in again.",
            DenyReason::Expired => "Session expired. Please log in again.",
        }
    }

    /// Stable code carried in the redirect's `reason` query parameter.
    pub const fn code(self) -> &'static str {
        match self {
            DenyReason::NoToken => "no_token",
            DenyReason::InvalidToken => "invalid_token",
            DenyReason::Expired => "session_expired",
        }
    }
}

/// Outcome of one navigation attempt: exactly one of navigate or redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Allow {
        target: String,
        claims: SessionClaims,
    },
    Deny {
        reason: DenyReason,
        redirect: String,
    },
}

impl GateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GateDecision::Allow { .. })
    }

    /// Message to display; `None` for an allowed attempt.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            GateDecision::Allow { .. } => None,
            GateDecision::Deny { reason, .. } => Some(reason.message()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionGate {
    decoder: ClaimsDecoder,
    login_route: String,
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new(ClaimsDecoder::default())
    }
}

impl SessionGate {
    pub fn new(decoder: ClaimsDecoder) -> Self {
        Self {
            decoder,
            login_route: LOGIN_ROUTE.to_string(),
        }
    }

    pub fn with_login_route(mut self, route: impl Into<String>) -> Self {
        self.login_route = route.into();
        self
    }

    pub fn decoder(&self) -> &ClaimsDecoder {
        &self.decoder
    }

    pub fn login_route(&self) -> &str {
        &self.login_route
    }

    /// Decide whether navigation to `target` may proceed at `now`.
    ///
    /// Stale tokens are removed from `store` as part of the decision.
    pub fn evaluate(&self, store: &dyn TokenStore, target: &str, now: i64) -> GateDecision {
        let reason = match check_session(store, &self.decoder, now) {
            TokenState::Live(claims) => {
                debug!(target_route = %target, company_id = %claims.id, "navigation allowed");
                return GateDecision::Allow {
                    target: target.to_string(),
                    claims,
                };
            }
            TokenState::NoToken => DenyReason::NoToken,
            TokenState::Invalid => DenyReason::InvalidToken,
            TokenState::Expired(_) => DenyReason::Expired,
        };

        debug!(
            target_route = %target,
            reason = reason.code(),
            "navigation denied, redirecting to login"
        );
        GateDecision::Deny {
            reason,
            redirect: self.login_route.clone(),
        }
    }
}
