//! The decode+expiry primitive shared by the navigation gate and the
//! display-name resolver.

use tracing::debug;

use super::claims::{ClaimsDecoder, SessionClaims};
use super::store::TokenStore;
use crate::logging::pii::Redacted;

/// What the stored token amounts to at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenState {
    NoToken,
    /// The token could not be decoded.
    Invalid,
    /// Decoded, but `exp <= now`.
    Expired(SessionClaims),
    Live(SessionClaims),
}

impl TokenState {
    /// Classify a stored value. Blank values count as absent.
    pub fn inspect(stored: Option<&str>, decoder: &ClaimsDecoder, now: i64) -> Self {
        let Some(token) = stored.map(str::trim).filter(|token| !token.is_empty()) else {
            return TokenState::NoToken;
        };

        match decoder.decode(token) {
            Ok(claims) if claims.is_live_at(now) => TokenState::Live(claims),
            Ok(claims) => TokenState::Expired(claims),
            Err(err) => {
                debug!(
                    error = %Redacted(&err.to_string()),
                    "stored session token failed to decode"
                );
                TokenState::Invalid
            }
        }
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, TokenState::Invalid | TokenState::Expired(_))
    }

    pub fn live_claims(&self) -> Option<&SessionClaims> {
        match self {
            TokenState::Live(claims) => Some(claims),
            _ => None,
        }
    }
}

/// Read the store, classify the token, and discard any stored value that is
/// not a live token (stale or blank).
///
/// Every call re-reads the store; nothing is cached between calls.
pub fn check_session(store: &dyn TokenStore, decoder: &ClaimsDecoder, now: i64) -> TokenState {
    let stored = store.load();
    let state = TokenState::inspect(stored.as_deref(), decoder, now);

    if let Some(token) = stored.as_deref() {
        if state.live_claims().is_none() {
            store.discard(token);
        }
    }

    state
}
