//! The company name shown in the console header.

use std::sync::Arc;

use parking_lot::RwLock;

use super::claims::ClaimsDecoder;
use super::store::TokenStore;
use super::token_state::{check_session, TokenState};

/// Display-name cell of one console session.
///
/// Only the token-decode path writes it: a live token stores its
/// `companyName`, anything else stores `None`. Clones share the same cell.
/// The gateway keeps one per request, so a name never crosses sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionDisplay {
    company_name: Arc<RwLock<Option<String>>>,
}

impl SessionDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn company_name(&self) -> Option<String> {
        self.company_name.read().clone()
    }

    /// Recompute the display name from the stored token at `now` and return
    /// the value written.
    ///
    /// Uses the same decode and expiry rules as the navigation gate, so the
    /// header never shows a name the gate would refuse. The cell stays
    /// write-locked from decode to return.
    pub fn resolve(
        &self,
        store: &dyn TokenStore,
        decoder: &ClaimsDecoder,
        now: i64,
    ) -> Option<String> {
        let mut cell = self.company_name.write();
        *cell = match check_session(store, decoder, now) {
            TokenState::Live(claims) => claims.company_name,
            TokenState::NoToken | TokenState::Invalid | TokenState::Expired(_) => None,
        };
        cell.clone()
    }
}
