//! Client-side navigation driven by the session gate.

use std::sync::Arc;

use super::gate::{GateDecision, SessionGate};
use super::store::TokenStore;

/// Current location plus the last message the gate produced.
pub struct Navigator {
    gate: SessionGate,
    store: Arc<dyn TokenStore>,
    location: String,
    message: Option<&'static str>,
}

impl Navigator {
    pub fn new(gate: SessionGate, store: Arc<dyn TokenStore>, start: impl Into<String>) -> Self {
        Self {
            gate,
            store,
            location: start.into(),
            message: None,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn message(&self) -> Option<&'static str> {
        self.message
    }

    /// Attempt to open a protected route.
    ///
    /// Ends either at `target` with the message cleared or at the login route
    /// with the denial message recorded.
    pub fn navigate(&mut self, target: &str, now: i64) -> GateDecision {
        let decision = self.gate.evaluate(self.store.as_ref(), target, now);
        match &decision {
            GateDecision::Allow { target, .. } => {
                self.location = target.clone();
                self.message = None;
            }
            GateDecision::Deny { reason, redirect } => {
                self.location = redirect.clone();
                self.message = Some(reason.message());
            }
        }
        decision
    }

    /// Move to a public route without consulting the gate.
    pub fn open_public(&mut self, route: impl Into<String>) {
        self.location = route.into();
    }
}
