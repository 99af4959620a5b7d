use std::sync::Arc;

use console::session::{
    ClaimsDecoder, DenyReason, GateDecision, MemoryTokenStore, Navigator, SessionClaims,
    SessionGate, TokenStore, LOGIN_ROUTE,
};
use console::{mint_session_token, SecurityConfig};

const NOW: i64 = 1_700_000_000;

fn token_with_exp(exp: i64) -> String {
    let claims = SessionClaims {
        id: "42".to_string(),
        company_name: Some("Acme".to_string()),
        email: Some("hr@acme.com".to_string()),
        exp,
    };
    mint_session_token(&claims, &SecurityConfig::default()).unwrap()
}

fn store_with(token: &str) -> MemoryTokenStore {
    MemoryTokenStore::with_token(Some(token.to_string()))
}

#[test]
fn no_token_is_denied_to_login() {
    let gate = SessionGate::default();
    let store = MemoryTokenStore::new();

    let decision = gate.evaluate(&store, "/jobs", NOW);

    assert_eq!(
        decision,
        GateDecision::Deny {
            reason: DenyReason::NoToken,
            redirect: LOGIN_ROUTE.to_string(),
        }
    );
    assert_eq!(decision.message(), Some("Access denied Please log in !"));
}

#[test]
fn token_expired_one_second_ago_is_denied_and_removed() {
    let gate = SessionGate::default();
    let store = store_with(&token_with_exp(NOW - 1));

    let decision = gate.evaluate(&store, "/jobs", NOW);

    assert_eq!(decision.message(), Some("Session expired. Please log in again."));
    assert_eq!(store.load(), None);
    assert!(store.is_dirty());
}

#[test]
fn expiry_equal_to_now_counts_as_expired() {
    let gate = SessionGate::default();
    let store = store_with(&token_with_exp(NOW));

    assert!(!gate.evaluate(&store, "/jobs", NOW).is_allowed());
}

#[test]
fn garbage_token_is_denied_and_removed() {
    let gate = SessionGate::default();
    let store = store_with("definitely.not-a.jwt");

    let decision = gate.evaluate(&store, "/company-details", NOW);

    assert_eq!(
        decision.message(),
        Some("An error occurred. Please log in again.")
    );
    assert_eq!(store.load(), None);
}

#[test]
fn far_future_token_is_allowed_with_its_claims() {
    let gate = SessionGate::default();
    let token = token_with_exp(NOW + 86_400 * 365);
    let store = store_with(&token);

    match gate.evaluate(&store, "/jobs", NOW) {
        GateDecision::Allow { target, claims } => {
            assert_eq!(target, "/jobs");
            assert_eq!(claims.company_name.as_deref(), Some("Acme"));
        }
        other => panic!("expected allow, got {other:?}"),
    }
    assert_eq!(store.load(), Some(token));
    assert!(!store.is_dirty());
}

#[test]
fn verified_gate_rejects_foreign_signatures() {
    let gate = SessionGate::new(ClaimsDecoder::Verified(SecurityConfig::new(
        "a_different_secret".as_bytes(),
    )));
    let store = store_with(&token_with_exp(NOW + 60));

    let decision = gate.evaluate(&store, "/jobs", NOW);

    assert!(matches!(
        decision,
        GateDecision::Deny {
            reason: DenyReason::InvalidToken,
            ..
        }
    ));
}

#[test]
fn custom_login_route_is_the_redirect() {
    let gate = SessionGate::default().with_login_route("/signin");
    let decision = gate.evaluate(&MemoryTokenStore::new(), "/jobs", NOW);
    assert!(matches!(decision, GateDecision::Deny { ref redirect, .. } if redirect == "/signin"));
}

#[test]
fn navigator_ends_each_attempt_in_exactly_one_place() {
    let store = Arc::new(MemoryTokenStore::new());
    let mut nav = Navigator::new(SessionGate::default(), store.clone(), "/");

    nav.navigate("/jobs", NOW);
    assert_eq!(nav.location(), "/login");
    assert_eq!(nav.message(), Some("Access denied Please log in !"));

    store.save(&token_with_exp(NOW + 60));
    nav.navigate("/jobs", NOW);
    assert_eq!(nav.location(), "/jobs");
    assert_eq!(nav.message(), None);

    nav.navigate("/applied-jobs", NOW + 60);
    assert_eq!(nav.location(), "/login");
    assert_eq!(nav.message(), Some("Session expired. Please log in again."));
    assert_eq!(store.load(), None);
}

#[test]
fn decisions_are_never_cached() {
    let gate = SessionGate::default();
    let store = store_with(&token_with_exp(NOW + 10));

    assert!(gate.evaluate(&store, "/jobs", NOW).is_allowed());
    assert!(gate.evaluate(&store, "/jobs", NOW + 9).is_allowed());
    assert!(!gate.evaluate(&store, "/jobs", NOW + 10).is_allowed());
}
