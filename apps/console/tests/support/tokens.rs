use console::session::unix_now;
use console::{mint_session_token, session_claims, SecurityConfig};

/// A token valid for the next hour, signed with the default test secret.
pub fn live_token(company_id: &str, company_name: &str) -> String {
    token_expiring_in(company_id, Some(company_name), 3600)
}

/// A well-formed token that expired a minute ago.
pub fn expired_token(company_id: &str, company_name: &str) -> String {
    token_expiring_in(company_id, Some(company_name), -60)
}

pub fn token_expiring_in(company_id: &str, company_name: Option<&str>, ttl_secs: i64) -> String {
    let claims = session_claims(company_id, company_name, unix_now(), ttl_secs);
    mint_session_token(&claims, &SecurityConfig::default()).expect("mint test token")
}
