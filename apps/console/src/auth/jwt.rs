use jsonwebtoken::{encode, EncodingKey, Header};

use crate::error::AppError;
use crate::session::SessionClaims;
use crate::state::security_config::SecurityConfig;

/// Sign session claims into a compact JWT.
///
/// Production tokens come from the auth service; this is what local
/// development and the test harness use to stand in for it.
pub fn mint_session_token(
    claims: &SessionClaims,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    encode(
        &Header::new(security.algorithm),
        claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Claims for `company_id` expiring `ttl_secs` after `now`.
pub fn session_claims(
    company_id: &str,
    company_name: Option<&str>,
    now: i64,
    ttl_secs: i64,
) -> SessionClaims {
    SessionClaims {
        id: company_id.to_string(),
        company_name: company_name.map(str::to_string),
        email: None,
        exp: now + ttl_secs,
    }
}
