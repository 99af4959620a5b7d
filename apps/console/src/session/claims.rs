//! Session claims and token decoding.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::state::security_config::SecurityConfig;

/// Claims carried by the auth service's session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Company identifier; some issuers encode it as a number.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(
        rename = "companyName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Expiry (seconds since epoch). Fractional values are floored.
    #[serde(deserialize_with = "whole_seconds")]
    pub exp: i64,
}

impl SessionClaims {
    /// Live iff the expiry is strictly after `now`.
    pub fn is_live_at(&self, now: i64) -> bool {
        self.exp > now
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}

fn whole_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Seconds {
        Whole(i64),
        Fractional(f64),
    }

    Ok(match Seconds::deserialize(deserializer)? {
        Seconds::Whole(secs) => secs,
        Seconds::Fractional(secs) => secs.floor() as i64,
    })
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("token is not a three-part JWT")]
    Malformed,
    #[error("token payload is not valid base64url: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("token payload is not valid claims JSON: {0}")]
    Claims(#[from] serde_json::Error),
    #[error("token rejected: {0}")]
    Rejected(#[from] jsonwebtoken::errors::Error),
}

/// How stored tokens are turned into claims.
///
/// `Unverified` reads the payload the way a browser does; `Verified` also
/// checks the signature with the configured secret. Expiry is never judged
/// here: callers compare `exp` against an explicit `now`.
#[derive(Debug, Clone, Default)]
pub enum ClaimsDecoder {
    #[default]
    Unverified,
    Verified(SecurityConfig),
}

impl ClaimsDecoder {
    pub fn decode(&self, token: &str) -> Result<SessionClaims, SessionError> {
        match self {
            ClaimsDecoder::Unverified => decode_unverified(token),
            ClaimsDecoder::Verified(security) => decode_verified(token, security),
        }
    }
}

fn decode_unverified(token: &str) -> Result<SessionClaims, SessionError> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(SessionError::Malformed);
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn decode_verified(token: &str, security: &SecurityConfig) -> Result<SessionClaims, SessionError> {
    let mut validation = Validation::new(security.algorithm);
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )?;
    Ok(data.claims)
}
