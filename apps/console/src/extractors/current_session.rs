use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::error::AppError;
use crate::middleware::session_gate::SessionContext;
use crate::session::DenyReason;

/// The gated session of the current request.
///
/// Only available behind `SessionGuard`; anywhere else the extractor fails
/// as if no token had been presented.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub SessionContext);

impl CurrentSession {
    /// Company identifier from the token's `id` claim.
    pub fn company_id(&self) -> &str {
        &self.0.claims.id
    }

    /// Bearer token to forward upstream.
    pub fn token(&self) -> &str {
        &self.0.token
    }

    pub fn company_name(&self) -> Option<&str> {
        self.0.claims.company_name.as_deref()
    }
}

impl FromRequest for CurrentSession {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<SessionContext>()
                .cloned()
                .map(CurrentSession)
                .ok_or(AppError::session(DenyReason::NoToken)),
        )
    }
}
