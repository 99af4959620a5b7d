//! Session gate for protected routes.
//!
//! Reads the session cookie, runs the [`SessionGate`] against it and either
//! forwards the request with a [`SessionContext`] in its extensions, or
//! answers `303 See Other` to the login route. A stale cookie is removed in
//! the same response.

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage, HttpResponse};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use serde::Serialize;

use crate::http::cookies::removal_cookie;
use crate::logging::security;
use crate::session::{self, DenyReason, GateDecision, MemoryTokenStore, SessionClaims};
use crate::state::app_state::AppState;

/// The live session behind a request that passed the gate.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub token: String,
    pub claims: SessionClaims,
}

#[derive(Debug, Serialize)]
struct RedirectBody<'a> {
    message: &'a str,
    redirect: &'a str,
    reason: &'a str,
}

pub struct SessionGuard;

impl<S, B> Transform<S, ServiceRequest> for SessionGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionGuardMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionGuardMiddleware { service }))
    }
}

pub struct SessionGuardMiddleware<S> {
    service: S,
}

/// `303` to `{login}?reason=<code>`, dropping the cookie if it was stale.
fn redirect_response(
    reason: DenyReason,
    login_route: &str,
    cookie_name: &str,
    drop_cookie: bool,
) -> HttpResponse {
    let location = format!("{login_route}?reason={}", reason.code());
    let mut builder = HttpResponse::SeeOther();
    builder.insert_header((header::LOCATION, location.as_str()));
    if drop_cookie {
        builder.cookie(removal_cookie(cookie_name));
    }
    builder.json(RedirectBody {
        message: reason.message(),
        redirect: &location,
        reason: reason.code(),
    })
}

impl<S, B> Service<ServiceRequest> for SessionGuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
            return Box::pin(async {
                Err(actix_web::error::ErrorInternalServerError(
                    "AppState not available",
                ))
            });
        };

        let cookie_name = state.cookie_name().to_string();
        let stored = req.cookie(&cookie_name).map(|c| c.value().to_string());
        let store = MemoryTokenStore::with_token(stored.clone());

        let decision = state.gate.evaluate(&store, req.path(), session::unix_now());
        match decision {
            GateDecision::Allow { claims, .. } => {
                req.extensions_mut().insert(SessionContext {
                    token: stored.unwrap_or_default(),
                    claims,
                });

                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            GateDecision::Deny { reason, redirect } => {
                security::session_denied(req.path(), reason);

                let response = redirect_response(reason, &redirect, &cookie_name, store.is_dirty());
                Box::pin(async move { Ok(req.into_response(response).map_into_right_body()) })
            }
        }
    }
}
