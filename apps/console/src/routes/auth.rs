//! Public account flows, forwarded to the auth service.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{FormRejection, ValidatedForm};
use crate::http::cookies::{removal_cookie, session_cookie};
use crate::logging::pii::Redacted;
use crate::logging::security;
use crate::notice::{self, Notice};
use crate::session::{SessionError, LOGIN_ROUTE};
use crate::state::app_state::AppState;
use crate::upstream::UpstreamError;
use crate::validation::credentials::normalize_email;
use crate::validation::{ForgotPasswordRequest, LoginCredentials, PasswordReset, SignupCredentials};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginView {
    company_name: Option<String>,
    notice: Notice,
}

#[derive(Debug, Serialize)]
struct NoticeView {
    notice: Notice,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyView {
    user_verified: bool,
    notice: Notice,
}

/// `?token=` carried by emailed links.
#[derive(Debug, Deserialize)]
pub struct OneTimeToken {
    #[serde(default)]
    token: Option<String>,
}

impl OneTimeToken {
    fn require(&self) -> Result<&str, AppError> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                AppError::bad_request(ErrorCode::MissingOneTimeToken, "token query parameter is required")
            })
    }
}

/// "Error: <upstream body>" as the reset pages show it.
fn error_notice_text(err: &AppError) -> String {
    let detail = err.detail();
    if detail.trim().is_empty() {
        format!("Error: {}", notice::PASSWORD_RESET_FAILED)
    } else {
        format!("Error: {detail}")
    }
}

async fn login(
    form: ValidatedForm<LoginCredentials>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, FormRejection> {
    let credentials = form.into_inner().normalized();

    let response = app_state.api.login(&credentials).await.map_err(|err| {
        security::auth_failed("login", &credentials.email, err.status());
        AppError::from(err).with_notice(notice::LOGIN_FAILED)
    })?;

    let claims = app_state
        .decoder()
        .decode(&response.token)
        .map_err(|err: SessionError| {
            security::auth_failed("login", &credentials.email, None);
            AppError::from(UpstreamError::Status {
                status: 502,
                body: err.to_string(),
            })
            .with_notice(notice::LOGIN_FAILED)
        })?;

    info!(email = %Redacted(&credentials.email), company_id = %claims.id, "login succeeded");

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(app_state.cookie_name(), &response.token))
        .json(LoginView {
            company_name: claims.company_name,
            notice: app_state.success(notice::LOGIN_SUCCESS),
        }))
}

async fn signup(
    form: ValidatedForm<SignupCredentials>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, FormRejection> {
    let credentials = form.into_inner();

    app_state.api.register(&credentials).await.map_err(|err| {
        security::auth_failed("signup", &credentials.email, err.status());
        match err.status() {
            Some(409) => AppError::conflict(ErrorCode::EmailExists, notice::EMAIL_EXISTS),
            _ => AppError::from(err).with_notice(notice::SIGNUP_FAILED),
        }
    })?;

    Ok(HttpResponse::Ok().json(NoticeView {
        notice: app_state.success(notice::SIGNUP_SUCCESS),
        redirect: None,
    }))
}

async fn logout(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok()
        .cookie(removal_cookie(app_state.cookie_name()))
        .json(NoticeView {
            notice: app_state.success(notice::LOGGED_OUT),
            redirect: Some(LOGIN_ROUTE),
        }))
}

async fn forgot_password(
    form: ValidatedForm<ForgotPasswordRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, FormRejection> {
    let email = normalize_email(&form.email);

    app_state.api.forgot_password(&email).await.map_err(|err| {
        let err = AppError::from(err);
        let text = error_notice_text(&err);
        err.with_notice(text)
    })?;

    Ok(HttpResponse::Ok().json(NoticeView {
        notice: app_state.success(notice::RESET_LINK_SENT),
        redirect: None,
    }))
}

async fn reset_password(
    query: web::Query<OneTimeToken>,
    form: ValidatedForm<PasswordReset>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, FormRejection> {
    let token = query.require()?;

    let message = app_state
        .api
        .reset_password(token, &form.new_password)
        .await
        .map_err(|err| {
            let err = AppError::from(err);
            let text = error_notice_text(&err);
            err.with_notice(text)
        })?;

    let message = if message.trim().is_empty() {
        "Password reset successfully".to_string()
    } else {
        message
    };

    Ok(HttpResponse::Ok().json(NoticeView {
        notice: app_state.success(message),
        redirect: Some(LOGIN_ROUTE),
    }))
}

async fn verify(
    query: web::Query<OneTimeToken>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let token = query.require()?;

    let verified = app_state
        .api
        .verify(token)
        .await
        .map_err(|err| AppError::from(err).with_notice(notice::VERIFY_FAILED))?;

    let notice = if verified.user_verified {
        app_state.success(notice::USER_VERIFIED)
    } else {
        app_state.error_notice(notice::VERIFY_FAILED)
    };

    Ok(HttpResponse::Ok().json(VerifyView {
        user_verified: verified.user_verified,
        notice,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/login", web::post().to(login))
        .route("/signup", web::post().to(signup))
        .route("/logout", web::post().to(logout))
        .route("/forgot-password", web::post().to(forgot_password))
        .route("/reset-password", web::post().to(reset_password))
        .route("/verify", web::get().to(verify));
}
