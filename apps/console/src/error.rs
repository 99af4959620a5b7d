use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::errors::ErrorCode;
use crate::session::DenyReason;
use crate::trace_ctx;
use crate::upstream::UpstreamError;

#[derive(Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Session rejected: {}", reason.code())]
    Session { reason: DenyReason },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    /// The upstream API refused or failed the forwarded call.
    #[error("Upstream error ({status}): {detail}")]
    Upstream {
        code: ErrorCode,
        status: StatusCode,
        detail: String,
    },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::BadRequest { code, .. } => *code,
            AppError::Session { reason } => match reason {
                DenyReason::NoToken => ErrorCode::SessionMissing,
                DenyReason::InvalidToken => ErrorCode::SessionInvalid,
                DenyReason::Expired => ErrorCode::SessionExpired,
            },
            AppError::NotFound { code, .. } => *code,
            AppError::Conflict { code, .. } => *code,
            AppError::Upstream { code, .. } => *code,
            AppError::Internal { .. } => ErrorCode::Internal,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            AppError::BadRequest { detail, .. } => detail.clone(),
            AppError::Session { reason } => reason.message().to_string(),
            AppError::NotFound { detail, .. } => detail.clone(),
            AppError::Conflict { detail, .. } => detail.clone(),
            AppError::Upstream { detail, .. } => detail.clone(),
            AppError::Internal { detail } => detail.clone(),
            AppError::Config { detail } => detail.clone(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Session { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Upstream { status, .. } => *status,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn bad_request(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn session(reason: DenyReason) -> Self {
        Self::Session { reason }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn conflict(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    /// Replace the user-facing detail of an upstream failure, keeping its
    /// code and status. Other variants pass through untouched.
    pub fn with_notice(self, message: impl Into<String>) -> Self {
        match self {
            AppError::Upstream { code, status, .. } => AppError::Upstream {
                code,
                status,
                detail: message.into(),
            },
            other => other,
        }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<UpstreamError> for AppError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Status { status, body } => {
                let (code, status) = match status {
                    401 | 403 => (ErrorCode::UpstreamUnauthorized, StatusCode::UNAUTHORIZED),
                    404 => (ErrorCode::NotFound, StatusCode::NOT_FOUND),
                    409 => (ErrorCode::Conflict, StatusCode::CONFLICT),
                    400..=499 => (
                        ErrorCode::UpstreamRejected,
                        StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_REQUEST),
                    ),
                    _ => (ErrorCode::UpstreamError, StatusCode::BAD_GATEWAY),
                };
                AppError::Upstream {
                    code,
                    status,
                    detail: body,
                }
            }
            UpstreamError::Transport(err) => AppError::Upstream {
                code: ErrorCode::UpstreamUnavailable,
                status: StatusCode::BAD_GATEWAY,
                detail: format!("upstream unreachable: {err}"),
            },
            UpstreamError::Decode(err) => AppError::Upstream {
                code: ErrorCode::UpstreamError,
                status: StatusCode::BAD_GATEWAY,
                detail: format!("upstream sent an unexpected body: {err}"),
            },
            UpstreamError::Url(err) => AppError::config(format!("invalid upstream URL: {err}")),
            UpstreamError::Payload(detail) => AppError::bad_request(ErrorCode::InvalidBody, detail),
        }
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(e: crate::config::ConfigError) -> Self {
        AppError::config(e.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code().as_str();
        let detail = self.detail();
        let trace_id = trace_ctx::trace_id();

        let problem_details = ProblemDetails {
            type_: format!("https://console.recruit.dev/errors/{code}"),
            title: Self::humanize_code(code),
            status: status.as_u16(),
            detail,
            code: code.to_string(),
            trace_id: trace_id.clone(),
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .insert_header(("x-trace-id", trace_id))
            .json(problem_details)
    }
}
