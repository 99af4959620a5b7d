//! Error codes for the console gateway API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. Every code is
//! SCREAMING_SNAKE_CASE and maps 1:1 to the string in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Session
    /// No session token was presented
    SessionMissing,
    /// The session token could not be decoded
    SessionInvalid,
    /// The session token has expired
    SessionExpired,

    // Request validation
    /// One or more form fields failed validation
    ValidationError,
    /// General bad request error
    BadRequest,
    /// A one-time token query parameter was missing
    MissingOneTimeToken,
    /// Request body could not be parsed
    InvalidBody,

    // Resources
    /// General not found error
    NotFound,
    /// Email already registered
    EmailExists,
    /// Generic conflict
    Conflict,

    // Upstream REST API
    /// Upstream rejected the credentials
    UpstreamUnauthorized,
    /// Upstream answered with a client error
    UpstreamRejected,
    /// Upstream answered with a server error
    UpstreamError,
    /// Upstream could not be reached
    UpstreamUnavailable,

    // System
    Internal,
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SessionMissing => "SESSION_MISSING",
            Self::SessionInvalid => "SESSION_INVALID",
            Self::SessionExpired => "SESSION_EXPIRED",

            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::MissingOneTimeToken => "MISSING_ONE_TIME_TOKEN",
            Self::InvalidBody => "INVALID_BODY",

            Self::NotFound => "NOT_FOUND",
            Self::EmailExists => "EMAIL_EXISTS",
            Self::Conflict => "CONFLICT",

            Self::UpstreamUnauthorized => "UPSTREAM_UNAUTHORIZED",
            Self::UpstreamRejected => "UPSTREAM_REJECTED",
            Self::UpstreamError => "UPSTREAM_ERROR",
            Self::UpstreamUnavailable => "UPSTREAM_UNAVAILABLE",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
