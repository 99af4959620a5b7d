//! Transient success and error notices shown after a form action.

use serde::Serialize;

use crate::config::console::DEFAULT_NOTICE_TTL_MS;

pub const LOGIN_SUCCESS: &str = "Login successful....";
pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
pub const SIGNUP_SUCCESS: &str = "Verification email sent. Please check your inbox.";
pub const SIGNUP_FAILED: &str = "Signup failed. Please try again.";
pub const EMAIL_EXISTS: &str = "Email already exists. Please use a different email.";
pub const RESET_LINK_SENT: &str = "Check your email for the reset link.";
pub const PASSWORD_RESET_FAILED: &str = "An error occurred";
pub const USER_VERIFIED: &str = "User verified successfully";
pub const VERIFY_FAILED: &str = "Error verifying token";
pub const COMPANY_UPDATED: &str = "Company details updated successfully!";
pub const COMPANY_CREATED: &str = "Company created successfully!";
pub const COMPANY_SAVE_FAILED: &str = "An error occurred while saving the company details.";
pub const JOB_CREATED: &str = "Job created successfully!";
pub const JOB_UPDATED: &str = "Job updated successfully!";
pub const JOB_DELETED: &str = "Job deleted successfully!";
pub const LOGGED_OUT: &str = "Logged out successfully";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub ttl_ms: u64,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
            ttl_ms: DEFAULT_NOTICE_TTL_MS,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            ttl_ms: DEFAULT_NOTICE_TTL_MS,
        }
    }

    pub fn with_ttl(mut self, ttl_ms: u64) -> Self {
        self.ttl_ms = ttl_ms;
        self
    }

    /// Visible while `now_ms < shown_at_ms + ttl`.
    pub fn is_visible(&self, shown_at_ms: u64, now_ms: u64) -> bool {
        now_ms < shown_at_ms.saturating_add(self.ttl_ms)
    }

    /// "Failed to save job: <body>" and friends.
    pub fn failure(prefix: &str, body: &str) -> Self {
        Self::error(format!("{prefix}: {body}"))
    }
}
