//! Credential records: login, signup, forgot-password and password reset.

use std::fmt;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use super::patterns::Pattern;
use super::rules::{Check, FieldRule};
use super::{ErrorMap, Validate};

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

const COMPANY_NAME_CHECKS: &[Check] = &[Check::matches(
    Pattern::CompanyName,
    "Company name can only contain letters, numbers, and special characters",
)];
const LOGIN_EMAIL_CHECKS: &[Check] = &[Check::matches(Pattern::Email, "Email is invalid")];
const EMAIL_CHECKS: &[Check] = &[Check::matches(Pattern::Email, "Invalid email format")];
const SIGNUP_PASSWORD_CHECKS: &[Check] = &[Check::min_chars(
    6,
    "Password must be at least 6 characters",
)];
const RESET_PASSWORD_CHECKS: &[Check] = &[Check::min_chars(
    6,
    "Password must be at least 6 characters long",
)];

/// Normalize an email for forwarding: trim, NFKC, lowercase.
pub fn normalize_email(email: &str) -> String {
    email.trim().nfkc().collect::<String>().to_lowercase()
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

super::impl_record!(LoginCredentials {
    "email" => email,
    "password" => password,
});

static LOGIN_RULES: &[FieldRule] = &[
    FieldRule::required("email", "Email is required").with(LOGIN_EMAIL_CHECKS),
    FieldRule::required("password", "Password is required"),
];

impl Validate for LoginCredentials {
    fn rules() -> &'static [FieldRule] {
        LOGIN_RULES
    }
}

impl LoginCredentials {
    /// Copy with the email normalized; the password is left untouched.
    pub fn normalized(&self) -> Self {
        Self {
            email: normalize_email(&self.email),
            password: self.password.clone(),
        }
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupCredentials {
    pub company_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

super::impl_record!(SignupCredentials {
    "companyName" => company_name,
    "email" => email,
    "password" => password,
    "confirmPassword" => confirm_password,
});

static SIGNUP_RULES: &[FieldRule] = &[
    FieldRule::required("companyName", "Company name is required").with(COMPANY_NAME_CHECKS),
    FieldRule::required("email", "Email is required").with(EMAIL_CHECKS),
    FieldRule::required("password", "Password is required").with(SIGNUP_PASSWORD_CHECKS),
];

impl Validate for SignupCredentials {
    fn rules() -> &'static [FieldRule] {
        SIGNUP_RULES
    }

    fn cross_field(&self, errors: &mut ErrorMap) {
        if self.password != self.confirm_password {
            errors.insert("confirmPassword", PASSWORD_MISMATCH);
        }
    }
}

impl fmt::Debug for SignupCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupCredentials")
            .field("company_name", &self.company_name)
            .field("email", &self.email)
            .field("password", &"***")
            .field("confirm_password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

super::impl_record!(ForgotPasswordRequest {
    "email" => email,
});

static FORGOT_PASSWORD_RULES: &[FieldRule] =
    &[FieldRule::required("email", "Email is required").with(EMAIL_CHECKS)];

impl Validate for ForgotPasswordRequest {
    fn rules() -> &'static [FieldRule] {
        FORGOT_PASSWORD_RULES
    }
}

/// New password form reached through a one-time reset link.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PasswordReset {
    pub new_password: String,
    pub confirm_password: String,
}

super::impl_record!(PasswordReset {
    "newPassword" => new_password,
    "confirmPassword" => confirm_password,
});

static PASSWORD_RESET_RULES: &[FieldRule] =
    &[FieldRule::required("newPassword", "New password is required").with(RESET_PASSWORD_CHECKS)];

impl Validate for PasswordReset {
    fn rules() -> &'static [FieldRule] {
        PASSWORD_RESET_RULES
    }

    fn cross_field(&self, errors: &mut ErrorMap) {
        if self.new_password != self.confirm_password {
            errors.insert("confirmPassword", PASSWORD_MISMATCH);
        }
    }
}

impl fmt::Debug for PasswordReset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordReset").finish_non_exhaustive()
    }
}
