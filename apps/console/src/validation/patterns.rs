//! Field patterns shared by submit validation and the live keystroke guard.

use std::sync::LazyLock;

use regex::Regex;

/// A whole-value pattern a field must satisfy.
///
/// Every pattern is anchored at both ends: it accepts or rejects the entire
/// value, never a substring of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// One or more ASCII letters or spaces.
    Letters,
    /// Letters, digits, whitespace and `- _ , . : ;`.
    CompanyName,
    /// `local@label.label.tld` with a 2-4 letter top-level segment.
    Email,
    /// Decimal digits only (any length).
    Digits,
    /// Exactly ten decimal digits.
    Phone,
    /// Exactly six decimal digits.
    Pincode,
    /// `http(s)://` followed by something containing a dot.
    WebsiteUrl,
    /// `http(s)://[www.]linkedin.com/` followed by a path.
    LinkedinUrl,
}

impl Pattern {
    /// Returns true when the whole of `value` matches this pattern.
    pub fn matches(self, value: &str) -> bool {
        PatternRegistry::regex(self).is_match(value)
    }
}

/// Centralized registry for the compiled field regexes.
///
/// All patterns are vetted literals; each is compiled once on first use.
pub struct PatternRegistry;

impl PatternRegistry {
    pub fn regex(pattern: Pattern) -> &'static Regex {
        match pattern {
            Pattern::Letters => Self::letters(),
            Pattern::CompanyName => Self::company_name(),
            Pattern::Email => Self::email(),
            Pattern::Digits => Self::digits(),
            Pattern::Phone => Self::phone(),
            Pattern::Pincode => Self::pincode(),
            Pattern::WebsiteUrl => Self::website_url(),
            Pattern::LinkedinUrl => Self::linkedin_url(),
        }
    }

    fn letters() -> &'static Regex {
        static LETTERS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"^[A-Za-z ]+$").unwrap()
        });
        &LETTERS_REGEX
    }

    fn company_name() -> &'static Regex {
        static COMPANY_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"^[A-Za-z0-9\s\-_,.:;]+$").unwrap()
        });
        &COMPANY_NAME_REGEX
    }

    fn email() -> &'static Regex {
        static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"^[A-Za-z0-9_.\-]+@([A-Za-z0-9_\-]+\.)+[A-Za-z]{2,4}$").unwrap()
        });
        &EMAIL_REGEX
    }

    fn digits() -> &'static Regex {
        static DIGITS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"^[0-9]+$").unwrap()
        });
        &DIGITS_REGEX
    }

    fn phone() -> &'static Regex {
        static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"^[0-9]{10}$").unwrap()
        });
        &PHONE_REGEX
    }

    fn pincode() -> &'static Regex {
        static PINCODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"^[0-9]{6}$").unwrap()
        });
        &PINCODE_REGEX
    }

    fn website_url() -> &'static Regex {
        static WEBSITE_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"^https?://.+\..+$").unwrap()
        });
        &WEBSITE_URL_REGEX
    }

    fn linkedin_url() -> &'static Regex {
        static LINKEDIN_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"^https?://(www\.)?linkedin\.com/.+").unwrap()
        });
        &LINKEDIN_URL_REGEX
    }
}
