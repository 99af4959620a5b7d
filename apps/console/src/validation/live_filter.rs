//! Per-keystroke guard for letters-only fields.
//!
//! A keystroke that would leave a letters-only field holding anything other
//! than letters and spaces is discarded before it reaches the record. The
//! guard reads the same rule tables as submit validation.

use super::patterns::Pattern;
use super::rules::{rule_for, FieldRule};

pub const LETTERS_ONLY_MESSAGE: &str = "Only letters are allowed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    Accepted,
    Rejected { message: &'static str },
}

impl Keystroke {
    pub fn is_accepted(self) -> bool {
        matches!(self, Keystroke::Accepted)
    }
}

/// Decide whether `proposed` may become the new value of `field`.
///
/// Fields without a letters-only rule accept everything. An empty value is
/// always accepted so a field can be cleared.
pub fn guard(rules: &[FieldRule], field: &str, proposed: &str) -> Keystroke {
    let letters_only = rule_for(rules, field).is_some_and(FieldRule::is_letters_only);

    if !letters_only || proposed.is_empty() || Pattern::Letters.matches(proposed) {
        Keystroke::Accepted
    } else {
        Keystroke::Rejected {
            message: LETTERS_ONLY_MESSAGE,
        }
    }
}
