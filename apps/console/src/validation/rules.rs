//! Declarative rule tables.
//!
//! Each record shape declares an ordered slice of [`FieldRule`]s. A rule names
//! its field, whether the field is required (and the message when it is
//! blank), and the format checks a non-blank value must pass. The first
//! failing check wins, so a field contributes at most one message.

use super::error_map::ErrorMap;
use super::patterns::Pattern;

/// A single format check with the message reported when it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub kind: CheckKind,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    /// The trimmed value must match the pattern as a whole.
    Matches(Pattern),
    /// The untrimmed value must be at least this many characters long.
    MinChars(usize),
}

impl Check {
    pub const fn matches(pattern: Pattern, message: &'static str) -> Self {
        Self {
            kind: CheckKind::Matches(pattern),
            message,
        }
    }

    pub const fn min_chars(min: usize, message: &'static str) -> Self {
        Self {
            kind: CheckKind::MinChars(min),
            message,
        }
    }

    fn passes(&self, raw: &str) -> bool {
        match self.kind {
            CheckKind::Matches(pattern) => pattern.matches(raw.trim()),
            CheckKind::MinChars(min) => raw.chars().count() >= min,
        }
    }
}

/// Rule set for one field of a record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    /// Message for a blank value; `None` makes the field optional.
    pub required: Option<&'static str>,
    pub checks: &'static [Check],
}

impl FieldRule {
    pub const fn required(field: &'static str, message: &'static str) -> Self {
        Self {
            field,
            required: Some(message),
            checks: &[],
        }
    }

    pub const fn optional(field: &'static str) -> Self {
        Self {
            field,
            required: None,
            checks: &[],
        }
    }

    pub const fn with(self, checks: &'static [Check]) -> Self {
        Self { checks, ..self }
    }

    /// Evaluate this rule against a raw value.
    ///
    /// Blank values only ever yield the required message; optional blank
    /// fields are valid.
    pub fn evaluate(&self, raw: &str) -> Option<&'static str> {
        if raw.trim().is_empty() {
            return self.required;
        }

        self.checks
            .iter()
            .find(|check| !check.passes(raw))
            .map(|check| check.message)
    }

    /// True when the field is restricted to letters and spaces, which makes
    /// it subject to the live keystroke guard.
    pub fn is_letters_only(&self) -> bool {
        self.checks
            .iter()
            .any(|check| check.kind == CheckKind::Matches(Pattern::Letters))
    }
}

/// Find the rule for `field` in a table.
pub fn rule_for<'a>(rules: &'a [FieldRule], field: &str) -> Option<&'a FieldRule> {
    rules.iter().find(|rule| rule.field == field)
}

/// Evaluate every rule in declaration order, without short-circuiting.
pub fn evaluate<'r, F>(rules: &[FieldRule], lookup: F) -> ErrorMap
where
    F: Fn(&str) -> Option<&'r str>,
{
    let mut errors = ErrorMap::new();
    for rule in rules {
        let value = lookup(rule.field).unwrap_or("");
        if let Some(message) = rule.evaluate(value) {
            errors.insert(rule.field, message);
        }
    }
    errors
}
