//! Editable form state: live keystroke filtering plus validate-on-submit.

use super::live_filter::{guard, Keystroke};
use super::rules::rule_for;
use super::{ErrorMap, Validate};

/// In-progress edit of a record.
///
/// Errors shown next to fields come from two places: the live guard (a
/// rejected keystroke) and the last submit. Accepting an edit clears that
/// field's error.
#[derive(Debug, Clone, Default)]
pub struct FormState<R> {
    record: R,
    errors: ErrorMap,
}

impl<R: Validate> FormState<R> {
    pub fn new() -> Self {
        Self {
            record: R::default(),
            errors: ErrorMap::new(),
        }
    }

    /// Start editing an existing record.
    pub fn with_record(record: R) -> Self {
        Self {
            record,
            errors: ErrorMap::new(),
        }
    }

    pub fn record(&self) -> &R {
        &self.record
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Apply one input event to `field`.
    ///
    /// Unknown fields are ignored and reported as accepted.
    pub fn input(&mut self, field: &str, value: impl Into<String>) -> Keystroke {
        let value = value.into();
        let rule_field = rule_for(R::rules(), field).map(|rule| rule.field);

        let outcome = guard(R::rules(), field, &value);
        match outcome {
            Keystroke::Rejected { message } => {
                if let Some(name) = rule_field {
                    self.errors.insert(name, message);
                }
            }
            Keystroke::Accepted => {
                if let Some(slot) = self.record.field_mut(field) {
                    *slot = value;
                }
                self.errors.remove(field);
            }
        }
        outcome
    }

    /// Validate every rule. On success the record is returned for
    /// submission; otherwise the errors are kept for display and returned.
    pub fn submit(&mut self) -> Result<R, ErrorMap> {
        self.errors = self.record.validate();
        if self.errors.is_empty() {
            Ok(self.record.clone())
        } else {
            Err(self.errors.clone())
        }
    }

    /// Return to an empty record, e.g. after a successful create.
    pub fn reset(&mut self) {
        self.record = R::default();
        self.errors = ErrorMap::new();
    }
}
