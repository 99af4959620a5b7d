//! Client-side field validation.
//!
//! Every submittable record implements [`Validate`] by pointing at a static
//! rule table. Submit validation ([`Validate::validate`]) and the live
//! keystroke guard ([`live_filter::guard`]) read the same table, so a
//! letters-only field is enforced identically on both paths.

pub mod company;
pub mod credentials;
pub mod error_map;
pub mod form;
pub mod job;
pub mod live_filter;
pub mod patterns;
pub mod rules;

pub use company::CompanyProfile;
pub use credentials::{ForgotPasswordRequest, LoginCredentials, PasswordReset, SignupCredentials};
pub use error_map::ErrorMap;
pub use form::FormState;
pub use job::JobPosting;
pub use live_filter::{guard, Keystroke, LETTERS_ONLY_MESSAGE};
pub use patterns::Pattern;
pub use rules::{Check, FieldRule};

use serde::{Deserialize, Deserializer};

/// A record whose fields can be read and written by their wire names.
pub trait Record: Default + Clone {
    fn field(&self, name: &str) -> Option<&str>;
    fn field_mut(&mut self, name: &str) -> Option<&mut String>;
}

/// A record with a fixed rule set.
///
/// Validation never fails and never mutates the record: malformed input
/// simply yields a non-empty [`ErrorMap`].
pub trait Validate: Record {
    /// Ordered rule table for this record shape.
    fn rules() -> &'static [FieldRule];

    /// Rules that relate two fields. Runs after the per-field table.
    fn cross_field(&self, _errors: &mut ErrorMap) {}

    fn validate(&self) -> ErrorMap {
        let mut errors = rules::evaluate(Self::rules(), |name| self.field(name));
        self.cross_field(&mut errors);
        errors
    }

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// Read an explicit `null` as the field's default. The API sends `null` for
/// every unset optional text field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Implement [`Record`] for a struct of `String` fields, mapping each wire
/// name to its struct field.
macro_rules! impl_record {
    ($ty:ty { $($name:literal => $field:ident),+ $(,)? }) => {
        impl $crate::validation::Record for $ty {
            fn field(&self, name: &str) -> Option<&str> {
                match name {
                    $($name => Some(self.$field.as_str()),)+
                    _ => None,
                }
            }

            fn field_mut(&mut self, name: &str) -> Option<&mut String> {
                match name {
                    $($name => Some(&mut self.$field),)+
                    _ => None,
                }
            }
        }
    };
}

pub(crate) use impl_record;
