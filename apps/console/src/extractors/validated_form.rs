//! Form submissions: parse the JSON body, then run the record's rule table.

use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use super::validated_json::ValidatedJson;
use crate::error::AppError;
use crate::trace_ctx;
use crate::upstream::UpstreamError;
use crate::validation::{ErrorMap, Validate};

/// Why a form submission was refused.
#[derive(Debug, Error)]
pub enum FormRejection {
    /// The body never became a record, or a later step failed.
    #[error(transparent)]
    App(#[from] AppError),
    /// The record parsed but broke one or more field rules.
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(ErrorMap),
}

impl From<UpstreamError> for FormRejection {
    fn from(err: UpstreamError) -> Self {
        FormRejection::App(err.into())
    }
}

#[derive(Serialize)]
struct InvalidBody<'a> {
    errors: &'a ErrorMap,
    trace_id: String,
}

impl ResponseError for FormRejection {
    fn status_code(&self) -> StatusCode {
        match self {
            FormRejection::App(err) => err.status(),
            FormRejection::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            FormRejection::App(err) => err.error_response(),
            FormRejection::Invalid(errors) => {
                let trace_id = trace_ctx::trace_id();
                HttpResponse::UnprocessableEntity()
                    .insert_header(("x-trace-id", trace_id.clone()))
                    .json(InvalidBody { errors, trace_id })
            }
        }
    }
}

/// Refuse `record` if its rule table reports anything.
pub fn ensure_valid<R: Validate>(record: &R) -> Result<(), FormRejection> {
    let errors = record.validate();
    if errors.is_empty() {
        Ok(())
    } else {
        debug!(fields = ?errors.fields().collect::<Vec<_>>(), "form submission refused");
        Err(FormRejection::Invalid(errors))
    }
}

/// A record that parsed and passed validation.
#[derive(Debug)]
pub struct ValidatedForm<T>(pub T);

impl<T> ValidatedForm<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedForm<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> FromRequest for ValidatedForm<T>
where
    T: Validate + DeserializeOwned + 'static,
{
    type Error = FormRejection;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let parse = ValidatedJson::<T>::from_request(req, payload);

        Box::pin(async move {
            let ValidatedJson(record) = parse.await?;
            ensure_valid(&record)?;
            Ok(ValidatedForm(record))
        })
    }
}
