//! Helpers for `422 Unprocessable Entity` validation bodies.
//!
//! The console answers a refused submission with `{"errors": {field: message}}`.

use actix_web::http::StatusCode;
use serde_json::{Map, Value};

/// Read a validation response and return its `errors` object.
///
/// Panics if the status is not 422 or the body has no `errors` object.
pub async fn read_validation_errors(
    resp: actix_web::dev::ServiceResponse<actix_web::body::BoxBody>,
) -> Map<String, Value> {
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = actix_web::test::read_body(resp).await;
    let json: Value =
        serde_json::from_slice(&body).expect("validation body should be valid JSON");

    json.get("errors")
        .and_then(Value::as_object)
        .cloned()
        .expect("validation body should carry an errors object")
}

/// Assert that `errors` holds exactly `field` with `message`.
pub fn assert_field_error(errors: &Map<String, Value>, field: &str, message: &str) {
    let actual = errors
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_else(|| panic!("expected an error for '{field}', got {errors:?}"));
    assert_eq!(actual, message, "unexpected message for '{field}'");
}
