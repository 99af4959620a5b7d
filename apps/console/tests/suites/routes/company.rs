use actix_web::http::StatusCode;
use actix_web::test;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use console::notice;
use console_test_support::problem_details::assert_problem_details_from_service_response;
use console_test_support::validation_body::{assert_field_error, read_validation_errors};
use serde_json::{json, Value};

use super::{session_cookie, spawn_console};
use crate::common::read_json;
use crate::support::fake_upstream::COMPANY_NAME;

fn profile_json() -> Value {
    json!({
        "companyName": "Acme Pvt. Ltd.",
        "aboutUs": "We hire.",
        "websiteUrl": "https://acme.example",
        "industryType": "Software",
        "contactEmail": "hr@acme.com",
        "phoneNumber": "9876543210",
        "linkdinProfile": "https://www.linkedin.com/company/acme",
        "address": "12 MG Road",
        "pincode": "560001",
        "city": "Pune",
        "state": "Maharashtra",
        "country": "India"
    })
}

#[actix_web::test]
async fn get_returns_first_stored_profile() {
    let (upstream, _state, app) = spawn_console().await;

    let req = test::TestRequest::get()
        .uri("/company-details")
        .cookie(session_cookie())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["company"]["id"], 1);
    assert_eq!(body["company"]["companyName"], COMPANY_NAME);
    assert_eq!(
        body["company"]["linkdinProfile"],
        "https://www.linkedin.com/company/acme"
    );
    assert_eq!(body["company"]["websiteUrl"], "");

    let sent = upstream.last_request_to("/api/companies/user/42").unwrap();
    assert_eq!(sent.method, "GET");
    assert!(sent.authorization.unwrap().starts_with("Bearer "));
    upstream.stop().await;
}

#[actix_web::test]
async fn invalid_profile_is_refused_before_upstream() {
    let (upstream, _state, app) = spawn_console().await;

    let mut profile = profile_json();
    profile["pincode"] = json!("12345");
    profile["city"] = json!("City123");
    profile["phoneNumber"] = json!("123abc456");

    let req = test::TestRequest::post()
        .uri("/company-details")
        .cookie(session_cookie())
        .set_json(&profile)
        .to_request();
    let resp = test::call_service(&app, req).await;

    let errors = read_validation_errors(resp).await;
    assert_eq!(errors.len(), 3);
    assert_field_error(&errors, "pincode", "Pincode must be exactly 6 digits");
    assert_field_error(&errors, "city", "City can only contain letters");
    assert!(errors.contains_key("phoneNumber"));
    assert!(upstream.requests().is_empty());
    upstream.stop().await;
}

#[actix_web::test]
async fn create_sends_multipart_with_logo() {
    let (upstream, _state, app) = spawn_console().await;

    let mut body = profile_json();
    body["logo"] = json!({
        "fileName": "logo.png",
        "contentType": "image/png",
        "data": STANDARD.encode(b"\x89PNG fake")
    });

    let req = test::TestRequest::post()
        .uri("/company-details")
        .cookie(session_cookie())
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let json = read_json(resp).await;
    assert_eq!(json["notice"]["message"], notice::COMPANY_CREATED);
    assert_eq!(json["company"]["id"], 1);

    let sent = upstream.last_request_to("/api/companies/user/42").unwrap();
    assert_eq!(sent.method, "POST");
    assert!(sent
        .content_type
        .unwrap()
        .starts_with("multipart/form-data"));
    assert!(sent.body.contains("name=\"companyDetails\""));
    assert!(sent.body.contains("\"linkdinProfile\":\"https://www.linkedin.com/company/acme\""));
    assert!(sent.body.contains("name=\"file\"; filename=\"logo.png\""));
    upstream.stop().await;
}

#[actix_web::test]
async fn update_uses_put_without_logo() {
    let (upstream, _state, app) = spawn_console().await;

    let req = test::TestRequest::put()
        .uri("/company-details")
        .cookie(session_cookie())
        .set_json(profile_json())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        read_json(resp).await["notice"]["message"],
        notice::COMPANY_UPDATED
    );

    let sent = upstream.last_request_to("/api/companies/user/42").unwrap();
    assert_eq!(sent.method, "PUT");
    assert!(!sent.body.contains("name=\"file\""));
    upstream.stop().await;
}

#[actix_web::test]
async fn undecodable_logo_is_a_bad_request() {
    let (upstream, _state, app) = spawn_console().await;

    let mut body = profile_json();
    body["logo"] = json!({ "fileName": "logo.png", "data": "%%% not base64" });

    let req = test::TestRequest::post()
        .uri("/company-details")
        .cookie(session_cookie())
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "INVALID_BODY",
        StatusCode::BAD_REQUEST,
        Some("logo is not valid base64"),
    )
    .await;
    assert!(upstream.requests().is_empty());
    upstream.stop().await;
}
