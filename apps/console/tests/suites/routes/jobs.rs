use actix_web::http::StatusCode;
use actix_web::test;
use console::notice;
use console_test_support::problem_details::assert_problem_details_from_service_response;
use console_test_support::validation_body::{assert_field_error, read_validation_errors};
use serde_json::{json, Value};

use super::{session_cookie, spawn_console};
use crate::common::read_json;
use crate::support::fake_upstream::FAILING_JOB_ID;

fn posting_json() -> Value {
    json!({
        "jobDesignation": "Backend Engineer",
        "workType": "Remote",
        "jobType": "Permanent",
        "location": "Pune",
        "aboutJob": "Build services",
        "education": "B.Tech",
        "employmentType": "Full Time",
        "industryType": "Software",
        "mustHaveSkills": "Rust, SQL",
        "requiredExperience": "3+ years",
        "rolesAndResponsibilities": "Own the API"
    })
}

#[actix_web::test]
async fn list_forwards_normalized_paging() {
    let (upstream, _state, app) = spawn_console().await;

    let req = test::TestRequest::get()
        .uri("/jobs?page=2&size=500")
        .cookie(session_cookie())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["totalPages"], 3);
    assert_eq!(body["content"][0]["jobDesignation"], "Backend Engineer");
    assert_eq!(body["content"][0]["goodToHaveSkills"], "");
    assert_eq!(body["content"][0]["createdAt"], json!([2024, 3, 1, 10, 30, 0]));

    let sent = upstream
        .last_request_to("/api/companyjobs/company/42")
        .unwrap();
    assert_eq!(sent.query, "page=2&size=100");
    upstream.stop().await;
}

#[actix_web::test]
async fn list_defaults_to_first_page_of_ten() {
    let (upstream, _state, app) = spawn_console().await;

    let req = test::TestRequest::get()
        .uri("/jobs")
        .cookie(session_cookie())
        .to_request();
    test::call_service(&app, req).await;

    let sent = upstream
        .last_request_to("/api/companyjobs/company/42")
        .unwrap();
    assert_eq!(sent.query, "page=0&size=10");
    upstream.stop().await;
}

#[actix_web::test]
async fn create_returns_created_job() {
    let (upstream, _state, app) = spawn_console().await;

    let req = test::TestRequest::post()
        .uri("/jobs")
        .cookie(session_cookie())
        .set_json(posting_json())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    assert_eq!(body["job"]["id"], 6);
    assert_eq!(body["notice"]["message"], notice::JOB_CREATED);

    let sent = upstream
        .last_request_to("/api/companyjobs/company/42")
        .unwrap()
        .json();
    assert_eq!(sent["userId"], "42");
    assert_eq!(sent["jobDesignation"], "Backend Engineer");
    upstream.stop().await;
}

#[actix_web::test]
async fn create_with_digits_in_letter_fields_is_refused() {
    let (upstream, _state, app) = spawn_console().await;

    let mut posting = posting_json();
    posting["jobDesignation"] = json!("Engineer 2");
    posting["location"] = json!("  ");

    let req = test::TestRequest::post()
        .uri("/jobs")
        .cookie(session_cookie())
        .set_json(&posting)
        .to_request();
    let resp = test::call_service(&app, req).await;

    let errors = read_validation_errors(resp).await;
    assert_eq!(errors.len(), 2);
    assert_field_error(
        &errors,
        "jobDesignation",
        "Job designation must contain only letters",
    );
    assert_field_error(&errors, "location", "Location is required");
    assert!(upstream.requests().is_empty());
    upstream.stop().await;
}

#[actix_web::test]
async fn update_targets_the_job_id() {
    let (upstream, _state, app) = spawn_console().await;

    let req = test::TestRequest::put()
        .uri("/jobs/5")
        .cookie(session_cookie())
        .set_json(posting_json())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["job"]["id"], 5);
    assert_eq!(body["notice"]["message"], notice::JOB_UPDATED);
    assert!(upstream.last_request_to("/api/companyjobs/company/5").is_some());
    upstream.stop().await;
}

#[actix_web::test]
async fn upstream_failure_becomes_job_notice() {
    let (upstream, _state, app) = spawn_console().await;

    let req = test::TestRequest::put()
        .uri(&format!("/jobs/{FAILING_JOB_ID}"))
        .cookie(session_cookie())
        .set_json(posting_json())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "UPSTREAM_ERROR",
        StatusCode::BAD_GATEWAY,
        Some("Failed to save job: database unavailable"),
    )
    .await;
    upstream.stop().await;
}

#[actix_web::test]
async fn delete_reports_success_and_failure() {
    let (upstream, _state, app) = spawn_console().await;

    let req = test::TestRequest::delete()
        .uri("/jobs/5")
        .cookie(session_cookie())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        read_json(resp).await["notice"]["message"],
        notice::JOB_DELETED
    );

    let req = test::TestRequest::delete()
        .uri(&format!("/jobs/{FAILING_JOB_ID}"))
        .cookie(session_cookie())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "UPSTREAM_ERROR",
        StatusCode::BAD_GATEWAY,
        Some("Failed to delete job: job is locked"),
    )
    .await;
    upstream.stop().await;
}
