use actix_web::http::StatusCode;
use actix_web::test;

use super::{session_cookie, spawn_console};
use crate::common::read_json;

#[actix_web::test]
async fn applied_jobs_are_matched_for_the_session_company() {
    let (upstream, _state, app) = spawn_console().await;

    let req = test::TestRequest::get()
        .uri("/applied-jobs?page=1")
        .cookie(session_cookie())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["content"][0]["jobDesignation"], "Data Analyst");

    let sent = upstream.last_request_to("/api/jobs/matchedjobs/42").unwrap();
    assert_eq!(sent.query, "page=1&size=10");
    upstream.stop().await;
}

#[actix_web::test]
async fn candidate_profiles_carry_company_id() {
    let (upstream, _state, app) = spawn_console().await;

    let req = test::TestRequest::get()
        .uri("/candidate-profile/5")
        .cookie(session_cookie())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["content"][0]["name"], "Asha");
    assert_eq!(body["content"][0]["gender"], "");
    assert_eq!(body["content"][0]["dob"], serde_json::json!([1998, 4, 12]));

    let sent = upstream.last_request_to("/api/jobs/candidates/5").unwrap();
    assert!(sent.query.contains("companyId=42"));
    assert!(sent.query.contains("size=10"));
    upstream.stop().await;
}

#[actix_web::test]
async fn candidate_projects_are_listed() {
    let (upstream, _state, app) = spawn_console().await;

    let req = test::TestRequest::get()
        .uri("/candidate-project/3?size=5")
        .cookie(session_cookie())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["content"][0]["projectName"], "Tracker");
    assert_eq!(body["content"][0]["githubLink"], "");
    assert_eq!(body["totalPages"], 1);

    let sent = upstream.last_request_to("/api/jobs/projects/3").unwrap();
    assert_eq!(sent.query, "page=0&size=5");
    upstream.stop().await;
}
