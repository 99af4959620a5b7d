use actix_web::cookie::Cookie;
use actix_web::http::{header, StatusCode};
use actix_web::test;
use futures_util::future::join_all;

use super::{session_cookie, spawn_console};
use crate::common::{read_json, set_cookie_value};
use crate::support::fake_upstream::{COMPANY_ID, COMPANY_NAME};
use crate::support::tokens::{expired_token, live_token};

const PROTECTED: &[&str] = &[
    "/company-details",
    "/jobs",
    "/applied-jobs",
    "/candidate-profile/5",
    "/candidate-project/3",
    "/notifications",
];

#[actix_web::test]
async fn protected_routes_redirect_without_a_token() {
    let (upstream, _state, app) = spawn_console().await;

    for path in PROTECTED {
        let req = test::TestRequest::get().uri(path).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{path}");
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/login?reason=no_token"
        );
        assert!(set_cookie_value(&resp, "token").is_none());

        let body = read_json(resp).await;
        assert_eq!(body["message"], "Access denied Please log in !");
        assert_eq!(body["reason"], "no_token");
    }

    assert!(upstream.requests().is_empty());
    upstream.stop().await;
}

#[actix_web::test]
async fn expired_cookie_is_removed_on_redirect() {
    let (upstream, _state, app) = spawn_console().await;

    let req = test::TestRequest::get()
        .uri("/jobs")
        .cookie(Cookie::new("token", expired_token(COMPANY_ID, COMPANY_NAME)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/login?reason=session_expired"
    );
    assert_eq!(set_cookie_value(&resp, "token").as_deref(), Some(""));

    let body = read_json(resp).await;
    assert_eq!(body["message"], "Session expired. Please log in again.");
    assert_eq!(body["redirect"], "/login?reason=session_expired");
    assert!(upstream.requests().is_empty());
    upstream.stop().await;
}

#[actix_web::test]
async fn undecodable_cookie_is_removed_on_redirect() {
    let (upstream, _state, app) = spawn_console().await;

    let req = test::TestRequest::get()
        .uri("/notifications")
        .cookie(Cookie::new("token", "not-a-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(set_cookie_value(&resp, "token").as_deref(), Some(""));
    let body = read_json(resp).await;
    assert_eq!(body["message"], "An error occurred. Please log in again.");
    assert_eq!(body["reason"], "invalid_token");
    upstream.stop().await;
}

#[actix_web::test]
async fn blank_cookie_is_removed_on_redirect() {
    let (upstream, _state, app) = spawn_console().await;

    let req = test::TestRequest::get()
        .uri("/jobs")
        .cookie(Cookie::new("token", ""))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/login?reason=no_token"
    );
    assert_eq!(set_cookie_value(&resp, "token").as_deref(), Some(""));
    assert!(resp.response().cookies().any(|c| c.name() == "token" && c.max_age().is_some()));
    assert!(upstream.requests().is_empty());
    upstream.stop().await;
}

#[actix_web::test]
async fn live_cookie_reaches_the_handler() {
    let (upstream, _state, app) = spawn_console().await;

    let req = test::TestRequest::get()
        .uri("/notifications")
        .cookie(session_cookie())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body[0]["title"], "New Message");
    upstream.stop().await;
}

#[actix_web::test]
async fn session_endpoint_answers_from_its_own_cookie() {
    let (upstream, _state, app) = spawn_console().await;
    let companies = ["Acme", "Globex", "Initech", "Umbrella"];

    let requests = (0..40).map(|i| {
        let req = test::TestRequest::get().uri("/session");
        let req = match companies.get(i % 5) {
            Some(name) => req.cookie(Cookie::new("token", live_token(&i.to_string(), name))),
            None => req,
        };
        test::call_service(&app, req.to_request())
    });
    let responses = join_all(requests).await;

    for (i, resp) in responses.into_iter().enumerate() {
        let expected = companies.get(i % 5).copied();
        let body = read_json(resp).await;
        assert_eq!(body["companyName"].as_str(), expected, "request {i}");
    }
    upstream.stop().await;
}

#[actix_web::test]
async fn session_endpoint_resolves_display_name() {
    let (upstream, _state, app) = spawn_console().await;

    let req = test::TestRequest::get()
        .uri("/session")
        .cookie(session_cookie())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(set_cookie_value(&resp, "token").is_none());
    assert_eq!(read_json(resp).await["companyName"], COMPANY_NAME);

    let req = test::TestRequest::get().uri("/session").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(set_cookie_value(&resp, "token").is_none());
    assert!(read_json(resp).await["companyName"].is_null());

    let req = test::TestRequest::get()
        .uri("/session")
        .cookie(Cookie::new("token", expired_token(COMPANY_ID, COMPANY_NAME)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(set_cookie_value(&resp, "token").as_deref(), Some(""));
    assert!(read_json(resp).await["companyName"].is_null());
    upstream.stop().await;
}

#[actix_web::test]
async fn health_is_public() {
    let (upstream, _state, app) = spawn_console().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "ok");
    upstream.stop().await;
}
