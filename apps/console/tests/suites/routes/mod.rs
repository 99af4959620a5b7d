mod applicants;
mod company;
mod gate;
mod jobs;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::Error;
use console::AppState;

use crate::support::fake_upstream::{COMPANY_ID, COMPANY_NAME};
use crate::support::tokens::live_token;
use crate::support::{create_test_app, test_state, FakeUpstream};

/// A console wired to a fresh fake upstream.
pub async fn spawn_console() -> (
    FakeUpstream,
    AppState,
    impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
) {
    let upstream = FakeUpstream::start().await;
    let state = test_state(&upstream.base_url);
    let app = create_test_app(state.clone()).await;
    (upstream, state, app)
}

/// Session cookie for the fake upstream's company.
pub fn session_cookie() -> Cookie<'static> {
    Cookie::new("token", live_token(COMPANY_ID, COMPANY_NAME))
}
