use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use console::middleware::request_trace::RequestTrace;
use console::middleware::structured_logger::StructuredLogger;
use console::middleware::trace_span::TraceSpan;
use console::routes;
use console::state::builder::build_state;
use console::AppState;

/// State pointing at `api_base_url` with unverified token decoding, as the
/// gateway runs without `CONSOLE_JWT_SECRET`.
pub fn test_state(api_base_url: &str) -> AppState {
    build_state()
        .with_api_base_url(api_base_url)
        .build()
        .expect("build test state")
}

/// The production route table behind the production middleware stack,
/// minus CORS.
pub async fn create_test_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}
