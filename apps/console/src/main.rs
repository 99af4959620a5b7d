use actix_web::{web, App, HttpServer};
use console::config::ConsoleConfig;
use console::middleware::cors::cors_middleware;
use console::middleware::request_trace::RequestTrace;
use console::middleware::structured_logger::StructuredLogger;
use console::middleware::trace_span::TraceSpan;
use console::routes;
use console::state::build_state;
use console::telemetry;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match ConsoleConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let host = config.host.clone();
    let port = config.port;
    let origins = config.cors_allowed_origins.clone();

    let app_state = match build_state().with_config(config).build() {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    info!(
        host = %host,
        port,
        api_base_url = %app_state.api.base_url(),
        verified_tokens = app_state.config.jwt_secret.is_some(),
        "starting console gateway"
    );

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
