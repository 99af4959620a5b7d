use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;

use crate::error::AppError;
use crate::http::cookies::{read_token, removal_cookie};
use crate::session::{self, MemoryTokenStore, SessionDisplay};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionView {
    company_name: Option<String>,
}

/// Header display name: `{companyName}` for a live session, `null` otherwise.
/// Resolved from this request's cookie alone. A stale cookie is dropped on
/// the way.
async fn current_session(
    req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let store = MemoryTokenStore::with_token(read_token(&req, app_state.cookie_name()));
    let company_name =
        SessionDisplay::new().resolve(&store, app_state.decoder(), session::unix_now());

    let mut response = HttpResponse::Ok();
    if store.is_dirty() {
        response.cookie(removal_cookie(app_state.cookie_name()));
    }
    Ok(response.json(SessionView { company_name }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(current_session));
}
