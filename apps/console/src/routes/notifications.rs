use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::AppError;
use crate::extractors::CurrentSession;

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub title: &'static str,
    pub message: &'static str,
}

/// The feed is static until the API grows a notifications endpoint.
pub const FEED: &[Notification] = &[Notification {
    title: "New Message",
    message: "Your application has been approved.",
}];

async fn notifications(_session: CurrentSession) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(FEED))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(notifications));
}
