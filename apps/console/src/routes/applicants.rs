//! Read-only applicant views: matched jobs, candidates per job, and a
//! candidate's projects.

use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::CurrentSession;
use crate::state::app_state::AppState;
use crate::upstream::{PageQuery, PageRequest};

async fn applied_jobs(
    session: CurrentSession,
    query: web::Query<PageQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let page = app_state
        .api
        .matched_jobs(
            session.token(),
            session.company_id(),
            PageRequest::from(query.into_inner()),
        )
        .await?;
    Ok(HttpResponse::Ok().json(page))
}

async fn candidate_profiles(
    session: CurrentSession,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let page = app_state
        .api
        .candidates(
            session.token(),
            session.company_id(),
            &path,
            PageRequest::from(query.into_inner()),
        )
        .await?;
    Ok(HttpResponse::Ok().json(page))
}

async fn candidate_projects(
    session: CurrentSession,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let page = app_state
        .api
        .candidate_projects(
            session.token(),
            &path,
            PageRequest::from(query.into_inner()),
        )
        .await?;
    Ok(HttpResponse::Ok().json(page))
}

/// `/applied-jobs`
pub fn configure_applied_jobs(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(applied_jobs));
}

/// `/candidate-profile/{job_id}`
pub fn configure_candidate_profiles(cfg: &mut web::ServiceConfig) {
    cfg.route("/{job_id}", web::get().to(candidate_profiles));
}

/// `/candidate-project/{user_id}`
pub fn configure_candidate_projects(cfg: &mut web::ServiceConfig) {
    cfg.route("/{user_id}", web::get().to(candidate_projects));
}
