use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::AppError;
use crate::extractors::{CurrentSession, FormRejection, ValidatedForm};
use crate::notice::{self, Notice};
use crate::state::app_state::AppState;
use crate::upstream::{PageQuery, PageRequest, UpstreamError};
use crate::validation::JobPosting;

#[derive(Debug, Serialize)]
struct JobSavedView {
    job: serde_json::Value,
    notice: Notice,
}

#[derive(Debug, Serialize)]
struct NoticeView {
    notice: Notice,
}

/// "<prefix>: <upstream body>" as the job pages report failures.
fn job_failure(prefix: &str, err: UpstreamError) -> AppError {
    let err = AppError::from(err);
    let text = Notice::failure(prefix, &err.detail()).message;
    err.with_notice(text)
}

async fn list_jobs(
    session: CurrentSession,
    query: web::Query<PageQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let page = PageRequest::from(query.into_inner());
    let jobs = app_state
        .api
        .company_jobs(session.token(), session.company_id(), page)
        .await?;

    Ok(HttpResponse::Ok().json(jobs))
}

async fn create_job(
    session: CurrentSession,
    form: ValidatedForm<JobPosting>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, FormRejection> {
    let job = app_state
        .api
        .create_job(session.token(), session.company_id(), &form)
        .await
        .map_err(|err| job_failure("Failed to save job", err))?;

    Ok(HttpResponse::Created().json(JobSavedView {
        job,
        notice: app_state.success(notice::JOB_CREATED),
    }))
}

async fn update_job(
    session: CurrentSession,
    path: web::Path<String>,
    form: ValidatedForm<JobPosting>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, FormRejection> {
    let job = app_state
        .api
        .update_job(session.token(), session.company_id(), &path, &form)
        .await
        .map_err(|err| job_failure("Failed to save job", err))?;

    Ok(HttpResponse::Ok().json(JobSavedView {
        job,
        notice: app_state.success(notice::JOB_UPDATED),
    }))
}

async fn delete_job(
    session: CurrentSession,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    app_state
        .api
        .delete_job(session.token(), &path)
        .await
        .map_err(|err| job_failure("Failed to delete job", err))?;

    Ok(HttpResponse::Ok().json(NoticeView {
        notice: app_state.success(notice::JOB_DELETED),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_jobs))
            .route(web::post().to(create_job)),
    )
    .service(
        web::resource("/{job_id}")
            .route(web::put().to(update_job))
            .route(web::delete().to(delete_job)),
    );
}
