use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extractors::{ensure_valid, CurrentSession, FormRejection, ValidatedJson};
use crate::notice::{self, Notice};
use crate::state::app_state::AppState;
use crate::upstream::{CompanyRecord, LogoUpload, SaveMode};
use crate::validation::CompanyProfile;

/// Company form body: the profile fields plus an optional logo.
#[derive(Debug, Deserialize)]
pub struct CompanySubmission {
    #[serde(flatten)]
    pub profile: CompanyProfile,
    #[serde(default)]
    pub logo: Option<LogoUpload>,
}

#[derive(Debug, Serialize)]
struct CompanyView {
    company: Option<CompanyRecord>,
}

#[derive(Debug, Serialize)]
struct SavedView {
    company: serde_json::Value,
    notice: Notice,
}

async fn get_company(
    session: CurrentSession,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let company = app_state
        .api
        .company_details(session.token(), session.company_id())
        .await?;

    Ok(HttpResponse::Ok().json(CompanyView { company }))
}

async fn save_company(
    mode: SaveMode,
    session: CurrentSession,
    body: CompanySubmission,
    app_state: &AppState,
) -> Result<HttpResponse, FormRejection> {
    ensure_valid(&body.profile)?;

    let company = app_state
        .api
        .save_company(
            session.token(),
            session.company_id(),
            mode,
            &body.profile,
            body.logo.as_ref(),
        )
        .await
        .map_err(|err| AppError::from(err).with_notice(notice::COMPANY_SAVE_FAILED))?;

    let message = match mode {
        SaveMode::Create => notice::COMPANY_CREATED,
        SaveMode::Update => notice::COMPANY_UPDATED,
    };

    Ok(HttpResponse::Ok().json(SavedView {
        company,
        notice: app_state.success(message),
    }))
}

async fn create_company(
    session: CurrentSession,
    body: ValidatedJson<CompanySubmission>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, FormRejection> {
    save_company(SaveMode::Create, session, body.into_inner(), &app_state).await
}

async fn update_company(
    session: CurrentSession,
    body: ValidatedJson<CompanySubmission>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, FormRejection> {
    save_company(SaveMode::Update, session, body.into_inner(), &app_state).await
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(get_company))
            .route(web::post().to(create_company))
            .route(web::put().to(update_company)),
    );
}
