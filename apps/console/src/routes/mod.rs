use actix_web::web;

use crate::middleware::SessionGuard;

pub mod applicants;
pub mod auth;
pub mod company;
pub mod health;
pub mod jobs;
pub mod notifications;
pub mod session;

/// Register every gateway route.
///
/// Public scopes come first; each protected scope is wrapped in
/// [`SessionGuard`] so a request without a live session never reaches a
/// handler or the upstream API.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").configure(health::configure_routes))
        .service(web::scope("/auth").configure(auth::configure_routes))
        .service(web::scope("/session").configure(session::configure_routes));

    cfg.service(
        web::scope("/company-details")
            .wrap(SessionGuard)
            .configure(company::configure_routes),
    )
    .service(
        web::scope("/jobs")
            .wrap(SessionGuard)
            .configure(jobs::configure_routes),
    )
    .service(
        web::scope("/applied-jobs")
            .wrap(SessionGuard)
            .configure(applicants::configure_applied_jobs),
    )
    .service(
        web::scope("/candidate-profile")
            .wrap(SessionGuard)
            .configure(applicants::configure_candidate_profiles),
    )
    .service(
        web::scope("/candidate-project")
            .wrap(SessionGuard)
            .configure(applicants::configure_candidate_projects),
    )
    .service(
        web::scope("/notifications")
            .wrap(SessionGuard)
            .configure(notifications::configure_routes),
    );
}
