//! HTTP client for the recruitment REST API.
//!
//! This is the only place that turns upstream status codes into errors;
//! route handlers never look at raw responses.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::error::UpstreamError;
use super::models::{
    CandidateProfile, CandidateProject, CompanyJob, CompanyRecord, JobSubmission, LoginResponse,
    LogoUpload, Page, PageRequest, VerifyResponse,
};
use crate::logging::pii::Redacted;
use crate::validation::{CompanyProfile, JobPosting, LoginCredentials, SignupCredentials};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Whether a company save creates the profile or replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    Create,
    Update,
}

impl SaveMode {
    fn method(self) -> Method {
        match self {
            SaveMode::Create => Method::POST,
            SaveMode::Update => Method::PUT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, UpstreamError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(UpstreamError::Url(format!(
                "base URL must be http(s): '{base_url}'"
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, bearer: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let request = self.http.request(method, url);
        match bearer {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {token}")),
            None => request,
        }
    }

    /// Send and return the raw body of a 2xx answer.
    async fn send(&self, request: RequestBuilder) -> Result<String, UpstreamError> {
        let request = request.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        let response = self.http.execute(request).await.map_err(|e| {
            warn!(%method, path = %path, error = %e, "upstream request failed");
            UpstreamError::Transport(e)
        })?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        if (200..300).contains(&status) {
            debug!(%method, path = %path, status, "upstream request completed");
            Ok(body)
        } else {
            warn!(
                %method,
                path = %path,
                status,
                body = %Redacted(&body),
                "upstream rejected request"
            );
            Err(UpstreamError::Status { status, body })
        }
    }

    /// Send and decode a JSON answer. An empty body decodes as `null`.
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, UpstreamError> {
        let body = self.send(request).await?;
        let body = if body.trim().is_empty() { "null" } else { &body };
        Ok(serde_json::from_str(body)?)
    }

    fn paged(request: RequestBuilder, page: PageRequest) -> RequestBuilder {
        request.query(&page)
    }

    // Auth service

    pub async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, UpstreamError> {
        self.send_json(self.request(Method::POST, "/auth/login", None).json(credentials))
            .await
    }

    pub async fn register(&self, credentials: &SignupCredentials) -> Result<(), UpstreamError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Register<'a> {
            company_name: &'a str,
            email: &'a str,
            password: &'a str,
        }

        let body = Register {
            company_name: credentials.company_name.trim(),
            email: credentials.email.trim(),
            password: &credentials.password,
        };
        self.send(self.request(Method::POST, "/auth/register", None).json(&body))
            .await
            .map(drop)
    }

    /// Returns the API's plain-text confirmation.
    pub async fn forgot_password(&self, email: &str) -> Result<String, UpstreamError> {
        let body = serde_json::json!({ "email": email });
        self.send(self.request(Method::POST, "/auth/forgot-password", None).json(&body))
            .await
    }

    /// Returns the API's plain-text confirmation.
    pub async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<String, UpstreamError> {
        let body = serde_json::json!({ "token": token, "newPassword": new_password });
        self.send(self.request(Method::POST, "/auth/reset-password", None).json(&body))
            .await
    }

    pub async fn verify(&self, token: &str) -> Result<VerifyResponse, UpstreamError> {
        let request = self
            .request(Method::GET, "/auth/verify", None)
            .query(&[("token", token)]);
        let verified: Option<VerifyResponse> = self.send_json(request).await?;
        Ok(verified.unwrap_or_default())
    }

    // Company profile

    /// The company's profile, if one has been created.
    pub async fn company_details(
        &self,
        bearer: &str,
        company_id: &str,
    ) -> Result<Option<CompanyRecord>, UpstreamError> {
        let path = format!("/api/companies/user/{company_id}");
        let records: Option<Vec<CompanyRecord>> = self
            .send_json(self.request(Method::GET, &path, Some(bearer)))
            .await?;
        Ok(records.and_then(|records| records.into_iter().next()))
    }

    /// Create or replace the profile as a multipart form: an optional `file`
    /// part and a `companyDetails` JSON part.
    pub async fn save_company(
        &self,
        bearer: &str,
        company_id: &str,
        mode: SaveMode,
        profile: &CompanyProfile,
        logo: Option<&LogoUpload>,
    ) -> Result<serde_json::Value, UpstreamError> {
        let mut form = Form::new().text("companyDetails", serde_json::to_string(profile)?);

        if let Some(logo) = logo {
            let bytes = STANDARD
                .decode(logo.data.trim())
                .map_err(|e| UpstreamError::Payload(format!("logo is not valid base64: {e}")))?;
            let part = Part::bytes(bytes)
                .file_name(logo.file_name.clone())
                .mime_str(&logo.content_type)
                .map_err(|_| {
                    UpstreamError::Payload(format!(
                        "logo content type '{}' is not a MIME type",
                        logo.content_type
                    ))
                })?;
            form = form.part("file", part);
        }

        let path = format!("/api/companies/user/{company_id}");
        let saved: Option<serde_json::Value> = self
            .send_json(self.request(mode.method(), &path, Some(bearer)).multipart(form))
            .await?;
        Ok(saved.unwrap_or(serde_json::Value::Null))
    }

    // Jobs

    pub async fn company_jobs(
        &self,
        bearer: &str,
        company_id: &str,
        page: PageRequest,
    ) -> Result<Page<CompanyJob>, UpstreamError> {
        let path = format!("/api/companyjobs/company/{company_id}");
        let request = Self::paged(self.request(Method::GET, &path, Some(bearer)), page);
        let envelope: Option<Page<CompanyJob>> = self.send_json(request).await?;
        Ok(envelope.unwrap_or_default())
    }

    pub async fn create_job(
        &self,
        bearer: &str,
        company_id: &str,
        posting: &JobPosting,
    ) -> Result<serde_json::Value, UpstreamError> {
        let path = format!("/api/companyjobs/company/{company_id}");
        let body = JobSubmission {
            posting,
            user_id: company_id,
        };
        let created: Option<serde_json::Value> = self
            .send_json(self.request(Method::POST, &path, Some(bearer)).json(&body))
            .await?;
        Ok(created.unwrap_or(serde_json::Value::Null))
    }

    pub async fn update_job(
        &self,
        bearer: &str,
        company_id: &str,
        job_id: &str,
        posting: &JobPosting,
    ) -> Result<serde_json::Value, UpstreamError> {
        let path = format!("/api/companyjobs/company/{job_id}");
        let body = JobSubmission {
            posting,
            user_id: company_id,
        };
        let updated: Option<serde_json::Value> = self
            .send_json(self.request(Method::PUT, &path, Some(bearer)).json(&body))
            .await?;
        Ok(updated.unwrap_or(serde_json::Value::Null))
    }

    pub async fn delete_job(&self, bearer: &str, job_id: &str) -> Result<(), UpstreamError> {
        let path = format!("/api/companyjobs/company/{job_id}");
        self.send(self.request(Method::DELETE, &path, Some(bearer)))
            .await
            .map(drop)
    }

    // Applicants

    pub async fn matched_jobs(
        &self,
        bearer: &str,
        company_id: &str,
        page: PageRequest,
    ) -> Result<Page<CompanyJob>, UpstreamError> {
        let path = format!("/api/jobs/matchedjobs/{company_id}");
        let request = Self::paged(self.request(Method::GET, &path, Some(bearer)), page);
        let envelope: Option<Page<CompanyJob>> = self.send_json(request).await?;
        Ok(envelope.unwrap_or_default())
    }

    pub async fn candidates(
        &self,
        bearer: &str,
        company_id: &str,
        job_id: &str,
        page: PageRequest,
    ) -> Result<Page<CandidateProfile>, UpstreamError> {
        let path = format!("/api/jobs/candidates/{job_id}");
        let request = self
            .request(Method::GET, &path, Some(bearer))
            .query(&[("companyId", company_id)]);
        let envelope: Option<Page<CandidateProfile>> =
            self.send_json(Self::paged(request, page)).await?;
        Ok(envelope.unwrap_or_default())
    }

    pub async fn candidate_projects(
        &self,
        bearer: &str,
        user_id: &str,
        page: PageRequest,
    ) -> Result<Page<CandidateProject>, UpstreamError> {
        let path = format!("/api/jobs/projects/{user_id}");
        let request = Self::paged(self.request(Method::GET, &path, Some(bearer)), page);
        let envelope: Option<Page<CandidateProject>> = self.send_json(request).await?;
        Ok(envelope.unwrap_or_default())
    }
}
