//! Wire shapes of the recruitment REST API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::{null_as_default, CompanyProfile, JobPosting};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Paginated envelope `{content, totalPages}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_pages: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_pages: 0,
        }
    }
}

/// `?page=&size=` as the browser sends it.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

/// Normalized page request: zero-based page, size in `1..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl From<PageQuery> for PageRequest {
    fn from(query: PageQuery) -> Self {
        let size = match query.size {
            None | Some(0) => DEFAULT_PAGE_SIZE,
            Some(size) => size.min(MAX_PAGE_SIZE),
        };
        Self {
            page: query.page.unwrap_or(0),
            size,
        }
    }
}

/// A stored company profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(flatten)]
    pub profile: CompanyProfile,
}

/// A stored job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyJob {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<i64>,
    /// Either an ISO string or a `[y, m, d, h, min, s]` array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Value>,
    #[serde(flatten)]
    pub posting: JobPosting,
}

/// Body the API expects when a job is created or updated.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSubmission<'a> {
    #[serde(flatten)]
    pub posting: &'a JobPosting,
    pub user_id: &'a str,
}

/// A candidate who applied to one of the company's jobs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateProfile {
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub contact_no: String,
    #[serde(deserialize_with = "null_as_default")]
    pub gender: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pin_code: String,
    /// `[y, m, d]` as sent by the API.
    pub dob: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profile_image_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub resume_url: String,
}

/// A project listed on a candidate's profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateProject {
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub social_user_id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub project_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub about: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tools_and_technology: String,
    #[serde(deserialize_with = "null_as_default")]
    pub github_link: String,
    #[serde(deserialize_with = "null_as_default")]
    pub application_link: String,
    #[serde(deserialize_with = "null_as_default")]
    pub insert_file: String,
}

/// Successful `/auth/login` answer.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// `/auth/verify` answer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VerifyResponse {
    pub user_verified: bool,
}

/// Company logo forwarded as the multipart `file` part.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoUpload {
    pub file_name: String,
    #[serde(default = "default_content_type")]
    pub content_type: String,
    /// Base64 (standard alphabet) file contents.
    pub data: String,
}

fn default_content_type() -> String {
    "application/octet-stream".to_string()
}

impl std::fmt::Debug for LogoUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogoUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("data_len", &self.data.len())
            .finish()
    }
}
