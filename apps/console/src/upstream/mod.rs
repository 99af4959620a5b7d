//! Client and wire types for the recruitment REST API.

pub mod client;
pub mod error;
pub mod models;

pub use client::{ApiClient, SaveMode};
pub use error::UpstreamError;
pub use models::{
    CandidateProfile, CandidateProject, CompanyJob, CompanyRecord, LogoUpload, Page, PageQuery,
    PageRequest, VerifyResponse,
};
