//! Job posting record and its rule table.

use serde::{Deserialize, Serialize};

use super::patterns::Pattern;
use super::rules::{Check, FieldRule};
use super::Validate;

/// The fifteen text fields of a job posting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobPosting {
    #[serde(deserialize_with = "super::null_as_default")]
    pub job_designation: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub work_type: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub job_type: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub about_job: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub education: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub employment_type: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub good_to_have_skills: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub industry_type: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub job_description: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub key_skills: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub must_have_skills: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub required_experience: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub role_category: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub roles_and_responsibilities: String,
}

super::impl_record!(JobPosting {
    "jobDesignation" => job_designation,
    "workType" => work_type,
    "jobType" => job_type,
    "location" => location,
    "aboutJob" => about_job,
    "education" => education,
    "employmentType" => employment_type,
    "goodToHaveSkills" => good_to_have_skills,
    "industryType" => industry_type,
    "jobDescription" => job_description,
    "keySkills" => key_skills,
    "mustHaveSkills" => must_have_skills,
    "requiredExperience" => required_experience,
    "roleCategory" => role_category,
    "rolesAndResponsibilities" => roles_and_responsibilities,
});

const DESIGNATION_CHECKS: &[Check] = &[Check::matches(
    Pattern::Letters,
    "Job designation must contain only letters",
)];
const WORK_TYPE_CHECKS: &[Check] = &[Check::matches(
    Pattern::Letters,
    "Work type must contain only letters",
)];
const JOB_TYPE_CHECKS: &[Check] = &[Check::matches(
    Pattern::Letters,
    "Job type must contain only letters",
)];
const EMPLOYMENT_TYPE_CHECKS: &[Check] = &[Check::matches(
    Pattern::Letters,
    "Employment type must contain only letters",
)];
const INDUSTRY_TYPE_CHECKS: &[Check] = &[Check::matches(
    Pattern::Letters,
    "Industry type must contain only letters",
)];

static JOB_RULES: &[FieldRule] = &[
    FieldRule::required("jobDesignation", "Job designation is required").with(DESIGNATION_CHECKS),
    FieldRule::required("workType", "Work type is required").with(WORK_TYPE_CHECKS),
    FieldRule::required("jobType", "Job type is required").with(JOB_TYPE_CHECKS),
    FieldRule::required("location", "Location is required"),
    FieldRule::required("aboutJob", "About job is required"),
    FieldRule::required("education", "Education is required"),
    FieldRule::required("employmentType", "Employment type is required")
        .with(EMPLOYMENT_TYPE_CHECKS),
    FieldRule::required("industryType", "Industry type is required").with(INDUSTRY_TYPE_CHECKS),
    FieldRule::required("mustHaveSkills", "Must-have skills are required"),
    FieldRule::required("requiredExperience", "Required experience is required"),
    FieldRule::required(
        "rolesAndResponsibilities",
        "Roles and responsibilities are required",
    ),
];

impl Validate for JobPosting {
    fn rules() -> &'static [FieldRule] {
        JOB_RULES
    }
}
