//! Company profile record and its rule table.

use serde::{Deserialize, Serialize};

use super::patterns::Pattern;
use super::rules::{Check, FieldRule};
use super::{ErrorMap, Validate};

/// Editable company profile as the console submits it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyProfile {
    #[serde(deserialize_with = "super::null_as_default")]
    pub company_name: String,
    /// Reference (URL) of the uploaded logo; never validated.
    #[serde(deserialize_with = "super::null_as_default")]
    pub company_img: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub about_us: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub website_url: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub industry_type: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub contact_email: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub phone_number: String,
    #[serde(rename = "linkdinProfile", deserialize_with = "super::null_as_default")]
    pub linkedin_profile: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub pincode: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub country: String,
}

super::impl_record!(CompanyProfile {
    "companyName" => company_name,
    "companyImg" => company_img,
    "aboutUs" => about_us,
    "websiteUrl" => website_url,
    "industryType" => industry_type,
    "contactEmail" => contact_email,
    "phoneNumber" => phone_number,
    "linkdinProfile" => linkedin_profile,
    "address" => address,
    "pincode" => pincode,
    "city" => city,
    "state" => state,
    "country" => country,
});

const COMPANY_NAME_CHECKS: &[Check] = &[Check::matches(
    Pattern::CompanyName,
    "Company name can only contain letters, numbers, and special characters",
)];
const WEBSITE_CHECKS: &[Check] = &[Check::matches(
    Pattern::WebsiteUrl,
    "Invalid website URL format",
)];
const EMAIL_CHECKS: &[Check] = &[Check::matches(Pattern::Email, "Invalid email format")];
const PHONE_CHECKS: &[Check] = &[Check::matches(
    Pattern::Phone,
    "Phone number must be 10 digits and cannot contain letters or special characters.",
)];
const LINKEDIN_CHECKS: &[Check] = &[Check::matches(
    Pattern::LinkedinUrl,
    "Invalid LinkedIn profile URL",
)];
// Non-digits are reported before length so "123abc" reads as a numeric error.
const PINCODE_CHECKS: &[Check] = &[
    Check::matches(Pattern::Digits, "Pincode must be numeric"),
    Check::matches(Pattern::Pincode, "Pincode must be exactly 6 digits"),
];
const CITY_CHECKS: &[Check] = &[Check::matches(Pattern::Letters, "City can only contain letters")];
const STATE_CHECKS: &[Check] = &[Check::matches(
    Pattern::Letters,
    "State can only contain letters",
)];
const COUNTRY_CHECKS: &[Check] = &[Check::matches(
    Pattern::Letters,
    "Country can only contain letters",
)];

static COMPANY_RULES: &[FieldRule] = &[
    FieldRule::required("companyName", "Company name is required").with(COMPANY_NAME_CHECKS),
    FieldRule::optional("websiteUrl").with(WEBSITE_CHECKS),
    FieldRule::required("contactEmail", "Contact email is required").with(EMAIL_CHECKS),
    FieldRule::optional("phoneNumber").with(PHONE_CHECKS),
    FieldRule::optional("linkdinProfile").with(LINKEDIN_CHECKS),
    FieldRule::required("address", "Address is required"),
    FieldRule::required("pincode", "Pincode is required").with(PINCODE_CHECKS),
    FieldRule::required("city", "City is required").with(CITY_CHECKS),
    FieldRule::required("state", "State is required").with(STATE_CHECKS),
    FieldRule::required("country", "Country is required").with(COUNTRY_CHECKS),
];

impl Validate for CompanyProfile {
    fn rules() -> &'static [FieldRule] {
        COMPANY_RULES
    }
}

/// Convenience wrapper for callers that hold a profile by reference.
pub fn validate_company_profile(profile: &CompanyProfile) -> ErrorMap {
    profile.validate()
}
