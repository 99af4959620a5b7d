use console::validation::{CompanyProfile, JobPosting, SignupCredentials};

pub fn valid_profile() -> CompanyProfile {
    CompanyProfile {
        company_name: "Acme Pvt. Ltd.".to_string(),
        company_img: String::new(),
        about_us: "We hire.".to_string(),
        website_url: "https://acme.example".to_string(),
        industry_type: "Software".to_string(),
        contact_email: "hr@acme.com".to_string(),
        phone_number: "9876543210".to_string(),
        linkedin_profile: "https://www.linkedin.com/company/acme".to_string(),
        address: "12 MG Road".to_string(),
        pincode: "560001".to_string(),
        city: "Pune".to_string(),
        state: "Maharashtra".to_string(),
        country: "India".to_string(),
    }
}

pub fn valid_posting() -> JobPosting {
    JobPosting {
        job_designation: "Backend Engineer".to_string(),
        work_type: "Remote".to_string(),
        job_type: "Permanent".to_string(),
        location: "Pune".to_string(),
        about_job: "Build services".to_string(),
        education: "B.Tech".to_string(),
        employment_type: "Full Time".to_string(),
        good_to_have_skills: "Kafka".to_string(),
        industry_type: "Software".to_string(),
        job_description: "Own the API".to_string(),
        key_skills: "Rust".to_string(),
        must_have_skills: "Rust, SQL".to_string(),
        required_experience: "3+ years".to_string(),
        role_category: "Engineering".to_string(),
        roles_and_responsibilities: "Ship features".to_string(),
    }
}

pub fn valid_signup() -> SignupCredentials {
    SignupCredentials {
        company_name: "Acme".to_string(),
        email: "hr@acme.com".to_string(),
        password: "secret1".to_string(),
        confirm_password: "secret1".to_string(),
    }
}
