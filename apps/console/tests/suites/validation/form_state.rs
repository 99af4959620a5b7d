use console::validation::{FormState, JobPosting, Keystroke, LETTERS_ONLY_MESSAGE};

use super::fixtures::valid_posting;

#[test]
fn rejected_keystroke_leaves_value_and_shows_message() {
    let mut form = FormState::with_record(valid_posting());

    let outcome = form.input("workType", "Remote1");

    assert_eq!(
        outcome,
        Keystroke::Rejected {
            message: LETTERS_ONLY_MESSAGE
        }
    );
    assert_eq!(form.record().work_type, "Remote");
    assert_eq!(form.errors().get("workType"), Some(LETTERS_ONLY_MESSAGE));
}

#[test]
fn accepted_keystroke_clears_the_field_error() {
    let mut form = FormState::with_record(valid_posting());
    form.input("jobType", "Contract2");
    assert!(form.errors().contains("jobType"));

    assert!(form.input("jobType", "Contract").is_accepted());
    assert_eq!(form.record().job_type, "Contract");
    assert!(!form.errors().contains("jobType"));
}

#[test]
fn free_text_fields_take_anything() {
    let mut form = FormState::<JobPosting>::new();
    assert!(form.input("requiredExperience", "3+ yrs (min)").is_accepted());
    assert_eq!(form.record().required_experience, "3+ yrs (min)");
}

#[test]
fn submit_reports_every_field_then_succeeds_once_fixed() {
    let mut form = FormState::<JobPosting>::new();

    let errors = form.submit().unwrap_err();
    assert_eq!(errors.len(), 11);
    assert_eq!(form.errors(), &errors);

    let mut fixed = FormState::with_record(valid_posting());
    let record = fixed.submit().unwrap();
    assert_eq!(record, valid_posting());
    assert!(fixed.errors().is_empty());

    fixed.reset();
    assert_eq!(fixed.record(), &JobPosting::default());
}
