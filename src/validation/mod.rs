//! Pure, per-step validators.
//!
//! Each validator maps the current [`QuoteForm`] to a field-name → message
//! map; an empty map means the step is valid. Validators never mutate the
//! form and never touch anything outside it.

use std::collections::BTreeMap;

use crate::domain::QuoteForm;
use crate::wizard::Step;

/// Field name → human-readable error message. Empty = valid.
pub type ValidationErrors = BTreeMap<&'static str, String>;

/// Dispatches to the validator for the given step. Steps without data entry
/// (intro, review, quote) always validate clean.
pub fn validate_step(step: Step, form: &QuoteForm) -> ValidationErrors {
    match step {
        Step::Personal => validate_personal(form),
        Step::Vehicle => validate_vehicle(form),
        Step::Coverage => validate_coverage(form),
        Step::Intro | Step::Review | Step::Quote => ValidationErrors::new(),
    }
}

pub fn validate_personal(form: &QuoteForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if form.full_name.trim().is_empty() {
        errors.insert("full_name", "Full name is required".into());
    }
    if form.phone.trim().is_empty() {
        errors.insert("phone", "Phone number is required".into());
    } else if !is_valid_phone(form.phone.trim()) {
        errors.insert("phone", "Please enter a valid phone number".into());
    }
    if form.email.trim().is_empty() {
        errors.insert("email", "Email is required".into());
    } else if !is_valid_email(form.email.trim()) {
        errors.insert("email", "Please enter a valid email address".into());
    }
    if form.location.trim().is_empty() {
        errors.insert("location", "Location is required".into());
    }

    errors
}

pub fn validate_vehicle(form: &QuoteForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if form.make.trim().is_empty() {
        errors.insert("make", "Vehicle make is required".into());
    }
    if form.model.trim().is_empty() {
        errors.insert("model", "Vehicle model is required".into());
    }
    if form.year.trim().is_empty() {
        errors.insert("year", "Year of manufacture is required".into());
    }
    if form.engine_capacity.trim().is_empty() {
        errors.insert("engine_capacity", "Engine capacity is required".into());
    }
    if form.vehicle_type.is_none() {
        errors.insert("vehicle_type", "Vehicle type is required".into());
    }
    if form.vehicle_value.trim().is_empty() {
        errors.insert("vehicle_value", "Vehicle value is required".into());
    }

    errors
}

pub fn validate_coverage(form: &QuoteForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if form.insurance_type.is_none() {
        errors.insert("insurance_type", "Please select an insurance type".into());
    }
    // Addons are optional and drawn from a closed enum, so nothing to check.

    errors
}

/// A single `@` separating a non-empty local part from a non-empty domain
/// that itself contains at least one `.`, with no whitespace anywhere.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

/// At least ten characters drawn from digits, spaces, hyphens, and
/// parentheses, with `+` permitted only as the leading character.
fn is_valid_phone(phone: &str) -> bool {
    if phone.len() < 10 {
        return false;
    }
    let rest = phone.strip_prefix('+').unwrap_or(phone);
    rest.chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Addon, InsuranceType, VehicleType};

    fn personal_form() -> QuoteForm {
        QuoteForm {
            full_name: "Chipo Mwansa".into(),
            phone: "+260 21 123 4567".into(),
            email: "chipo@example.com".into(),
            location: "Lusaka".into(),
            ..QuoteForm::default()
        }
    }

    #[test]
    fn empty_personal_form_reports_every_required_field() {
        let errors = validate_personal(&QuoteForm::new());
        assert_eq!(errors.len(), 4);
        for field in ["full_name", "phone", "email", "location"] {
            assert!(errors.contains_key(field), "missing error for {field}");
        }
    }

    #[test]
    fn complete_personal_form_is_valid() {
        assert!(validate_personal(&personal_form()).is_empty());
    }

    #[test]
    fn national_id_stays_optional() {
        let mut form = personal_form();
        form.national_id.clear();
        assert!(validate_personal(&form).is_empty());
    }

    #[test]
    fn whitespace_only_fields_count_as_missing() {
        let mut form = personal_form();
        form.full_name = "   ".into();
        let errors = validate_personal(&form);
        assert_eq!(
            errors.get("full_name").map(String::as_str),
            Some("Full name is required")
        );
    }

    #[test]
    fn email_patterns() {
        for good in ["a@b.co", "first.last@mail.example.org", "x@sub.domain.zm"] {
            assert!(is_valid_email(good), "{good} should be accepted");
        }
        for bad in [
            "plainaddress",
            "@missing-local.com",
            "missing-domain@",
            "two@@ats.com",
            "no-dot@domain",
            "spaces in@mail.com",
            "trailing-dot@domain.",
        ] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn phone_patterns() {
        for good in ["+260211234567", "0961 234 567", "(021) 123-4567"] {
            assert!(is_valid_phone(good), "{good} should be accepted");
        }
        for bad in ["12345", "09612345ab", "096+1234567", "call me maybe"] {
            assert!(!is_valid_phone(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn vehicle_step_requires_all_six_fields() {
        let errors = validate_vehicle(&QuoteForm::new());
        assert_eq!(errors.len(), 6);

        let form = QuoteForm {
            make: "Toyota".into(),
            model: "Corolla".into(),
            year: "2020".into(),
            engine_capacity: "1800cc".into(),
            vehicle_type: Some(VehicleType::Private),
            vehicle_value: "50,000".into(),
            ..QuoteForm::default()
        };
        assert!(validate_vehicle(&form).is_empty());
    }

    #[test]
    fn coverage_step_requires_only_insurance_type() {
        let mut form = QuoteForm::new();
        let errors = validate_coverage(&form);
        assert_eq!(
            errors.get("insurance_type").map(String::as_str),
            Some("Please select an insurance type")
        );

        form.insurance_type = Some(InsuranceType::ThirdParty);
        assert!(validate_coverage(&form).is_empty());

        // Addons never cause a coverage error.
        form.addons.insert(Addon::Flood);
        assert!(validate_coverage(&form).is_empty());
    }

    #[test]
    fn non_data_steps_validate_clean() {
        let form = QuoteForm::new();
        for step in [Step::Intro, Step::Review, Step::Quote] {
            assert!(validate_step(step, &form).is_empty());
        }
    }
}
