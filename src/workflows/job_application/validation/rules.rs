use super::super::domain::{FormData, FormField};
use super::super::visibility::VisibilityFlags;
use super::parsers::{is_absolute_url, is_plausible_email, parse_date_time, parse_number};
use super::FieldValidationError;

pub(crate) type FieldRule = fn(&FormData, &VisibilityFlags) -> Option<FieldValidationError>;

/// Rules in the order their fields appear on the form.
pub(crate) const FIELD_RULES: [FieldRule; 8] = [
    full_name,
    email,
    phone_number,
    relevant_experience,
    portfolio_url,
    management_experience,
    additional_skills,
    preferred_interview_time,
];

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn fail(field: FormField, message: &str) -> Option<FieldValidationError> {
    Some(FieldValidationError::new(field, message))
}

fn full_name(data: &FormData, _: &VisibilityFlags) -> Option<FieldValidationError> {
    if is_blank(&data.full_name) {
        return fail(FormField::FullName, "Full Name is required");
    }
    None
}

fn email(data: &FormData, _: &VisibilityFlags) -> Option<FieldValidationError> {
    if is_blank(&data.email) {
        fail(FormField::Email, "Email is required")
    } else if !is_plausible_email(&data.email) {
        fail(FormField::Email, "Email is invalid")
    } else {
        None
    }
}

fn phone_number(data: &FormData, _: &VisibilityFlags) -> Option<FieldValidationError> {
    if is_blank(&data.phone_number) {
        fail(FormField::PhoneNumber, "Phone Number is required")
    } else if parse_number(&data.phone_number).is_none() {
        fail(
            FormField::PhoneNumber,
            "Phone Number must be a valid number",
        )
    } else {
        None
    }
}

fn relevant_experience(data: &FormData, flags: &VisibilityFlags) -> Option<FieldValidationError> {
    if !flags.show_relevant_experience {
        return None;
    }

    match parse_number(&data.relevant_experience) {
        Some(years) if years > 0.0 => None,
        _ => fail(
            FormField::RelevantExperience,
            "Relevant Experience is required and must be greater than 0",
        ),
    }
}

fn portfolio_url(data: &FormData, flags: &VisibilityFlags) -> Option<FieldValidationError> {
    if !flags.show_portfolio_url {
        return None;
    }

    if is_blank(&data.portfolio_url) {
        fail(FormField::PortfolioUrl, "Portfolio URL is required")
    } else if !is_absolute_url(&data.portfolio_url) {
        fail(FormField::PortfolioUrl, "Portfolio URL is invalid")
    } else {
        None
    }
}

fn management_experience(
    data: &FormData,
    flags: &VisibilityFlags,
) -> Option<FieldValidationError> {
    if flags.show_management_experience && is_blank(&data.management_experience) {
        return fail(
            FormField::ManagementExperience,
            "Management Experience is required",
        );
    }
    None
}

fn additional_skills(data: &FormData, _: &VisibilityFlags) -> Option<FieldValidationError> {
    if data.additional_skills.any_checked() {
        return None;
    }
    fail(
        FormField::AdditionalSkills,
        "Please select at least one skill",
    )
}

fn preferred_interview_time(data: &FormData, _: &VisibilityFlags) -> Option<FieldValidationError> {
    if is_blank(&data.preferred_interview_time) {
        fail(
            FormField::PreferredInterviewTime,
            "Preferred Interview Time is required",
        )
    } else if parse_date_time(&data.preferred_interview_time).is_none() {
        fail(
            FormField::PreferredInterviewTime,
            "Preferred Interview Time must be a valid date and time",
        )
    } else {
        None
    }
}
