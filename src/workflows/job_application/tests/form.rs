use super::common::*;
use crate::workflows::job_application::domain::{
    FormData, FormField, Position, Skill, UnknownFieldName, UnknownSkillName,
};
use crate::workflows::job_application::form::{
    ApplicationForm, FormEventError, FormPolicy, SubmitOutcome,
};

#[test]
fn text_changes_overwrite_fields_without_validating() {
    let mut form = ApplicationForm::new();

    form.on_field_change("email", "not an email", false)
        .expect("known field");

    assert_eq!(form.data().email, "not an email");
    assert!(form.errors().is_empty());
}

#[test]
fn checkbox_changes_toggle_the_named_skill() {
    let mut form = ApplicationForm::new();

    form.on_field_change("CSS", "on", true).expect("known skill");
    assert!(form.data().additional_skills.is_checked(Skill::Css));

    form.on_field_change("CSS", "on", true).expect("known skill");
    assert!(!form.data().additional_skills.is_checked(Skill::Css));
}

#[test]
fn toggling_twice_restores_the_original_selection() {
    let mut form = form_with(designer_data());
    let original = form.data().additional_skills.clone();

    for skill in Skill::ALL {
        form.on_field_change(skill.name(), "", true).expect("known");
        form.on_field_change(skill.name(), "", true).expect("known");
    }

    assert_eq!(form.data().additional_skills, original);
}

#[test]
fn set_skill_applies_explicit_state() {
    let mut form = ApplicationForm::new();

    form.set_skill(Skill::Java, true);
    form.set_skill(Skill::Java, true);

    assert_eq!(
        form.data().additional_skills.checked().collect::<Vec<_>>(),
        vec![Skill::Java]
    );
}

#[test]
fn unknown_names_are_rejected_without_state_change() {
    let mut form = form_with(developer_data());
    let before = form.data().clone();

    assert_eq!(
        form.on_field_change("nickname", "Ada", false),
        Err(FormEventError::UnknownField(UnknownFieldName(
            "nickname".to_string()
        )))
    );
    assert_eq!(
        form.on_field_change("Rust", "", true),
        Err(FormEventError::UnknownSkill(UnknownSkillName(
            "Rust".to_string()
        )))
    );
    assert_eq!(
        form.on_field_change("additionalSkills", "Python", false),
        Err(FormEventError::NotATextField(FormField::AdditionalSkills))
    );
    assert_eq!(form.data(), &before);
}

#[test]
fn position_change_recomputes_visibility() {
    let mut form = ApplicationForm::new();
    assert_eq!(form.visibility().hidden_fields().len(), 3);

    form.on_field_change("applyingForPosition", "Designer", false)
        .expect("known field");
    assert!(form.visibility().show_portfolio_url);

    form.on_field_change("applyingForPosition", "Intern", false)
        .expect("known field");
    assert_eq!(
        form.data().applying_for_position,
        Position::Unrecognized("Intern".to_string())
    );
    assert_eq!(form.visibility().hidden_fields().len(), 3);
}

#[test]
fn hidden_values_are_retained_by_default() {
    let mut form = form_with(designer_data());

    form.select_position(Position::Manager);

    assert_eq!(form.data().portfolio_url, "https://portfolio.example.com/ada");
    assert_eq!(form.data().relevant_experience, "4");
}

#[test]
fn clear_hidden_fields_policy_wipes_newly_hidden_values() {
    let mut form = ApplicationForm::from_data(
        designer_data(),
        FormPolicy {
            clear_hidden_fields: true,
        },
    );

    form.on_field_change("applyingForPosition", "Developer", false)
        .expect("known field");

    assert_eq!(form.data().portfolio_url, "");
    assert_eq!(form.data().relevant_experience, "4");
}

#[test]
fn rejected_submit_stores_errors_for_display() {
    let mut form = form_with(FormData {
        full_name: String::new(),
        ..developer_data()
    });

    let outcome = form.submit();

    assert!(!outcome.is_accepted());
    assert_eq!(outcome.errors(), Some(form.errors()));
    assert_eq!(
        form.error_for(FormField::FullName),
        Some("Full Name is required")
    );
    assert_eq!(form.error_for(FormField::Email), None);
}

#[test]
fn corrected_resubmit_clears_previous_errors() {
    let mut form = form_with(FormData {
        additional_skills: skills(&[]),
        ..developer_data()
    });
    assert!(!form.submit().is_accepted());
    assert!(form.errors().contains(FormField::AdditionalSkills));

    form.on_field_change("Cpp", "", true).expect("known skill");

    match form.submit() {
        SubmitOutcome::Accepted { data } => {
            assert!(data.additional_skills.is_checked(Skill::Cpp));
        }
        other => panic!("expected acceptance, got {other:?}"),
    }
    assert!(form.errors().is_empty());
}

#[test]
fn errors_are_recomputed_wholesale() {
    let mut form = form_with(FormData {
        email: String::new(),
        ..developer_data()
    });
    form.submit();
    assert!(form.errors().contains(FormField::Email));

    form.on_field_change("email", "ada@example.com", false)
        .expect("known field");
    form.on_field_change("phoneNumber", "call me", false)
        .expect("known field");
    form.submit();

    assert_eq!(
        form.errors().fields().collect::<Vec<_>>(),
        vec![FormField::PhoneNumber]
    );
}

#[test]
fn failed_delivery_leaves_stored_errors_untouched() {
    let mut form = form_with(FormData {
        full_name: String::new(),
        ..developer_data()
    });
    form.submit();
    form.on_field_change("fullName", "Ada Lovelace", false)
        .expect("known field");

    let result = form.submit_with(|_| Err("transport down"));

    assert_eq!(result, Err("transport down"));
    assert_eq!(
        form.error_for(FormField::FullName),
        Some("Full Name is required")
    );
}

#[test]
fn successful_delivery_sees_the_submitted_values() {
    let mut form = form_with(manager_data());
    let mut seen = None;

    let outcome = form
        .submit_with(|data| {
            seen = Some(data.clone());
            Ok::<(), ()>(())
        })
        .expect("delivery succeeds");

    assert!(outcome.is_accepted());
    assert_eq!(seen.as_ref(), Some(form.data()));
}
