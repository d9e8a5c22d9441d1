use std::convert::Infallible;

use serde::Serialize;
use tracing::debug;

use super::domain::{FormData, FormField, Position, Skill, UnknownFieldName, UnknownSkillName};
use super::validation::{validate, ErrorMap};
use super::visibility::VisibilityFlags;

/// Behavior dials for a form instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormPolicy {
    /// Wipe values of conditional fields as soon as a position change hides
    /// them. Off by default: stale values are kept and simply not validated.
    pub clear_hidden_fields: bool,
}

/// Rejected input events. State is left untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormEventError {
    #[error(transparent)]
    UnknownField(#[from] UnknownFieldName),
    #[error(transparent)]
    UnknownSkill(#[from] UnknownSkillName),
    #[error("field '{0}' is a checkbox group and takes no text value")]
    NotATextField(FormField),
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Accepted { data: FormData },
    Rejected { errors: ErrorMap },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }

    pub fn errors(&self) -> Option<&ErrorMap> {
        match self {
            SubmitOutcome::Accepted { .. } => None,
            SubmitOutcome::Rejected { errors } => Some(errors),
        }
    }
}

/// State owner for one application form: current values plus the errors from
/// the last submit attempt.
#[derive(Debug, Clone, Default)]
pub struct ApplicationForm {
    data: FormData,
    errors: ErrorMap,
    policy: FormPolicy,
}

impl ApplicationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: FormPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Start from previously captured values. Errors start empty.
    pub fn from_data(data: FormData, policy: FormPolicy) -> Self {
        Self {
            data,
            errors: ErrorMap::default(),
            policy,
        }
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error_for(&self, field: FormField) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn policy(&self) -> FormPolicy {
        self.policy
    }

    pub fn visibility(&self) -> VisibilityFlags {
        VisibilityFlags::for_position(&self.data.applying_for_position)
    }

    /// Apply a change event from an input control.
    ///
    /// Checkbox events flip the named skill; every other event overwrites the
    /// named field with `raw_value`. Nothing is validated here.
    pub fn on_field_change(
        &mut self,
        name: &str,
        raw_value: &str,
        is_checkbox: bool,
    ) -> Result<(), FormEventError> {
        if is_checkbox {
            let skill: Skill = name.parse()?;
            let checked = self.data.additional_skills.toggle(skill);
            debug!(%skill, checked, "skill toggled");
            return Ok(());
        }

        let field: FormField = name.parse()?;
        if field == FormField::AdditionalSkills {
            return Err(FormEventError::NotATextField(field));
        }

        if field == FormField::ApplyingForPosition {
            self.change_position(Position::from_raw(raw_value));
        } else {
            self.data.set_text(field, raw_value.to_string());
            debug!(%field, "field updated");
        }
        Ok(())
    }

    /// Set a skill checkbox to an explicit state reported by the control.
    pub fn set_skill(&mut self, skill: Skill, checked: bool) {
        self.data.additional_skills.set(skill, checked);
        debug!(%skill, checked, "skill set");
    }

    pub fn select_position(&mut self, position: Position) {
        self.change_position(position);
    }

    fn change_position(&mut self, position: Position) {
        let before = self.visibility();
        self.data.applying_for_position = position;
        let after = self.visibility();

        if before == after {
            return;
        }
        debug!(
            position = self.data.applying_for_position.as_str(),
            ?after,
            "visibility recomputed"
        );

        if self.policy.clear_hidden_fields {
            for field in after.hidden_fields() {
                if before.is_visible(field) {
                    self.data.set_text(field, String::new());
                    debug!(%field, "cleared hidden field");
                }
            }
        }
    }

    /// Validate everything and record the outcome.
    ///
    /// A rejected attempt replaces the stored errors wholesale; an accepted
    /// one clears them and hands back a snapshot of the submitted values.
    pub fn submit(&mut self) -> SubmitOutcome {
        match self.submit_with(|_| Ok::<(), Infallible>(())) {
            Ok(outcome) => outcome,
            Err(never) => match never {},
        }
    }

    /// Like [`submit`](Self::submit), but hands accepted values to `deliver`
    /// before anything is recorded. If delivery fails the form is unchanged.
    pub fn submit_with<E, F>(&mut self, deliver: F) -> Result<SubmitOutcome, E>
    where
        F: FnOnce(&FormData) -> Result<(), E>,
    {
        let errors = validate(&self.data, &self.visibility());
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Ok(SubmitOutcome::Rejected { errors });
        }

        deliver(&self.data)?;
        self.errors = ErrorMap::default();
        Ok(SubmitOutcome::Accepted {
            data: self.data.clone(),
        })
    }
}
