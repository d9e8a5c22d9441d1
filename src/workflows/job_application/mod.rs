//! Job application intake: field values, position-driven visibility, and the
//! validation pass that runs when the applicant submits.

pub mod domain;
pub mod form;
pub mod script;
pub mod service;
pub mod sink;
pub mod validation;
pub mod visibility;

#[cfg(test)]
mod tests;

pub use domain::{
    FormData, FormField, Position, Skill, SkillSelection, UnknownFieldName, UnknownSkillName,
};
pub use form::{ApplicationForm, FormEventError, FormPolicy, SubmitOutcome};
pub use script::{replay, ScriptedEvent};
pub use service::{ApplicationIntakeService, IntakeError};
pub use sink::{LoggingSink, SinkError, SubmissionSink, SUCCESS_NOTICE};
pub use validation::{validate, ErrorMap, FieldValidationError};
pub use visibility::VisibilityFlags;
