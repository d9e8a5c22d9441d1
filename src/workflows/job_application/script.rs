use serde::{Deserialize, Serialize};

use super::domain::Skill;
use super::form::SubmitOutcome;
use super::service::{ApplicationIntakeService, IntakeError};
use super::sink::SubmissionSink;

/// One recorded input-layer event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptedEvent {
    /// Text, select, number or date-time control changed.
    Change { name: String, value: String },
    /// Checkbox clicked.
    Toggle { name: String },
    /// Checkbox reported with an explicit state.
    Check { skill: Skill, checked: bool },
    Submit,
}

/// Feed events to the service in order, collecting every submit outcome.
pub fn replay<S>(
    service: &mut ApplicationIntakeService<S>,
    events: &[ScriptedEvent],
) -> Result<Vec<SubmitOutcome>, IntakeError>
where
    S: SubmissionSink + 'static,
{
    let mut outcomes = Vec::new();
    for event in events {
        match event {
            ScriptedEvent::Change { name, value } => service.on_field_change(name, value, false)?,
            ScriptedEvent::Toggle { name } => service.on_field_change(name, "", true)?,
            ScriptedEvent::Check { skill, checked } => service.set_skill(*skill, *checked),
            ScriptedEvent::Submit => outcomes.push(service.submit()?),
        }
    }
    Ok(outcomes)
}
