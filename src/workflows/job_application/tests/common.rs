use std::sync::{Arc, Mutex};

use crate::workflows::job_application::domain::{FormData, Position, Skill, SkillSelection};
use crate::workflows::job_application::form::{ApplicationForm, FormPolicy};
use crate::workflows::job_application::service::ApplicationIntakeService;
use crate::workflows::job_application::sink::{SinkError, SubmissionSink};

pub(super) const INTERVIEW_SLOT: &str = "2025-10-05T14:30";

pub(super) fn skills(checked: &[Skill]) -> SkillSelection {
    let mut selection = SkillSelection::default();
    for skill in checked {
        selection.set(*skill, true);
    }
    selection
}

/// Passes every rule for a developer applicant.
pub(super) fn developer_data() -> FormData {
    FormData {
        full_name: "Ada Lovelace".to_string(),
        email: "a@b.com".to_string(),
        phone_number: "555".to_string(),
        applying_for_position: Position::Developer,
        relevant_experience: "2".to_string(),
        additional_skills: skills(&[Skill::Python]),
        preferred_interview_time: INTERVIEW_SLOT.to_string(),
        ..FormData::default()
    }
}

pub(super) fn designer_data() -> FormData {
    FormData {
        applying_for_position: Position::Designer,
        relevant_experience: "4".to_string(),
        portfolio_url: "https://portfolio.example.com/ada".to_string(),
        additional_skills: skills(&[Skill::Css, Skill::JavaScript]),
        ..developer_data()
    }
}

pub(super) fn manager_data() -> FormData {
    FormData {
        applying_for_position: Position::Manager,
        relevant_experience: String::new(),
        management_experience: "Led a team of eight for three years".to_string(),
        ..developer_data()
    }
}

pub(super) fn form_with(data: FormData) -> ApplicationForm {
    ApplicationForm::from_data(data, FormPolicy::default())
}

pub(super) fn build_service() -> (ApplicationIntakeService<MemorySink>, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::default());
    let service = ApplicationIntakeService::new(sink.clone(), FormPolicy::default());
    (service, sink)
}

/// Types a full developer application through change events.
pub(super) fn fill_developer<S>(service: &mut ApplicationIntakeService<S>)
where
    S: SubmissionSink + 'static,
{
    let events = [
        ("fullName", "Ada Lovelace"),
        ("email", "ada@example.com"),
        ("phoneNumber", "5551234"),
        ("applyingForPosition", "Developer"),
        ("relevantExperience", "3"),
        ("preferredInterviewTime", INTERVIEW_SLOT),
    ];
    for (name, value) in events {
        service
            .on_field_change(name, value, false)
            .expect("known field");
    }
    service
        .on_field_change("Java", "", true)
        .expect("known skill");
}

#[derive(Default, Clone)]
pub(super) struct MemorySink {
    delivered: Arc<Mutex<Vec<FormData>>>,
}

impl MemorySink {
    pub(super) fn delivered(&self) -> Vec<FormData> {
        self.delivered.lock().expect("sink mutex poisoned").clone()
    }
}

impl SubmissionSink for MemorySink {
    fn deliver(&self, application: &FormData) -> Result<(), SinkError> {
        self.delivered
            .lock()
            .expect("sink mutex poisoned")
            .push(application.clone());
        Ok(())
    }
}

pub(super) struct OfflineSink;

impl SubmissionSink for OfflineSink {
    fn deliver(&self, _application: &FormData) -> Result<(), SinkError> {
        Err(SinkError::Unavailable("backend offline".to_string()))
    }
}
