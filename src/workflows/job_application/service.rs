use std::sync::Arc;

use tracing::info;

use super::domain::Skill;
use super::form::{ApplicationForm, FormEventError, FormPolicy, SubmitOutcome};
use super::sink::{SinkError, SubmissionSink};

/// Connects a form instance to the sink that receives accepted submissions.
pub struct ApplicationIntakeService<S> {
    form: ApplicationForm,
    sink: Arc<S>,
}

impl<S> ApplicationIntakeService<S>
where
    S: SubmissionSink + 'static,
{
    pub fn new(sink: Arc<S>, policy: FormPolicy) -> Self {
        Self::with_form(ApplicationForm::with_policy(policy), sink)
    }

    pub fn with_form(form: ApplicationForm, sink: Arc<S>) -> Self {
        Self { form, sink }
    }

    pub fn form(&self) -> &ApplicationForm {
        &self.form
    }

    pub fn on_field_change(
        &mut self,
        name: &str,
        raw_value: &str,
        is_checkbox: bool,
    ) -> Result<(), IntakeError> {
        self.form.on_field_change(name, raw_value, is_checkbox)?;
        Ok(())
    }

    pub fn set_skill(&mut self, skill: Skill, checked: bool) {
        self.form.set_skill(skill, checked);
    }

    /// Validate the form and deliver it to the sink when it passes.
    ///
    /// A sink failure leaves the stored errors as they were before the call.
    pub fn submit(&mut self) -> Result<SubmitOutcome, IntakeError> {
        let sink = &self.sink;
        let outcome = self.form.submit_with(|data| sink.deliver(data))?;
        if let SubmitOutcome::Rejected { errors } = &outcome {
            info!(
                failing = errors.len(),
                fields = %errors.field_names(),
                "submission rejected"
            );
        }
        Ok(outcome)
    }
}

/// Error raised by the intake service.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error(transparent)]
    Event(#[from] FormEventError),
    #[error(transparent)]
    Sink(#[from] SinkError),
}
