use tracing::info;

use super::domain::FormData;

/// Message shown to the applicant once a submission is accepted.
pub const SUCCESS_NOTICE: &str = "Form submitted successfully!";

/// Receives accepted applications (persistence, transport, or plain logging).
pub trait SubmissionSink: Send + Sync {
    fn deliver(&self, application: &FormData) -> Result<(), SinkError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("failed to encode application: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("submission sink unavailable: {0}")]
    Unavailable(String),
}

/// Sink that only logs the notice and the submitted values.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSink;

impl SubmissionSink for LoggingSink {
    fn deliver(&self, application: &FormData) -> Result<(), SinkError> {
        let payload = serde_json::to_string(application)?;
        info!(application = %payload, "{}", SUCCESS_NOTICE);
        Ok(())
    }
}
