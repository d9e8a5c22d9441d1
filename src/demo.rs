use std::sync::Arc;

use job_application_form::config::AppConfig;
use job_application_form::error::AppError;
use job_application_form::workflows::job_application::{
    replay, ApplicationIntakeService, LoggingSink, ScriptedEvent, Skill, SubmitOutcome,
};

fn change(name: &str, value: &str) -> ScriptedEvent {
    ScriptedEvent::Change {
        name: name.to_string(),
        value: value.to_string(),
    }
}

fn demo_script() -> Vec<ScriptedEvent> {
    vec![
        change("fullName", "Grace Hopper"),
        change("email", "grace@example"),
        change("phoneNumber", "5550100"),
        change("applyingForPosition", "Designer"),
        change("relevantExperience", "0"),
        change("portfolioURL", "portfolio"),
        ScriptedEvent::Submit,
        change("email", "grace@example.com"),
        change("relevantExperience", "6"),
        change("portfolioURL", "https://grace.example.com"),
        ScriptedEvent::Toggle {
            name: "Cpp".to_string(),
        },
        ScriptedEvent::Check {
            skill: Skill::Python,
            checked: true,
        },
        change("preferredInterviewTime", "2025-10-06T09:30"),
        ScriptedEvent::Submit,
    ]
}

pub(crate) fn run_demo(config: &AppConfig) -> Result<(), AppError> {
    let mut service = ApplicationIntakeService::new(Arc::new(LoggingSink), config.form.policy());
    let outcomes = replay(&mut service, &demo_script())?;

    for (attempt, outcome) in outcomes.iter().enumerate() {
        println!("Submit attempt {}:", attempt + 1);
        match outcome {
            SubmitOutcome::Rejected { errors } => {
                for (field, message) in errors.iter() {
                    println!("  {:<24} {}", field.label(), message);
                }
            }
            SubmitOutcome::Accepted { data } => {
                println!("  accepted: {}", serde_json::to_string_pretty(data)?);
            }
        }
    }
    Ok(())
}
