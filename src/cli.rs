use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use job_application_form::config::AppConfig;
use job_application_form::error::AppError;
use job_application_form::telemetry;
use job_application_form::workflows::job_application::{
    replay, ApplicationIntakeService, LoggingSink, Position, ScriptedEvent, VisibilityFlags,
};
use serde::Serialize;
use tracing::info;

use crate::demo::run_demo;

#[derive(Parser, Debug)]
#[command(
    name = "job-application-form",
    about = "Drive the job application form from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk through a built-in session (default command)
    Demo,
    /// Apply a JSON file of recorded events to a fresh form
    Replay(ReplayArgs),
    /// Print which conditional fields each position enables
    Rules(RulesArgs),
}

#[derive(Args, Debug)]
struct ReplayArgs {
    /// Path to a JSON array of events (`change`, `toggle`, `check`, `submit`)
    script: PathBuf,
}

#[derive(Args, Debug)]
struct RulesArgs {
    /// Only show the rule for this position
    #[arg(long)]
    position: Option<String>,
}

#[derive(Debug, Serialize)]
struct RuleRow {
    position: String,
    #[serde(flatten)]
    flags: VisibilityFlags,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(
        ?config.environment,
        clear_hidden_fields = config.form.clear_hidden_fields,
        "job application form ready"
    );

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => run_demo(&config),
        Command::Replay(args) => run_replay(&config, args),
        Command::Rules(args) => print_rules(args),
    }
}

fn run_replay(config: &AppConfig, args: ReplayArgs) -> Result<(), AppError> {
    let raw = fs::read_to_string(&args.script)?;
    let events: Vec<ScriptedEvent> = serde_json::from_str(&raw)?;
    info!(script = %args.script.display(), events = events.len(), "replaying events");

    let mut service = ApplicationIntakeService::new(Arc::new(LoggingSink), config.form.policy());
    for outcome in replay(&mut service, &events)? {
        println!("{}", serde_json::to_string(&outcome)?);
    }
    Ok(())
}

fn print_rules(args: RulesArgs) -> Result<(), AppError> {
    let positions = match args.position {
        Some(raw) => vec![Position::from_raw(&raw)],
        None => Position::OFFERED.to_vec(),
    };

    let rows: Vec<RuleRow> = positions
        .iter()
        .map(|position| RuleRow {
            position: position.as_str().to_string(),
            flags: VisibilityFlags::for_position(position),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
