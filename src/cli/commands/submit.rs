use super::{parse_assignment, FormArg};
use crate::ui::output::{self, ConsoleNotifier};
use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use colored::*;
use event_hub::api::SubmissionGateway;
use event_hub::config::Config;
use event_hub::forms::{FormRecord, FormType};
use event_hub::session::{FormSession, SubmitOutcome};
use log::info;

#[derive(Args)]
pub struct ValidateCommand {
    /// Form the values belong to
    #[arg(value_enum)]
    pub form: FormArg,
    /// Field value as name=value (repeatable; multi-choice values are comma separated)
    #[arg(short = 'f', long = "field", value_parser = parse_assignment)]
    pub fields: Vec<(String, String)>,
}

#[derive(Args)]
pub struct SubmitCommand {
    /// Form the values belong to
    #[arg(value_enum)]
    pub form: FormArg,
    /// Field value as name=value (repeatable; multi-choice values are comma separated)
    #[arg(short = 'f', long = "field", value_parser = parse_assignment)]
    pub fields: Vec<(String, String)>,
    /// Print the record that would be sent instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

/// Builds a session for `form_type` with the given assignments applied
pub fn session_with_fields(form_type: FormType, fields: &[(String, String)]) -> Result<FormSession> {
    let mut session = FormSession::new(form_type);
    let schema = session.schema();
    for (name, value) in fields {
        session.values_mut().assign(schema, name, value)?;
    }
    Ok(session)
}

pub fn validate_command(cmd: ValidateCommand) -> Result<()> {
    let session = session_with_fields(cmd.form.into(), &cmd.fields)?;

    match session.validate() {
        Ok(()) => {
            println!("{} All fields of '{}' are valid", "✓".bright_green().bold(), session.form_type());
            Ok(())
        }
        Err(errors) => {
            output::print_validation_errors(session.schema(), &errors);
            anyhow::bail!("Validation failed for {} field(s)", errors.len())
        }
    }
}

pub async fn submit_command(cmd: SubmitCommand) -> Result<()> {
    let mut session = session_with_fields(cmd.form.into(), &cmd.fields)?;

    if cmd.dry_run {
        if let Err(errors) = session.validate() {
            output::print_validation_errors(session.schema(), &errors);
            anyhow::bail!("Validation failed for {} field(s)", errors.len());
        }
        let record = FormRecord::from_values(session.schema(), session.values(), Utc::now());
        println!("{}", record.to_json_pretty().context("Failed to serialize record")?);
        return Ok(());
    }

    let config = Config::load()?;
    let gateway = SubmissionGateway::new(config.gateway_settings())?;
    info!("Submitting {} (stub mode: {})", session.form_type(), gateway.is_stub());
    output::print_gateway_banner(&gateway);

    match session.submit(&gateway, &ConsoleNotifier).await? {
        SubmitOutcome::Submitted(_) => Ok(()),
        SubmitOutcome::Failed(_) => anyhow::bail!("Submission of '{}' failed", session.form_type()),
        SubmitOutcome::Invalid(errors) => {
            output::print_validation_errors(session.schema(), &errors);
            anyhow::bail!("Validation failed for {} field(s)", errors.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_with_fields() {
        let fields = vec![
            ("staffTypes".to_string(), "anchors,porters".to_string()),
            ("anchorCount".to_string(), "4".to_string()),
        ];
        let session = session_with_fields(FormType::Requirement, &fields).unwrap();
        assert_eq!(session.values().selection("staffTypes").len(), 2);
        assert_eq!(session.values().text("anchorCount"), "4");
        assert_eq!(session.values().text("porterCount"), "0");
    }

    #[test]
    fn test_session_with_unknown_field() {
        let fields = vec![("budget".to_string(), "x".to_string())];
        assert!(session_with_fields(FormType::Contact, &fields).is_err());
    }
}
