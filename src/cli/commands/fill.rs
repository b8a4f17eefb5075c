//! Interactive form filling

use super::FormArg;
use crate::ui::output::{self, ConsoleNotifier};
use crate::ui::prompts::{prompt_confirmation, prompt_field};
use anyhow::Result;
use clap::Args;
use colored::*;
use event_hub::api::SubmissionGateway;
use event_hub::config::Config;
use event_hub::forms::{is_visible, ValidationErrors};
use event_hub::session::{FormSession, SubmitOutcome};
use is_terminal::IsTerminal;

#[derive(Args)]
pub struct FillCommand {
    /// Form to fill in
    #[arg(value_enum)]
    pub form: FormArg,
}

pub async fn fill_command(cmd: FillCommand) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        anyhow::bail!("'fill' needs an interactive terminal; use 'submit --field name=value' instead");
    }

    let config = Config::load()?;
    let gateway = SubmissionGateway::new(config.gateway_settings())?;
    let mut session = FormSession::new(cmd.form.into());

    println!();
    println!("  {}", session.form_type().to_string().bright_white().bold());
    output::print_gateway_banner(&gateway);
    println!();

    prompt_fields(&mut session, None)?;

    loop {
        match session.submit(&gateway, &ConsoleNotifier).await? {
            SubmitOutcome::Submitted(_) => return Ok(()),
            SubmitOutcome::Invalid(errors) => {
                output::print_validation_errors(session.schema(), &errors);
                prompt_fields(&mut session, Some(&errors))?;
            }
            SubmitOutcome::Failed(_) => {
                if !prompt_confirmation("Retry submission?", true)? {
                    anyhow::bail!("Submission of '{}' failed", session.form_type());
                }
            }
        }
    }
}

/// Prompts every visible field, or only the failing ones when `errors` is given.
///
/// Visibility is re-evaluated per field so counts appear right after the
/// staff types that enable them are picked.
fn prompt_fields(session: &mut FormSession, errors: Option<&ValidationErrors>) -> Result<()> {
    let schema = session.schema();
    for field in schema.fields() {
        if !is_visible(field, session.values()) {
            continue;
        }
        let error = match errors {
            Some(errors) => match errors.get(field.name) {
                Some(message) => Some(message),
                None => continue,
            },
            None => None,
        };
        prompt_field(field, session.values_mut(), error)?;
    }
    Ok(())
}
