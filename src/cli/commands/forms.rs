use super::FormArg;
use crate::ui::output;
use anyhow::Result;
use clap::Args;
use event_hub::forms::{schema, FormType};

#[derive(Args)]
pub struct SchemaCommand {
    /// Form to describe
    #[arg(value_enum)]
    pub form: FormArg,
}

/// List every form with its field count
pub fn forms_command() -> Result<()> {
    output::print_forms(&FormType::ALL);
    Ok(())
}

/// Print the schema of one form
pub fn schema_command(cmd: SchemaCommand) -> Result<()> {
    output::print_schema(schema(cmd.form.into()));
    Ok(())
}
