use super::commands::config::ConfigCommands;
use super::commands::fill::FillCommand;
use super::commands::forms::SchemaCommand;
use super::commands::submit::{SubmitCommand, ValidateCommand};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "event-hub")]
#[command(about = "Validate and submit The Event Hub lead-capture forms")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the available forms
    Forms,
    /// Show the fields, constraints and options of a form
    Schema(SchemaCommand),
    /// Check field values without submitting them
    Validate(ValidateCommand),
    /// Validate field values and submit them to the collector
    Submit(SubmitCommand),
    /// Fill in a form interactively
    Fill(FillCommand),
    /// Collector and gateway settings
    Config(ConfigCommands),
}
