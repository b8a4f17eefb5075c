pub mod app;
pub mod commands;

pub use app::{Cli, Commands};

use anyhow::Result;

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Forms => commands::forms::forms_command(),
        Commands::Schema(cmd) => commands::forms::schema_command(cmd),
        Commands::Validate(cmd) => commands::submit::validate_command(cmd),
        Commands::Submit(cmd) => commands::submit::submit_command(cmd).await,
        Commands::Fill(cmd) => commands::fill::fill_command(cmd).await,
        Commands::Config(cmd) => commands::config::config_command(cmd),
    }
}
