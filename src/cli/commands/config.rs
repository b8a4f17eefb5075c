use crate::ui::output;
use crate::ui::prompts::prompt_confirmation;
use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;
use event_hub::config::{Config, SETTING_NAMES};
use log::info;

#[derive(Args)]
pub struct ConfigCommands {
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Show current settings and the effective collector
    Show,
    /// Get the value of a specific setting
    Get {
        /// Setting name
        name: String,
    },
    /// Set the value of a specific setting
    Set {
        /// Setting name
        name: String,
        /// Setting value
        value: String,
    },
    /// Reset a setting to its default value
    Reset {
        /// Setting name
        name: String,
    },
    /// Reset all settings to default values
    ResetAll {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

pub fn config_command(cmd: ConfigCommands) -> Result<()> {
    match cmd.command {
        ConfigSubcommands::Show => show_command(),
        ConfigSubcommands::Get { name } => get_command(&name),
        ConfigSubcommands::Set { name, value } => set_command(&name, &value),
        ConfigSubcommands::Reset { name } => reset_command(&name),
        ConfigSubcommands::ResetAll { force } => reset_all_command(force),
    }
}

fn show_command() -> Result<()> {
    let config = Config::load()?;
    let path = Config::get_config_path()?;

    println!();
    println!("  {} {}", "Config file:".bright_white().bold(), path.display().to_string().dimmed());
    for name in SETTING_NAMES {
        let value = config.get_setting(name)?;
        let shown = if value.is_empty() { "(unset)".dimmed() } else { value.cyan() };
        println!("  {:<22} {}", name, shown);
    }
    println!();
    output::print_endpoint_status(config.resolved_endpoint().as_deref(), config.collector_url.as_deref());
    println!();
    Ok(())
}

fn get_command(name: &str) -> Result<()> {
    info!("Getting setting: {}", name);
    let config = Config::load()?;
    println!("{}", config.get_setting(name)?);
    Ok(())
}

fn set_command(name: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set_setting(name, value)?;
    config.save()?;
    println!("{} {} = {}", "✓".bright_green().bold(), name.bright_white().bold(), config.get_setting(name)?.cyan());
    Ok(())
}

fn reset_command(name: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.reset_setting(name)?;
    config.save()?;
    println!("{} {} reset to default", "✓".bright_green().bold(), name.bright_white().bold());
    Ok(())
}

fn reset_all_command(force: bool) -> Result<()> {
    if !force && !prompt_confirmation("Reset all settings to their defaults?", false)? {
        println!("Cancelled.");
        return Ok(());
    }

    let mut config = Config::load()?;
    config.reset_all();
    config.save()?;
    println!("{} All settings reset to defaults", "✓".bright_green().bold());
    Ok(())
}
