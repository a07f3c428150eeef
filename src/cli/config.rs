//! Configuration-related CLI commands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::utils::Settings;

/// Configuration operations.
#[derive(Parser)]
pub struct ConfigCommand {
    /// Configuration subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

/// Configuration subcommands.
#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Shows the effective defaults after environment overrides.
    Show(ShowCommand),
    /// Prints the settings file location.
    Path(PathCommand),
}

/// Show command options.
#[derive(Parser)]
pub struct ShowCommand {}

/// Path command options.
#[derive(Parser)]
pub struct PathCommand {}

impl ConfigCommand {
    /// Executes the config command.
    pub fn run(self, settings: &Settings) -> Result<String> {
        match self.command {
            ConfigSubcommands::Show(show_cmd) => show_cmd.run(settings),
            ConfigSubcommands::Path(path_cmd) => path_cmd.run(),
        }
    }
}

impl ShowCommand {
    /// Executes the show command.
    pub fn run(self, settings: &Settings) -> Result<String> {
        let resolved = settings.resolved()?;
        serde_json::to_string_pretty(&resolved).context("Failed to serialize settings")
    }
}

impl PathCommand {
    /// Executes the path command.
    pub fn run(self) -> Result<String> {
        Ok(Settings::get_settings_path()?.display().to_string())
    }
}
