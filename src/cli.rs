//! CLI interface for vergil.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::utils::Settings;

pub mod config;
pub mod convert;
pub mod range;
pub mod text;

/// vergil: small helpers for conversion, joining and range checks.
#[derive(Parser)]
#[command(name = "vergil")]
#[command(about = "Small helpers for conversion, joining and range checks", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The main command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Joins items with a delimiter.
    Join(text::JoinCommand),
    /// Checks whether a target is among the items, ignoring case.
    Contains(text::ContainsCommand),
    /// Checks whether a number lies between two bounds.
    Range(range::RangeCommand),
    /// Converts a value into a named type.
    Convert(convert::ConvertCommand),
    /// Prints the negation of a boolean.
    Invert(convert::InvertCommand),
    /// Settings inspection.
    Config(config::ConfigCommand),
}

impl Commands {
    /// Returns true if the command reads the settings file.
    pub fn uses_settings(&self) -> bool {
        matches!(
            self,
            Commands::Join(_) | Commands::Range(_) | Commands::Config(_)
        )
    }
}

impl Cli {
    /// Executes the CLI command, printing its output.
    pub fn execute(self) -> Result<()> {
        let settings = if self.command.uses_settings() {
            Settings::load()?
        } else {
            Settings::default()
        };
        let output = self.run(&settings)?;
        println!("{output}");
        Ok(())
    }

    /// Runs the command against `settings` and returns its output.
    pub fn run(self, settings: &Settings) -> Result<String> {
        match self.command {
            Commands::Join(cmd) => cmd.run(settings),
            Commands::Contains(cmd) => cmd.run(),
            Commands::Range(cmd) => cmd.run(settings),
            Commands::Convert(cmd) => cmd.run(),
            Commands::Invert(cmd) => cmd.run(),
            Commands::Config(cmd) => cmd.run(settings),
        }
    }
}
