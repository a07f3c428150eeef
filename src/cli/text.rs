//! String commands: join and case-insensitive lookup.

use anyhow::Result;
use clap::Parser;

use crate::utils::{ContainsIgnoreCase, JoinExt, Settings};

/// Join command options.
#[derive(Parser)]
pub struct JoinCommand {
    /// Delimiter placed between items (defaults to the configured delimiter).
    #[arg(long, short)]
    pub delimiter: Option<String>,

    /// Items to join.
    #[arg(value_name = "ITEM")]
    pub items: Vec<String>,
}

impl JoinCommand {
    /// Executes the join command.
    pub fn run(self, settings: &Settings) -> Result<String> {
        let delimiter = self.delimiter.unwrap_or_else(|| settings.delimiter());
        Ok(self.items.join_with(delimiter))
    }
}

/// Contains command options.
#[derive(Parser)]
pub struct ContainsCommand {
    /// String to look for.
    #[arg(long, short)]
    pub target: String,

    /// Items to search.
    #[arg(value_name = "ITEM")]
    pub items: Vec<String>,
}

impl ContainsCommand {
    /// Executes the contains command.
    pub fn run(self) -> Result<String> {
        Ok(self.items.contains_ignore_case(&self.target).to_string())
    }
}
