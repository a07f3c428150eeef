//! Conversion commands.

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;

use crate::utils::{convert, Invert, TargetType};

/// Convert command options.
#[derive(Parser)]
pub struct ConvertCommand {
    /// Type to convert into.
    #[arg(long, short, value_enum)]
    pub to: TargetType,

    /// Value to convert. Kept as typed for `--to string`; for other targets
    /// read as JSON when valid, otherwise as a string.
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

impl ConvertCommand {
    /// Executes the convert command.
    pub fn run(self) -> Result<String> {
        let value = if self.to == TargetType::String {
            Value::String(self.value.clone())
        } else {
            serde_json::from_str::<Value>(&self.value)
                .unwrap_or_else(|_| Value::String(self.value.clone()))
        };

        self.to
            .convert(value)
            .with_context(|| format!("Failed to convert '{}'", self.value))
    }
}

/// Invert command options.
#[derive(Parser)]
pub struct InvertCommand {
    /// Boolean to negate.
    pub value: String,
}

impl InvertCommand {
    /// Executes the invert command.
    pub fn run(self) -> Result<String> {
        let mut flag = convert::parse::<bool>(&self.value)?;
        Ok(flag.invert().to_string())
    }
}
