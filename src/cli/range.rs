//! Range command.

use anyhow::Result;
use clap::Parser;

use crate::utils::{InRange, Settings};

/// Range command options.
#[derive(Parser)]
pub struct RangeCommand {
    /// Value to check.
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    /// Lower bound.
    #[arg(allow_negative_numbers = true)]
    pub min: f64,

    /// Upper bound.
    #[arg(allow_negative_numbers = true)]
    pub max: f64,

    /// Count the bounds as part of the range.
    #[arg(long, conflicts_with = "exclusive")]
    pub inclusive: bool,

    /// Exclude the bounds from the range.
    #[arg(long)]
    pub exclusive: bool,
}

impl RangeCommand {
    /// Executes the range command.
    pub fn run(self, settings: &Settings) -> Result<String> {
        let inclusive = if self.inclusive {
            true
        } else if self.exclusive {
            false
        } else {
            settings.inclusive()?
        };

        if self.min > self.max {
            tracing::warn!(min = self.min, max = self.max, "Lower bound exceeds upper bound");
        }

        Ok(self
            .value
            .is_in_range(self.min, self.max, inclusive)
            .to_string())
    }
}
