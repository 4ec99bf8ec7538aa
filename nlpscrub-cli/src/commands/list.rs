//! List command implementation

use anyhow::Result;
use clap::Subcommand;
use nlpscrub_core::{list_available_languages, CleanOption, CleanOptions};

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List pipeline options in execution order
    Options,

    /// List embedded languages
    Languages,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        for line in self.lines()? {
            println!("{line}");
        }
        Ok(())
    }

    fn lines(&self) -> Result<Vec<String>> {
        match self {
            ListCommands::Options => {
                let defaults = CleanOptions::default();
                Ok(CleanOption::ALL
                    .iter()
                    .enumerate()
                    .map(|(i, option)| {
                        format!(
                            "{:>2}. {} (default: {})",
                            i + 1,
                            option.key(),
                            defaults.is_enabled(*option)
                        )
                    })
                    .collect())
            }
            ListCommands::Languages => Ok(list_available_languages()?
                .into_iter()
                .map(str::to_string)
                .collect()),
        }
    }
}
