//! Validate command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use nlpscrub_core::Resources;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to language configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating language configuration: {}",
            self.language_config.display()
        );

        match Resources::from_config_file(&self.language_config) {
            Ok(resources) => {
                println!("✓ Configuration is valid!");
                println!("  Language code: {}", resources.language_code());
                println!("  Language name: {}", resources.language_name());
                println!("  Stopwords: {}", resources.stopwords().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
