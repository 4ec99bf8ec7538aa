//! Generate config command implementation

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::config::CliConfig;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, CliConfig::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Uncomment and set the pipeline steps you want to skip");
        println!("2. Use it for cleaning:");
        println!(
            "   nlpscrub clean -i tweets.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("nlpscrub.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };
        args.execute().unwrap();

        let config = CliConfig::load(&output_path).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_execute_unwritable_path() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("/nonexistent/dir/nlpscrub.toml"),
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Failed to write"));
    }
}
