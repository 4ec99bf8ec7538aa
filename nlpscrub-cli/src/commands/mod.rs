//! CLI command implementations

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use nlpscrub_core::{Resources, TextProcessor};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::FileReader;

pub mod analyze;
pub mod clean;
pub mod generate_config;
pub mod list;
pub mod parse;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Clean files (or an inline string) through the pipeline
    Clean(clean::CleanArgs),

    /// Extract URLs, hashtags, mentions, reserved words, emojis and smileys
    Parse(parse::ParseArgs),

    /// Run a single analysis (tokens, frequencies, stopwords, lemmas, emojis)
    Analyze(analyze::AnalyzeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: list::ListCommands,
    },

    /// Write a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Validate an external language configuration
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        match self {
            Commands::Clean(args) => args.execute(quiet),
            Commands::Parse(args) => args.execute(),
            Commands::Analyze(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// Text given inline or read from one file
#[derive(Debug, Args)]
pub struct TextSource {
    /// Input file
    #[arg(
        short,
        long,
        value_name = "FILE",
        conflicts_with = "text",
        required_unless_present = "text"
    )]
    pub input: Option<PathBuf>,

    /// Inline text
    #[arg(long, value_name = "STRING")]
    pub text: Option<String>,
}

impl TextSource {
    pub fn read(&self) -> Result<String, CliError> {
        match (&self.text, &self.input) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => FileReader::read_text(path),
            (None, None) => Err(CliError::Config(
                "either --input or --text is required".to_string(),
            )),
        }
    }
}

/// Configuration and language resources shared by every processing command
#[derive(Debug, Args, Default)]
pub struct ResourceArgs {
    /// CLI configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// External language configuration (stopwords, abbreviations, lemma rules)
    #[arg(long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,
}

impl ResourceArgs {
    /// The configuration file, or defaults when none was given
    pub fn load_config(&self) -> Result<CliConfig> {
        match &self.config {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                Ok(CliConfig::load(path)
                    .with_context(|| format!("Failed to load {}", path.display()))?)
            }
            None => Ok(CliConfig::default()),
        }
    }

    /// Processor over the selected language resources with `config` applied
    pub fn processor(&self, config: &CliConfig) -> Result<TextProcessor> {
        let resources = match &self.language_config {
            Some(path) => {
                let resources = Resources::from_config_file(path).with_context(|| {
                    format!("Failed to load language configuration {}", path.display())
                })?;
                Arc::new(resources)
            }
            None => Resources::shared()?,
        };
        log::debug!("Using language {}", resources.language_name());

        let mut processor = TextProcessor::new(resources);
        processor.configure(config.pipeline);
        Ok(processor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    #[test]
    fn test_parse_clean_command() {
        let cli = TestCli::try_parse_from([
            "nlpscrub", "clean", "-i", "a.txt", "-i", "b/*.txt", "--disable", "remove_numbers",
        ])
        .unwrap();

        match cli.command {
            Commands::Clean(args) => {
                assert_eq!(args.input, vec!["a.txt", "b/*.txt"]);
                assert_eq!(args.disable, vec!["remove_numbers"]);
                assert!(!args.stdout);
            }
            other => panic!("expected clean, got {other:?}"),
        }
    }

    #[test]
    fn test_text_source_requires_one_input() {
        assert!(TestCli::try_parse_from(["nlpscrub", "parse"]).is_err());
        assert!(TestCli::try_parse_from([
            "nlpscrub", "parse", "--text", "hi", "-i", "a.txt"
        ])
        .is_err());
        assert!(TestCli::try_parse_from(["nlpscrub", "parse", "--text", "hi"]).is_ok());
    }

    #[test]
    fn test_analyze_kind_names() {
        let cli =
            TestCli::try_parse_from(["nlpscrub", "analyze", "emoji-frequency", "--text", "🔥"])
                .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Analyze(analyze::AnalyzeArgs {
                kind: analyze::AnalysisKind::EmojiFrequency,
                ..
            })
        ));
    }

    #[test]
    fn test_text_source_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("in.txt");
        std::fs::write(&path, "from file").unwrap();

        let source = TextSource {
            input: Some(path),
            text: None,
        };
        assert_eq!(source.read().unwrap(), "from file");
    }

    #[test]
    fn test_resource_args_apply_config() {
        let config = CliConfig::from_toml_str("[pipeline]\nconvert_to_lowercase = false\n").unwrap();
        let processor = ResourceArgs::default().processor(&config).unwrap();

        assert!(!processor.options().convert_to_lowercase);
        assert_eq!(processor.clean("Hello #tag").unwrap(), "Hello");
    }
}
