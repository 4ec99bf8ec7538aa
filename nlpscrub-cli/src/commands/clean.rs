//! Clean command implementation

use std::io;

use anyhow::Result;
use clap::Args;
use nlpscrub_core::{CleanOutcome, OptionsPatch, TextProcessor};

use super::ResourceArgs;
use crate::cleaner::FileCleaner;
use crate::input::resolve_patterns;
use crate::output::{create_formatter, OutputFormat};
use crate::progress::ProgressReporter;

/// Arguments for the clean command
#[derive(Debug, Args)]
pub struct CleanArgs {
    /// Input files or patterns (supports glob)
    #[arg(
        short,
        long,
        value_name = "FILE/PATTERN",
        required_unless_present = "text",
        conflicts_with = "text"
    )]
    pub input: Vec<String>,

    /// Clean an inline string and print the result
    #[arg(long, value_name = "STRING")]
    pub text: Option<String>,

    /// Print cleaned text instead of writing `cleaned_` files
    #[arg(long)]
    pub stdout: bool,

    /// File name prefix for cleaned files (overrides the configuration)
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Disable a pipeline step (repeatable)
    #[arg(long, value_name = "KEY")]
    pub disable: Vec<String>,

    /// Enable a pipeline step (repeatable, applied after --disable)
    #[arg(long, value_name = "KEY")]
    pub enable: Vec<String>,

    /// Include the emoji reports of enabled report steps
    #[arg(long)]
    pub report: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub resources: ResourceArgs,
}

impl CleanArgs {
    /// Execute the clean command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        log::debug!("Arguments: {:?}", self);

        let config = self.resources.load_config()?;
        let mut processor = self.resources.processor(&config)?;
        self.apply_toggles(&mut processor)?;

        let format = self.format.unwrap_or(config.output.default_format);
        let mut formatter = create_formatter(format, config.output.pretty_json, io::stdout());

        if let Some(text) = &self.text {
            let outcome = processor.clean_with_report(text)?;
            formatter.cleaned(&self.with_reports(outcome), None)?;
            return formatter.finish();
        }

        let files = resolve_patterns(&self.input)?;
        log::info!("Cleaning {} file(s)", files.len());

        let prefix = self
            .prefix
            .clone()
            .unwrap_or_else(|| config.output.output_prefix.clone());
        let cleaner = FileCleaner::with_prefix(processor, prefix)?;

        let mut progress = ProgressReporter::new(quiet);
        progress.init_files(files.len() as u64);

        for file in &files {
            if self.stdout {
                let outcome = cleaner.clean_to_outcome(file)?;
                formatter.cleaned(&self.with_reports(outcome), None)?;
            } else {
                let (output, outcome) = cleaner.clean_file_with_report(file)?;
                formatter.cleaned(&self.with_reports(outcome), Some(output.as_path()))?;
            }
            progress.file_completed(&file.display().to_string());
        }

        progress.finish();
        formatter.finish()
    }

    /// Apply `--disable` then `--enable`; unknown keys are rejected
    fn apply_toggles(&self, processor: &mut TextProcessor) -> Result<()> {
        let pairs = self
            .disable
            .iter()
            .map(|key| (key.as_str(), false))
            .chain(self.enable.iter().map(|key| (key.as_str(), true)));
        let patch = OptionsPatch::from_pairs(pairs)?;
        processor.configure(patch);
        Ok(())
    }

    fn with_reports(&self, mut outcome: CleanOutcome) -> CleanOutcome {
        if !self.report {
            outcome.emojis = None;
            outcome.emoji_frequency = None;
        }
        outcome
    }
}
