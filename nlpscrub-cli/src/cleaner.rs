//! File cleaning: read, clean, write next to the input

use std::fs;
use std::path::{Path, PathBuf};

use nlpscrub_core::{CleanOutcome, TextProcessor};

use crate::error::CliError;
use crate::input::FileReader;

/// Default prefix of cleaned file names
pub const DEFAULT_PREFIX: &str = "cleaned_";

/// Cleans whole files with a configured processor
#[derive(Debug, Clone)]
pub struct FileCleaner {
    processor: TextProcessor,
    prefix: String,
}

impl FileCleaner {
    pub fn new(processor: TextProcessor) -> Self {
        Self {
            processor,
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    /// Cleaner writing to `{prefix}{file name}`
    ///
    /// The prefix must be non-empty and free of path separators, so the
    /// output is always a distinct sibling of the input.
    pub fn with_prefix(
        processor: TextProcessor,
        prefix: impl Into<String>,
    ) -> Result<Self, CliError> {
        let prefix = prefix.into();
        validate_prefix(&prefix)?;
        Ok(Self { processor, prefix })
    }

    pub fn processor(&self) -> &TextProcessor {
        &self.processor
    }

    /// Sibling of `input` whose file name carries the prefix
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        input.with_file_name(format!("{}{name}", self.prefix))
    }

    /// Clean `input` and write the result to [`output_path`](Self::output_path)
    pub fn clean_file(&self, input: &Path) -> Result<PathBuf, CliError> {
        self.clean_file_with_report(input).map(|(path, _)| path)
    }

    /// Like [`clean_file`](Self::clean_file), also returning the pipeline outcome
    pub fn clean_file_with_report(&self, input: &Path) -> Result<(PathBuf, CleanOutcome), CliError> {
        let outcome = self.clean_to_outcome(input)?;
        let output = self.output_path(input);

        fs::write(&output, &outcome.text).map_err(|e| CliError::write(&output, e))?;
        log::info!("Cleaned {} -> {}", input.display(), output.display());

        Ok((output, outcome))
    }

    /// Clean `input` without writing anything
    pub fn clean_to_outcome(&self, input: &Path) -> Result<CleanOutcome, CliError> {
        let content = FileReader::read_text(input)?;
        log::debug!("Read {} bytes from {}", content.len(), input.display());
        Ok(self.processor.clean_with_report(&content)?)
    }
}

/// Reject prefixes that would overwrite the input or leave its directory
pub fn validate_prefix(prefix: &str) -> Result<(), CliError> {
    if prefix.is_empty() {
        return Err(CliError::Config(
            "output prefix must not be empty".to_string(),
        ));
    }
    if prefix.chars().any(std::path::is_separator) {
        return Err(CliError::Config(format!(
            "output prefix must not contain path separators: {prefix}"
        )));
    }
    Ok(())
}
