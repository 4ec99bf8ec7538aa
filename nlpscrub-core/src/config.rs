//! Processor configuration

use crate::error::{ProcessingError, Result};
use crate::language::get_language_config;
use crate::pipeline::{CleanOptions, OptionsPatch};
use crate::resources::DEFAULT_LANGUAGE;

/// Default configuration constants
pub mod defaults {
    /// Largest accepted input in bytes (64MB)
    pub const MAX_TEXT_SIZE: usize = 64 * 1024 * 1024;
}

/// Settings a [`crate::TextProcessor`] is created with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorConfig {
    pub(crate) language: String,
    pub(crate) options: CleanOptions,
    pub(crate) max_text_size: usize,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            options: CleanOptions::default(),
            max_text_size: defaults::MAX_TEXT_SIZE,
        }
    }
}

impl ProcessorConfig {
    /// Create a configuration builder
    pub fn builder() -> ProcessorConfigBuilder {
        ProcessorConfigBuilder::default()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn options(&self) -> &CleanOptions {
        &self.options
    }

    pub fn max_text_size(&self) -> usize {
        self.max_text_size
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.max_text_size == 0 {
            return Err(ProcessingError::ResourceInit(
                "max_text_size must be greater than 0".into(),
            ));
        }

        get_language_config(&self.language)?;
        Ok(())
    }
}

/// Fluent builder for [`ProcessorConfig`]
#[derive(Debug, Default)]
pub struct ProcessorConfigBuilder {
    language: Option<String>,
    options: Option<CleanOptions>,
    patch: OptionsPatch,
    max_text_size: Option<usize>,
}

impl ProcessorConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language by code or name
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    /// Replace the initial options wholesale
    pub fn options(mut self, options: CleanOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Overlay a patch on the initial options
    pub fn configure(mut self, patch: OptionsPatch) -> Self {
        self.patch.overlay(&patch);
        self
    }

    /// Set the input size limit in bytes
    pub fn max_text_size(mut self, bytes: usize) -> Self {
        self.max_text_size = Some(bytes);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ProcessorConfig> {
        let mut config = ProcessorConfig::default();

        if let Some(language) = self.language {
            config.language = language;
        }

        if let Some(options) = self.options {
            config.options = options;
        }
        config.options.merge(&self.patch);

        if let Some(size) = self.max_text_size {
            config.max_text_size = size;
        }

        config.validate()?;
        Ok(config)
    }
}
