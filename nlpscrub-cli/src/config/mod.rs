//! Configuration module

use std::path::Path;

use nlpscrub_core::{CleanOption, OptionsPatch};
use serde::{Deserialize, Serialize};

use crate::error::CliError;
use crate::input::FileReader;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Pipeline option overrides; unset keys keep their defaults
    #[serde(default)]
    pub pipeline: OptionsPatch,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// File name prefix for cleaned files
    pub output_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
            output_prefix: "cleaned_".to_string(),
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = FileReader::read_text(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CliError> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::Config(e.to_string()))?;

        if config.output.output_prefix.is_empty() {
            return Err(CliError::Config(
                "output_prefix must not be empty".to_string(),
            ));
        }
        Ok(config)
    }

    /// Commented template listing every option with its default
    pub fn template() -> String {
        let defaults = OutputConfig::default();
        let mut template = String::from(
            "# nlpscrub configuration\n\
             \n\
             # Pipeline steps, in execution order. Every step is enabled by default;\n\
             # uncomment a line and set it to false to skip that step.\n\
             [pipeline]\n",
        );
        for option in CleanOption::ALL {
            template.push_str(&format!("# {} = true\n", option.key()));
        }

        template.push_str(&format!(
            "\n[output]\n\
             # text or json\n\
             default_format = \"{}\"\n\
             pretty_json = {}\n\
             # Cleaned files are written next to their input with this prefix\n\
             output_prefix = \"{}\"\n",
            defaults.default_format.as_str(),
            defaults.pretty_json,
            defaults.output_prefix
        ));
        template
    }
}
