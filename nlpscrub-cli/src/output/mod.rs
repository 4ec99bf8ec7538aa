//! Output formatting module

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use nlpscrub_core::{CleanOutcome, FrequencyTable, ParseResult};
use serde::{Deserialize, Serialize};

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// A single transformed string
    fn text(&mut self, text: &str) -> Result<()>;

    /// An ordered list such as tokens or emojis
    fn list(&mut self, items: &[String]) -> Result<()>;

    /// A frequency table, most common first
    fn frequency(&mut self, table: &FrequencyTable) -> Result<()>;

    /// Every element extracted from a text
    fn parse_result(&mut self, result: &ParseResult) -> Result<()>;

    /// A cleaning result; `written_to` is set when the text went to a file
    fn cleaned(&mut self, outcome: &CleanOutcome, written_to: Option<&Path>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one item per line
    #[default]
    Text,
    /// JSON document
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// Formatter for `format` writing to `writer`
pub fn create_formatter<W>(format: OutputFormat, pretty_json: bool, writer: W) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
    }
}
