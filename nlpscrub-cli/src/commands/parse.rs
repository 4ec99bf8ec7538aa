//! Parse command implementation

use std::io;

use anyhow::Result;
use clap::Args;

use super::{ResourceArgs, TextSource};
use crate::output::{create_formatter, OutputFormat};

/// Arguments for the parse command
#[derive(Debug, Args)]
pub struct ParseArgs {
    #[command(flatten)]
    pub source: TextSource,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub resources: ResourceArgs,
}

impl ParseArgs {
    /// Execute the parse command
    pub fn execute(&self) -> Result<()> {
        let config = self.resources.load_config()?;
        let processor = self.resources.processor(&config)?;
        let text = self.source.read()?;

        let result = processor.parse(&text)?;
        log::info!("Found {} element(s)", result.total_matches());

        let format = self.format.unwrap_or(config.output.default_format);
        let mut formatter = create_formatter(format, config.output.pretty_json, io::stdout());
        formatter.parse_result(&result)?;
        formatter.finish()
    }
}
